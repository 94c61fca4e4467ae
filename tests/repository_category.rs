use distributor_locations::domain::entities::{Category, NewCategory};
use distributor_locations::domain::repositories::CategoryRepository;
use distributor_locations::error::AppError;
use distributor_locations::infrastructure::persistence::InMemoryCategoryRepository;

fn new_category(name: &str) -> NewCategory {
    NewCategory {
        name: name.to_string(),
        description: String::new(),
    }
}

#[tokio::test]
async fn test_add_assigns_increasing_ids() {
    let repo = InMemoryCategoryRepository::new();

    let first = repo.add(new_category("Teas")).await.unwrap();
    let second = repo.add(new_category("Oils")).await.unwrap();

    assert!(second.id > first.id);
    assert_eq!(repo.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_add_never_reuses_future_ids() {
    let far_future = i64::MAX / 2;
    let repo =
        InMemoryCategoryRepository::with_categories(vec![Category::new(far_future, "Future", "")]);

    let added = repo.add(new_category("Next")).await.unwrap();

    assert_eq!(added.id, far_future + 1);
}

#[tokio::test]
async fn test_update_replaces_in_place() {
    let repo = InMemoryCategoryRepository::seeded();

    let updated = repo
        .update(Category::new(1, "Face Care", "Creams"))
        .await
        .unwrap();
    assert_eq!(updated.name, "Face Care");

    let list = repo.list().await.unwrap();
    assert_eq!(list[0], Category::new(1, "Face Care", "Creams"));
    assert_eq!(list.len(), 3);
}

#[tokio::test]
async fn test_update_unknown_is_not_found() {
    let repo = InMemoryCategoryRepository::seeded();

    let result = repo.update(Category::new(42, "Ghost", "")).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete_keeps_order() {
    let repo = InMemoryCategoryRepository::seeded();

    repo.delete(2).await.unwrap();

    let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Skincare", "Wellness"]);

    let result = repo.delete(2).await;
    assert!(matches!(result, Err(AppError::NotFound { .. })));
}
