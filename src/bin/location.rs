//! CLI tool for distributor location strings.
//!
//! Composes, parses and interactively re-edits the single `location` string
//! stored by the Backend API, without going through the HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # Build the stored string from fields
//! cargo run --bin location -- compose --city Kathmandu --zip 44600 --extra "Nayabazar, Sorakhutte"
//!
//! # Split a stored string (legacy comma format included)
//! cargo run --bin location -- parse "Kathmandu, Nayabazar, Sorakhutte"
//! cargo run --bin location -- parse "Pokhara 33700 — Lakeside" --json
//!
//! # Fix a stored string field by field with a live preview
//! cargo run --bin location -- edit "Kathmandu, Nayabazar 44600"
//! ```

use distributor_locations::utils::location::{LocationParts, compose_location, parse_location};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};

/// CLI tool for distributor location strings.
#[derive(Parser)]
#[command(name = "location")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the stored location string from structured fields
    Compose {
        /// City (required for a meaningful location)
        #[arg(short, long, default_value = "")]
        city: String,

        /// Optional 5-digit ZIP
        #[arg(short, long, default_value = "")]
        zip: String,

        /// Street, area or landmark
        #[arg(short, long, default_value = "")]
        extra: String,
    },

    /// Parse a stored location string into city, ZIP and extra details
    Parse {
        /// Stored location string
        location: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Re-edit a stored location string field by field
    Edit {
        /// Stored location string (empty to start from scratch)
        #[arg(default_value = "")]
        location: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compose { city, zip, extra } => {
            println!("{}", compose_location(&city, &zip, &extra));
        }
        Commands::Parse { location, json } => {
            let parts = parse_location(Some(&location));
            if json {
                print_json(&parts)?;
            } else {
                print_parts(&parts);
            }
        }
        Commands::Edit { location } => edit(&location)?,
    }

    Ok(())
}

fn print_json(parts: &LocationParts) -> Result<()> {
    let value = serde_json::json!({
        "city": parts.city,
        "zip": parts.zip,
        "extra": parts.extra,
        "display_line": parts.display_line(),
        "city_badge": parts.city_badge(),
    });
    let text = serde_json::to_string_pretty(&value).context("Failed to serialize location")?;
    println!("{text}");
    Ok(())
}

/// Prints parsed fields.
///
/// ```text
/// 📍 Location
///
///   City:    Kathmandu
///   ZIP:     44600
///   Extra:   Nayabazar, Sorakhutte
///   Display: Kathmandu, 44600, Nayabazar, Sorakhutte
///   Badge:   Kathmandu
/// ```
fn print_parts(parts: &LocationParts) {
    println!("{}", "📍 Location".bright_blue().bold());
    println!();
    println!("  {:<9}{}", "City:".bright_white(), or_dash(&parts.city).cyan());
    println!("  {:<9}{}", "ZIP:".bright_white(), or_dash(&parts.zip).cyan());
    println!("  {:<9}{}", "Extra:".bright_white(), or_dash(&parts.extra).cyan());
    println!(
        "  {:<9}{}",
        "Display:".bright_white(),
        or_dash(&parts.display_line()).bright_black()
    );
    println!(
        "  {:<9}{}",
        "Badge:".bright_white(),
        or_dash(&parts.city_badge()).bright_black()
    );
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "—".to_string()
    } else {
        value.to_string()
    }
}

/// Interactive edit loop.
///
/// # Flow
///
/// 1. Parse the stored string and pre-fill city, ZIP and extra
/// 2. Prompt for each field (ZIP must be empty or 5 digits, city required)
/// 3. Show the re-composed preview
/// 4. Confirm, or go back to step 2
/// 5. Print the final string to store
fn edit(location: &str) -> Result<()> {
    println!("{}", "✏️  Edit location".bright_blue().bold());
    if !location.trim().is_empty() {
        println!("  Stored: {}", location.bright_black());
    }
    println!();

    let mut parts = parse_location(Some(location));

    loop {
        parts = prompt_parts(&parts)?;
        let preview = parts.compose();

        println!();
        println!(
            "  {} {}",
            "Final location to be saved:".bright_white(),
            preview.bright_yellow().bold()
        );
        println!();

        let confirmed = Confirm::new()
            .with_prompt("Save this location?")
            .default(true)
            .interact()?;

        if confirmed {
            println!();
            println!("{}", "✅ Location ready".green().bold());
            println!("{preview}");
            return Ok(());
        }

        println!("{}", "↩️  Editing again".yellow());
        println!();
    }
}

fn prompt_parts(current: &LocationParts) -> Result<LocationParts> {
    let city: String = Input::new()
        .with_prompt("City")
        .with_initial_text(current.city.clone())
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("City is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let zip: String = Input::new()
        .with_prompt("ZIP (optional)")
        .with_initial_text(current.zip.clone())
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), &str> {
            let zip = input.trim();
            if zip.is_empty() || (zip.len() == 5 && zip.chars().all(|c| c.is_ascii_digit())) {
                Ok(())
            } else {
                Err("ZIP should be 5 digits")
            }
        })
        .interact_text()?;

    let extra: String = Input::new()
        .with_prompt("Extra location details (street/area/landmark)")
        .with_initial_text(current.extra.clone())
        .allow_empty(true)
        .interact_text()?;

    Ok(LocationParts::new(city.trim(), zip.trim(), extra.trim()))
}
