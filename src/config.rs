//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file is honoured (loaded via `dotenvy` in `main.rs`).
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SEED_CATEGORIES` - Pre-fill the category store with the default
//!   categories (default: `true`)
//! - `INQUIRY_SUBJECT` - Subject of the Gmail compose link on listing cards
//!   (default: `Distributor inquiry from National Herbs`)

use anyhow::Result;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_INQUIRY_SUBJECT: &str = "Distributor inquiry from National Herbs";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Seed the in-memory category store with Skincare, Hair Care and Wellness.
    pub seed_categories: bool,
    /// Subject line used for distributor inquiry e-mails.
    pub inquiry_subject: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            seed_categories: true,
            inquiry_subject: DEFAULT_INQUIRY_SUBJECT.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// [`Config::default`] for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let seed_categories = env::var("SEED_CATEGORIES")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.seed_categories);

        let inquiry_subject = env::var("INQUIRY_SUBJECT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.inquiry_subject);

        Self {
            listen_addr,
            log_level,
            log_format,
            seed_categories,
            inquiry_subject,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a socket address (`ip:port`)
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'ip:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Seed categories: {}", self.seed_categories);
        tracing::info!("  Inquiry subject: {}", self.inquiry_subject);
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "LISTEN",
        "RUST_LOG",
        "LOG_FORMAT",
        "SEED_CATEGORIES",
        "INQUIRY_SUBJECT",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment run serially due to #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:http".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "[::1]:8080".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_listen_addr_must_be_bindable_socket_addr() {
        let mut config = Config::default();

        config.listen_addr = "localhost:3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:70000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("yes"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert!(config.seed_categories);
        assert_eq!(config.inquiry_subject, DEFAULT_INQUIRY_SUBJECT);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("LOG_FORMAT", "json");
            env::set_var("SEED_CATEGORIES", "false");
            env::set_var("INQUIRY_SUBJECT", "Partnership request");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.log_format, "json");
        assert!(!config.seed_categories);
        assert_eq!(config.inquiry_subject, "Partnership request");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_inquiry_subject_falls_back() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("INQUIRY_SUBJECT", "   ");
        }

        let config = Config::from_env();
        assert_eq!(config.inquiry_subject, DEFAULT_INQUIRY_SUBJECT);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_bad_format() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
