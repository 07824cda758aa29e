//! Router configuration.
//!
//! - Layout settings from the optional `upkeep.yml` in [`schema`] and [`loader`]
//! - The `SKIP_UPKEEP` / `SKIP_TASKS` switches in [`flags`]
//!
//! # Example
//!
//! ```
//! use upkeep::config::{load_settings, Settings};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let settings = load_settings(temp.path()).unwrap();
//! assert_eq!(settings, Settings::default());
//! ```

pub mod flags;
pub mod loader;
pub mod schema;

pub use flags::{SkipFlags, SKIP_TASKS, SKIP_UPKEEP};
pub use loader::{load_settings, parse_settings, settings_path, SETTINGS_FILE};
pub use schema::Settings;
