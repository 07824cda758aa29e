//! Command routing.
//!
//! - [`route`] maps a [`Request`] to a [`Route`]
//! - [`gate`] applies `SKIP_UPKEEP` / `SKIP_TASKS` and the existence check
//!
//! # Example
//!
//! ```
//! use upkeep::config::SkipFlags;
//! use upkeep::environment::Layout;
//! use upkeep::router::{resolve, Request, Route, RouterConfig};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! std::fs::write(temp.path().join("check.sh"), "#!/bin/sh\n").unwrap();
//!
//! let flags = SkipFlags { skip_upkeep: true, skip_tasks: false };
//! let config = RouterConfig::new(Layout::load(temp.path()).unwrap(), flags);
//! let route = resolve(&Request::Default, &config).unwrap();
//! assert!(matches!(route, Route::Skipped { .. }));
//! ```

pub mod gate;
pub mod route;

pub use gate::{gate, require};
pub use route::{resolve, Dispatch, Invocation, ListFormat, Request, Route, RouterConfig};
