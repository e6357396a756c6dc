//! Muse Core
//!
//! Shared building blocks for the Muse creative-writing engine crates:
//!
//! - [`MuseError`] and the crate-wide [`Result`] alias
//! - Environment/config loading helpers backed by `.env` files
//! - Logging setup on top of `tracing-subscriber`
//! - The [`Service`] and [`Plugin`] lifecycle traits that engine plugins implement

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod logging;
pub mod plugin;
pub mod service;

pub use config::{get_env_bool, load_env, parse_bool};
pub use error::{MuseError, Result};
pub use logging::init_logging;
pub use plugin::{resolve_setting, Plugin};
pub use service::{Service, ServiceHealth};
