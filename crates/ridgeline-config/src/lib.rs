//! Configuration for the Ridgeline scene generator.
//!
//! Settings persist to disk as a RON file and can be overridden from the
//! command line via clap. Unknown or missing fields fall back to defaults so
//! older config files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, SceneConfig, TerrainConfig};
pub use error::ConfigError;
