//! YAML configuration for the filter.
//!
//! A single optional property names the statically configured instructor
//! ids; the session's own identity is added at filter initialization, not
//! here. Missing or unreadable configuration is deliberately not fatal:
//! [`load_or_default`] degrades to defaults with a logged diagnostic, and
//! the filter then decides activation from whatever set it ends up with.

mod error;
mod loader;
mod schema;

pub use error::ConfigError;
pub use loader::{default_config_paths, find_config_file, load_config, load_or_default};
pub use schema::Config;
