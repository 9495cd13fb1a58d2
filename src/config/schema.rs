//! Configuration schema.

use serde::Deserialize;

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Comma-separated instructor ids recognized in addition to the
    /// session's own, e.g. `"371BA68A,1A2B3C4D"`. Absent means none.
    #[serde(default)]
    pub instructors: String,
}

impl Config {
    /// Iterate the configured ids: split on commas, trim whitespace, drop
    /// empty entries.
    pub fn instructor_ids(&self) -> impl Iterator<Item = &str> {
        self.instructors
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}
