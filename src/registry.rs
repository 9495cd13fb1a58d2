//! Instructor identities and the registry consulted by the filter.

use std::fmt;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Opaque device identity granted elevated, always-visible voting status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstructorId(String);

impl InstructorId {
    /// Wrap a raw identity string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identity as it appears on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstructorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InstructorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for InstructorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Duplicate-free, insertion-ordered set of instructor identities.
///
/// Membership drives the output transform; insertion order only matters
/// for the roster rendered into log lines. The set is small (a handful of
/// ids per session), so lookups scan a `Vec` rather than hashing.
#[derive(Debug, Clone, Default)]
pub struct InstructorRegistry {
    ids: Vec<InstructorId>,
}

impl InstructorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the `instructors` configuration property.
    ///
    /// Entries are comma-separated, whitespace-trimmed; empty entries are
    /// dropped and duplicates collapse to the first occurrence.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new();
        for id in config.instructor_ids() {
            registry.register(InstructorId::new(id));
        }
        registry
    }

    /// Insert an identity. Inserting one already present is a no-op.
    pub fn register(&mut self, id: InstructorId) {
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    /// Membership test against a wire identity.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known.as_str() == id)
    }

    /// Number of registered identities.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate identities in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, InstructorId> {
        self.ids.iter()
    }
}

impl fmt::Display for InstructorRegistry {
    /// Comma-separated roster, in insertion order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.ids.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(id.as_str())?;
        }
        Ok(())
    }
}
