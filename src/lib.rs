//! votegate: multiple-instructor message filter for a clicker/voting
//! pipeline.
//!
//! The crate sits between a polling-device driver and its clients. Every
//! outbound device message and every inbound client command passes through
//! an ordered chain of filters; this crate provides the chain contract
//! ([`filter::PipelineFilter`]) and the multiple-instructor filter
//! ([`filter::InstructorFilter`]) that:
//!
//! - tags votes from known instructor devices (`"instructor": true`),
//! - suppresses ordinary votes while voting is closed,
//! - patches the `acceptingChoices` flag in outgoing status snapshots,
//! - intercepts the `enable choices` / `disable choices` commands and
//!   acknowledges them directly to the host.
//!
//! Device I/O, network I/O, and filter ordering belong to the host; the
//! crate consumes them through the [`session::Session`] trait. Instructor
//! ids come from YAML configuration ([`config`]), with the session's own
//! identity registered at initialization.

pub mod config;
pub mod error;
pub mod filter;
pub mod gate;
pub mod protocol;
pub mod registry;
pub mod session;

pub use config::Config;
pub use filter::{Activation, InstructorFilter, PipelineFilter, Verdict};
pub use registry::{InstructorId, InstructorRegistry};
pub use session::Session;
