//! Host/session collaborator contract.
//!
//! The filter performs no device or network I/O of its own; everything it
//! needs from the hosting session goes through this trait. One session
//! lives for the duration of one device connection, and the chain host
//! hands the same handle to every filter it initializes.

use crate::error::DeviceError;
use crate::registry::InstructorId;

/// The hosting session a filter is bound to at initialization.
///
/// Implementations are expected to be cheap to call from the message
/// dispatch path. `Send + Sync` so a host that parallelizes the two
/// message directions can share one handle across them.
pub trait Session: Send + Sync {
    /// The session's own instructor identity.
    fn instructor_id(&self) -> InstructorId;

    /// Ask the device driver to start accepting votes.
    ///
    /// May block until the hardware acknowledges. Failures surface to the
    /// caller of `initialize`; the filter never retries on its own.
    fn start_accepting_input(&self) -> Result<(), DeviceError>;

    /// Push a message into the outbound path, bypassing further
    /// input-side filtering.
    fn emit(&self, message: &str);
}
