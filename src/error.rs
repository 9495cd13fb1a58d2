//! Crate-level error types.
//!
//! `DeviceError` covers the failure set of the hardware calls delegated to
//! the hosting session; `FilterError` is the surface that `initialize`
//! reports to the chain host. No error ever escapes the two message hooks:
//! a transform that cannot be applied falls back to forwarding the message
//! unchanged.

use thiserror::Error;

/// Failures from the device driver behind the hosting session.
///
/// These originate in the collaborator, not in this crate; they are
/// modeled here so `Session` implementations and the filter agree on the
/// failure set of the delegated calls.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The polling thread was interrupted mid-operation.
    #[error("device operation interrupted")]
    Interrupted,

    /// Underlying I/O with the base station failed.
    #[error("device I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The device replied with something the driver could not interpret.
    #[error("device protocol error: {reason}")]
    Protocol {
        /// Human-readable description of the violation.
        reason: String,
    },
}

/// Filter initialization failures reported to the chain host.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The delegated start-accepting call failed.
    ///
    /// The filter stays inactive; retry and recovery are the host's
    /// responsibility.
    #[error("failed to start accepting device input: {source}")]
    StartAccepting {
        /// The underlying device failure.
        #[source]
        source: DeviceError,
    },
}
