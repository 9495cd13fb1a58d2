//! The filter-chain contract.
//!
//! The host owns filter ordering and calls each filter's hooks once per
//! message, in arrival order, one direction at a time. Hooks return a
//! [`Verdict`] instead of a rewritten string so the common passthrough
//! case stays copy-free, and receive `None` when an earlier stage already
//! consumed the cycle's message.

use std::sync::Arc;

use crate::error::FilterError;
use crate::session::Session;

mod instructor;

pub use instructor::InstructorFilter;

/// A filter hook's decision about one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Pass the original message through unchanged.
    Forward,

    /// Substitute a rewritten message.
    Replace(String),

    /// Consume the message; the host sees "no message this cycle".
    Consume,
}

impl Verdict {
    /// Returns `true` if this verdict forwards the original message.
    pub fn is_forward(&self) -> bool {
        matches!(self, Verdict::Forward)
    }

    /// Returns `true` if this verdict consumes the message.
    pub fn is_consume(&self) -> bool {
        matches!(self, Verdict::Consume)
    }

    /// Apply this verdict to the message it was produced for.
    pub fn apply(self, message: Option<&str>) -> Option<String> {
        match self {
            Verdict::Forward => message.map(str::to_owned),
            Verdict::Replace(rewritten) => Some(rewritten),
            Verdict::Consume => None,
        }
    }
}

/// Whether an initialized filter takes part in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The filter intercepts messages.
    Active,
    /// The filter stays in the chain but forwards everything unchanged.
    Inactive,
}

impl Activation {
    /// Returns `true` if the filter intercepts messages.
    pub fn is_active(self) -> bool {
        matches!(self, Activation::Active)
    }
}

/// A pipeline stage with `input`/`output` hooks that may transform,
/// suppress, or synthesize messages.
///
/// Hooks are synchronous and called from whatever thread owns message
/// delivery; a filter spawns no work of its own. Messages in each
/// direction arrive strictly in order; the two directions are independent
/// streams, but a state change caused by an input message must be visible
/// to any output message processed afterward.
pub trait PipelineFilter {
    /// Stable name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Bind the filter to its hosting session.
    ///
    /// Called once, before any message flows. Returns whether the filter
    /// is active in the chain; delegate failures surface here and leave
    /// the filter inactive (retry is the host's business).
    fn initialize(&mut self, session: Arc<dyn Session>) -> Result<Activation, FilterError>;

    /// One outbound device message, in device order. `None` means an
    /// earlier stage suppressed this cycle's message.
    fn output(&mut self, message: Option<&str>) -> Verdict;

    /// One inbound client message, in receipt order. `None` means an
    /// earlier stage consumed it.
    fn input(&mut self, message: Option<&str>) -> Verdict;
}
