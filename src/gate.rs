//! The voting gate: a two-state, process-local flag controlling whether
//! ordinary (non-instructor) choices are forwarded.
//!
//! A single boolean owned by one filter instance, mutated only by control
//! command processing and read by the outbound choice/status transform.
//! There is no persistence across restarts.

/// Two-state voting gate. Starts closed; open/close are the only mutations.
#[derive(Debug)]
pub struct VotingGate {
    open: bool,
}

impl VotingGate {
    /// The initial, not-accepting state.
    pub(crate) fn closed() -> Self {
        Self { open: false }
    }

    /// Open the gate (accept ordinary choices).
    pub(crate) fn open(&mut self) {
        self.open = true;
    }

    /// Close the gate (suppress ordinary choices).
    pub(crate) fn close(&mut self) {
        self.open = false;
    }

    /// Whether the gate is currently open. Crate-private: no external read.
    pub(crate) fn is_open(&self) -> bool {
        self.open
    }
}
