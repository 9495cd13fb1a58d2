//! Multiple-instructor semantics for the voting pipeline.
//!
//! Outbound, the filter tags votes from known instructor devices and drops
//! ordinary votes while voting is closed; status snapshots get their
//! `acceptingChoices` flag patched to the gate's value. Inbound, it
//! consumes the `enable choices` / `disable choices` commands, flips the
//! gate, and acknowledges directly on the output path so the command never
//! reaches the rest of the chain.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::FilterError;
use crate::filter::{Activation, PipelineFilter, Verdict};
use crate::gate::VotingGate;
use crate::protocol::{
    ChoiceBatch, ChoiceEvent, ControlCommand, OutboundKind, classify_inbound, classify_outbound,
    patch_status_snapshot,
};
use crate::registry::InstructorRegistry;
use crate::session::Session;

/// Fewest distinct instructors (configured ids plus the session's own)
/// required before the filter activates.
const MIN_INSTRUCTORS: usize = 2;

/// The multiple-instructor filter.
///
/// Constructed once per session from configuration; the session's own
/// identity joins the registry at [`initialize`](PipelineFilter::initialize).
/// With fewer than [`MIN_INSTRUCTORS`] known ids the filter reports itself
/// inactive and both hooks forward everything unchanged.
pub struct InstructorFilter {
    registry: InstructorRegistry,
    gate: VotingGate,
    session: Option<Arc<dyn Session>>,
    active: bool,
}

impl InstructorFilter {
    /// Build from configuration. The gate starts closed.
    pub fn new(config: &Config) -> Self {
        Self {
            registry: InstructorRegistry::from_config(config),
            gate: VotingGate::closed(),
            session: None,
            active: false,
        }
    }

    /// Tag instructor votes; keep the rest only while the gate is open.
    fn filter_instructors(&self, batch: ChoiceBatch) -> Vec<ChoiceEvent> {
        let accepting = self.gate.is_open();
        let mut kept = Vec::with_capacity(batch.data.len());
        for mut choice in batch.data {
            if self.registry.contains(&choice.id) {
                choice.instructor = true;
                kept.push(choice);
            } else if accepting {
                kept.push(choice);
            }
        }
        kept
    }

    fn consume_command(&mut self, command: ControlCommand) -> Verdict {
        match command {
            ControlCommand::EnableChoices => self.gate.open(),
            ControlCommand::DisableChoices => self.gate.close(),
        }
        info!(filter = self.name(), command = command.name(), "control command consumed");

        // Acknowledge straight onto the output path, bypassing further
        // input-side filtering.
        if let Some(session) = &self.session {
            session.emit(&command.ack().to_json());
        }
        Verdict::Consume
    }
}

impl PipelineFilter for InstructorFilter {
    fn name(&self) -> &'static str {
        "multiple-instructors"
    }

    fn initialize(&mut self, session: Arc<dyn Session>) -> Result<Activation, FilterError> {
        self.registry.register(session.instructor_id());
        self.session = Some(Arc::clone(&session));

        if self.registry.len() < MIN_INSTRUCTORS {
            info!(
                filter = self.name(),
                instructors = %self.registry,
                "not enabling: fewer than two configured instructors"
            );
            return Ok(Activation::Inactive);
        }

        // Turn on the hardware for accepting votes. Failure leaves the
        // filter inactive; the host owns any retry.
        session
            .start_accepting_input()
            .map_err(|source| FilterError::StartAccepting { source })?;

        self.active = true;
        info!(
            filter = self.name(),
            count = self.registry.len(),
            instructors = %self.registry,
            "enabled"
        );
        Ok(Activation::Active)
    }

    fn output(&mut self, message: Option<&str>) -> Verdict {
        let Some(message) = message else {
            return Verdict::Forward;
        };
        if !self.active {
            return Verdict::Forward;
        }

        match classify_outbound(message) {
            OutboundKind::Choices(batch) => {
                let kept = self.filter_instructors(batch);
                if kept.is_empty() {
                    // An all-filtered poll is suppressed entirely, never
                    // forwarded as an empty batch.
                    debug!(filter = self.name(), "suppressing empty choice batch");
                    return Verdict::Consume;
                }
                match serde_json::to_string(&ChoiceBatch::with_events(kept)) {
                    Ok(rewritten) => Verdict::Replace(rewritten),
                    Err(error) => {
                        warn!(
                            filter = self.name(),
                            %error,
                            "could not re-serialize choice batch, forwarding original"
                        );
                        Verdict::Forward
                    }
                }
            }
            OutboundKind::Status(snapshot) => {
                // Best effort: a snapshot without the flag passes unchanged.
                match patch_status_snapshot(snapshot, self.gate.is_open()) {
                    Some(rewritten) => Verdict::Replace(rewritten),
                    None => Verdict::Forward,
                }
            }
            OutboundKind::Other => Verdict::Forward,
        }
    }

    fn input(&mut self, message: Option<&str>) -> Verdict {
        let Some(message) = message else {
            return Verdict::Forward;
        };
        if !self.active {
            return Verdict::Forward;
        }

        match classify_inbound(message) {
            Some(command) => self.consume_command(command),
            None => Verdict::Forward,
        }
    }
}

impl fmt::Debug for InstructorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstructorFilter")
            .field("registry", &self.registry)
            .field("gate", &self.gate)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
