//! Shared test fixtures: a mock hosting session.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use votegate::error::DeviceError;
use votegate::{InstructorId, Session};

/// Session stub: fixed own identity, recorded emissions, optional
/// start-accepting failure.
pub struct MockSession {
    own_id: String,
    emitted: Mutex<Vec<String>>,
    fail_start: bool,
    started: AtomicBool,
}

impl MockSession {
    pub fn new(own_id: &str) -> Self {
        Self {
            own_id: own_id.to_string(),
            emitted: Mutex::new(Vec::new()),
            fail_start: false,
            started: AtomicBool::new(false),
        }
    }

    pub fn failing(own_id: &str) -> Self {
        Self {
            fail_start: true,
            ..Self::new(own_id)
        }
    }

    /// Messages pushed onto the outbound path so far.
    pub fn emitted(&self) -> Vec<String> {
        self.emitted.lock().unwrap().clone()
    }

    /// Whether the device was asked to start accepting votes.
    pub fn started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }
}

impl Session for MockSession {
    fn instructor_id(&self) -> InstructorId {
        InstructorId::new(self.own_id.clone())
    }

    fn start_accepting_input(&self) -> Result<(), DeviceError> {
        if self.fail_start {
            return Err(DeviceError::Protocol {
                reason: "base station refused".to_string(),
            });
        }
        self.started.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn emit(&self, message: &str) {
        self.emitted.lock().unwrap().push(message.to_string());
    }
}
