//! Inbound control commands and their acknowledgements.

use serde::Serialize;
use serde_json::Value;

/// Wire name of the gate-opening command.
pub const COMMAND_ENABLE_CHOICES: &str = "enable choices";

/// Wire name of the gate-closing command.
pub const COMMAND_DISABLE_CHOICES: &str = "disable choices";

/// The closed set of commands this filter consumes.
///
/// Everything else on the input stream is opaque and must be forwarded for
/// other filters or the device driver to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    /// `{"command":"enable choices"}`: open the voting gate.
    EnableChoices,
    /// `{"command":"disable choices"}`: close the voting gate.
    DisableChoices,
}

impl ControlCommand {
    /// The command's wire name.
    pub fn name(self) -> &'static str {
        match self {
            ControlCommand::EnableChoices => COMMAND_ENABLE_CHOICES,
            ControlCommand::DisableChoices => COMMAND_DISABLE_CHOICES,
        }
    }

    /// The acknowledgement synthesized when this command is consumed.
    pub fn ack(self) -> CommandAck {
        CommandAck {
            command: self.name(),
            data: true,
        }
    }
}

/// Synthesized command acknowledgement: `{"command": <name>, "data": true}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CommandAck {
    /// The acknowledged command's wire name.
    pub command: &'static str,
    /// Always `true`; present for compatibility with the client protocol.
    pub data: bool,
}

impl CommandAck {
    /// Render for the outbound path.
    pub fn to_json(&self) -> String {
        // Two plain fields; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Classify one inbound client message.
///
/// A message is a control command only when it parses to a JSON object
/// whose single member is `"command"` naming one of the two recognized
/// commands, the parsed equivalent of the exact-match contract. Anything
/// else (other commands, extra fields, malformed JSON) returns `None` and
/// is forwarded untouched.
pub fn classify_inbound(message: &str) -> Option<ControlCommand> {
    let value: Value = serde_json::from_str(message.trim()).ok()?;
    let obj = value.as_object()?;
    if obj.len() != 1 {
        return None;
    }
    match obj.get("command")?.as_str()? {
        COMMAND_ENABLE_CHOICES => Some(ControlCommand::EnableChoices),
        COMMAND_DISABLE_CHOICES => Some(ControlCommand::DisableChoices),
        _ => None,
    }
}
