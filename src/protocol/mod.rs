//! Typed message model and parse-once classification.
//!
//! The pipeline carries semi-structured JSON in both directions. Rather
//! than matching on raw text, each message is parsed once into a tagged
//! kind and dispatch happens on the tag; anything that does not parse as a
//! recognized shape classifies as opaque and is forwarded unchanged. This
//! module provides pure functions only, with no I/O and no filter state.

mod choices;
mod command;

pub use choices::{ChoiceBatch, ChoiceEvent};
pub use command::{
    COMMAND_DISABLE_CHOICES, COMMAND_ENABLE_CHOICES, CommandAck, ControlCommand, classify_inbound,
};

use serde_json::Value;

/// Type discriminator of a choice batch message.
pub const CHOICES_TYPE: &str = "choices";

/// Command discriminator of a status snapshot.
pub const STATUS_COMMAND: &str = "status";

/// The one status-snapshot field the filter owns.
pub const ACCEPTING_CHOICES_FIELD: &str = "acceptingChoices";

/// Classified outbound device message.
#[derive(Debug, Clone)]
pub enum OutboundKind {
    /// `{"type":"choices","data":[...]}`: one device poll's votes.
    Choices(ChoiceBatch),
    /// A state snapshot carrying `"command":"status"`, held as a raw value
    /// so untouched fields survive re-serialization in place.
    Status(Value),
    /// Anything else, including candidates that failed to parse.
    Other,
}

/// Classify one outbound device message.
///
/// Parse failures are deliberately not surfaced: a malformed frame must
/// not break the pipeline, so it classifies as [`OutboundKind::Other`] and
/// the caller forwards it unchanged. That makes the fallback branch
/// explicit instead of hiding it in a swallowed error.
pub fn classify_outbound(message: &str) -> OutboundKind {
    let Ok(value) = serde_json::from_str::<Value>(message) else {
        return OutboundKind::Other;
    };
    let Some(obj) = value.as_object() else {
        return OutboundKind::Other;
    };

    if obj.get("type").and_then(Value::as_str) == Some(CHOICES_TYPE) {
        // A claimed batch that does not deserialize stays opaque.
        return match serde_json::from_value::<ChoiceBatch>(value) {
            Ok(batch) => OutboundKind::Choices(batch),
            Err(_) => OutboundKind::Other,
        };
    }

    if obj.get("command").and_then(Value::as_str) == Some(STATUS_COMMAND) {
        return OutboundKind::Status(value);
    }

    OutboundKind::Other
}

/// Overwrite the `acceptingChoices` flag of a status snapshot.
///
/// Returns the re-serialized snapshot, or `None` when the field is absent
/// or not a boolean; the caller then forwards the original unchanged.
/// Every other field keeps its position and value.
pub fn patch_status_snapshot(mut snapshot: Value, accepting: bool) -> Option<String> {
    let field = snapshot.get_mut(ACCEPTING_CHOICES_FIELD)?;
    if !field.is_boolean() {
        return None;
    }
    *field = Value::Bool(accepting);
    serde_json::to_string(&snapshot).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_choice_batch() {
        let message = r#"{"type":"choices","data":[{"id":"371BA68A","choice":"A"}]}"#;
        match classify_outbound(message) {
            OutboundKind::Choices(batch) => {
                assert_eq!(batch.data.len(), 1);
                assert_eq!(batch.data[0].id, "371BA68A");
                assert!(!batch.data[0].instructor);
            }
            other => panic!("expected Choices, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_status() {
        let message = r#"{"command":"status","acceptingChoices":false,"time":12345}"#;
        assert!(matches!(
            classify_outbound(message),
            OutboundKind::Status(_)
        ));
    }

    #[test]
    fn test_classify_other_passthrough() {
        assert!(matches!(
            classify_outbound(r#"{"type":"heartbeat"}"#),
            OutboundKind::Other
        ));
        assert!(matches!(
            classify_outbound(r#"{"command":"voting status"}"#),
            OutboundKind::Other
        ));
    }

    #[test]
    fn test_classify_malformed_json_is_other() {
        assert!(matches!(
            classify_outbound(r#"{"type":"choices","data":["#),
            OutboundKind::Other
        ));
    }

    #[test]
    fn test_classify_non_object_is_other() {
        assert!(matches!(classify_outbound("[1,2,3]"), OutboundKind::Other));
        assert!(matches!(classify_outbound("42"), OutboundKind::Other));
    }

    /// A message that claims to be a batch but whose data does not
    /// deserialize falls through as opaque.
    #[test]
    fn test_classify_invalid_batch_is_other() {
        let message = r#"{"type":"choices","data":[{"choice":"A"}]}"#;
        assert!(matches!(classify_outbound(message), OutboundKind::Other));

        let message = r#"{"type":"choices","data":"not-a-list"}"#;
        assert!(matches!(classify_outbound(message), OutboundKind::Other));
    }

    #[test]
    fn test_patch_status_overwrites_flag() {
        let snapshot = json!({"command":"status","acceptingChoices":false,"time":1});
        let patched = patch_status_snapshot(snapshot, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&patched).unwrap();
        assert_eq!(value["acceptingChoices"], json!(true));
        assert_eq!(value["time"], json!(1));
    }

    #[test]
    fn test_patch_status_preserves_field_order() {
        let raw = r#"{"command":"status","time":1,"acceptingChoices":true,"voters":3}"#;
        let snapshot: Value = serde_json::from_str(raw).unwrap();
        let patched = patch_status_snapshot(snapshot, false).unwrap();
        assert_eq!(
            patched,
            r#"{"command":"status","time":1,"acceptingChoices":false,"voters":3}"#
        );
    }

    #[test]
    fn test_patch_status_missing_field() {
        let snapshot = json!({"command":"status","time":1});
        assert!(patch_status_snapshot(snapshot, true).is_none());
    }

    #[test]
    fn test_patch_status_non_boolean_field() {
        let snapshot = json!({"command":"status","acceptingChoices":"yes"});
        assert!(patch_status_snapshot(snapshot, true).is_none());
    }
}
