//! Choice (vote) wire types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One vote from a device.
///
/// Only `id` and `instructor` are meaningful to the filter; every other
/// field rides along untouched through the flattened map, so the filter
/// never has to know the driver's full event shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceEvent {
    /// The reporting device's identity.
    pub id: String,

    /// Whether the device is a known instructor. Absent on the wire means
    /// `false`.
    #[serde(default)]
    pub instructor: bool,

    /// Opaque remainder of the event (button, timestamps, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One device poll's worth of votes: `{"type":"choices","data":[...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceBatch {
    /// Message type discriminator, always `"choices"`.
    #[serde(rename = "type")]
    pub kind: String,

    /// The poll's events, in device order.
    pub data: Vec<ChoiceEvent>,
}

impl ChoiceBatch {
    /// Rebuild a batch around filtered events, preserving the wire tag.
    pub fn with_events(data: Vec<ChoiceEvent>) -> Self {
        Self {
            kind: super::CHOICES_TYPE.to_string(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_preserves_opaque_fields() {
        let raw = r#"{"id":"371BA68A","choice":"B","time":1700000000}"#;
        let event: ChoiceEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(event.id, "371BA68A");
        assert!(!event.instructor);
        assert_eq!(event.extra["choice"], "B");

        let back = serde_json::to_string(&event).unwrap();
        let value: serde_json::Value = serde_json::from_str(&back).unwrap();
        assert_eq!(value["choice"], "B");
        assert_eq!(value["time"], 1700000000);
        assert_eq!(value["instructor"], false);
    }

    #[test]
    fn test_event_without_id_rejected() {
        let result: Result<ChoiceEvent, _> = serde_json::from_str(r#"{"choice":"A"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_event_keeps_explicit_instructor_flag() {
        let event: ChoiceEvent =
            serde_json::from_str(r#"{"id":"371BA68A","instructor":true}"#).unwrap();
        assert!(event.instructor);
    }

    #[test]
    fn test_with_events_sets_wire_tag() {
        let batch = ChoiceBatch::with_events(Vec::new());
        assert_eq!(batch.kind, "choices");
        let raw = serde_json::to_string(&batch).unwrap();
        assert_eq!(raw, r#"{"type":"choices","data":[]}"#);
    }
}
