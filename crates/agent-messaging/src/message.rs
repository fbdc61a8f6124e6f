//! Message classes carried to the broker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A log line reported by the agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMessage {
    /// When the log line was produced
    pub timestamp: DateTime<Utc>,
    /// Arbitrary structured payload; the broker does not interpret it
    pub payload: Value,
}

impl LogMessage {
    /// Create a log message stamped with the current time
    pub fn new(payload: Value) -> Self {
        Self {
            timestamp: Utc::now(),
            payload,
        }
    }

    /// Serialize to the textual interchange format used on the wire
    pub fn to_wire(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// A lifecycle event reported by the agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// Arbitrary structured payload; the broker does not interpret it
    pub payload: Value,
}

impl EventMessage {
    /// Create an event message stamped with the current time
    pub fn new(payload: Value) -> Self {
        Self {
            timestamp: Utc::now(),
            payload,
        }
    }

    /// Serialize to the textual interchange format used on the wire
    pub fn to_wire(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn log_message_round_trips_through_the_wire_format() {
        let message = LogMessage::new(json!({"level": "info", "text": "started"}));
        let wire = message.to_wire().unwrap();

        let decoded: LogMessage = serde_json::from_str(&wire).unwrap();
        assert_eq!(decoded.payload, message.payload);
        assert_eq!(decoded.timestamp, message.timestamp);
    }

    #[test]
    fn event_payload_is_preserved_verbatim() {
        let payload = json!({"event_type": "task_started", "task": {"id": 7}});
        let message = EventMessage::new(payload.clone());

        let wire = message.to_wire().unwrap();
        assert!(wire.contains("task_started"));

        let decoded: EventMessage = serde_json::from_str(&wire).unwrap();
        assert_eq!(decoded.payload, payload);
    }
}
