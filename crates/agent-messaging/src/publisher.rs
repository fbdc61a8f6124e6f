//! The publisher seam and its built-in implementations.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::message::{EventMessage, LogMessage};

/// Queue carrying agent log lines
pub const LOGS_QUEUE: &str = "agent-logs";
/// Queue carrying agent lifecycle events
pub const EVENTS_QUEUE: &str = "agent-events";

/// Declaration settings for both agent queues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueSettings {
    /// Queue survives a broker restart
    pub durable: bool,
    /// Queue is deleted once its last consumer disconnects
    pub auto_delete: bool,
    /// Queue is restricted to the declaring connection
    pub exclusive: bool,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            durable: true,
            auto_delete: true,
            exclusive: false,
        }
    }
}

/// Fire-and-forget delivery of serialized messages to named queues.
///
/// `publish_log` and `publish_event` return nothing: no acknowledgment is
/// awaited and a failed delivery is logged at warn level and dropped,
/// never surfaced to the caller. Transports implement [`deliver`]; the
/// serialization and queue routing are shared.
///
/// [`deliver`]: Publisher::deliver
pub trait Publisher: Send + Sync {
    /// Hand a serialized message body to the transport for the named
    /// queue. Implementations must not block on acknowledgment.
    fn deliver(&self, queue: &'static str, body: String);

    /// Publish a log message to the logs queue
    fn publish_log(&self, log: &LogMessage) {
        match log.to_wire() {
            Ok(body) => self.deliver(LOGS_QUEUE, body),
            // Unreachable while payloads are `serde_json::Value`; the arm
            // keeps the fire-and-forget contract if the payload type
            // widens to something that can fail to serialize.
            Err(err) => warn!(%err, "dropping unserializable log message"),
        }
    }

    /// Publish a lifecycle event to the events queue
    fn publish_event(&self, event: &EventMessage) {
        match event.to_wire() {
            Ok(body) => self.deliver(EVENTS_QUEUE, body),
            // Unreachable today, same as publish_log.
            Err(err) => warn!(%err, "dropping unserializable event message"),
        }
    }
}

/// A publisher that discards everything; the default collaborator when no
/// broker is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPublisher;

impl Publisher for NoopPublisher {
    fn deliver(&self, _queue: &'static str, _body: String) {}
}

/// An in-memory publisher that records every delivery.
///
/// Used as the test double, and as the reference for what a real broker
/// transport receives at the seam.
#[derive(Debug, Default)]
pub struct BufferPublisher {
    delivered: Mutex<Vec<(&'static str, String)>>,
}

impl BufferPublisher {
    /// Create an empty buffer publisher
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every recorded (queue, body) delivery, clearing the buffer
    pub fn take(&self) -> Vec<(&'static str, String)> {
        std::mem::take(&mut self.delivered.lock().unwrap_or_else(|e| e.into_inner()))
    }
}

impl Publisher for BufferPublisher {
    fn deliver(&self, queue: &'static str, body: String) {
        self.delivered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((queue, body));
    }
}
