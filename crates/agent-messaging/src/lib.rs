//! Fire-and-forget publishing of agent logs and lifecycle events.
//!
//! The agent reports log lines and events to the manager's broker over two
//! named queues. Delivery is fire-and-forget: the sender awaits no
//! acknowledgment and a delivery failure is never surfaced back to the
//! code doing the publishing. This crate pins down that boundary — the
//! message shapes, queue settings, and the [`Publisher`] seam a real
//! broker transport plugs into — and stays deliberately uncoupled from
//! the command-execution path.

pub mod message;
pub mod publisher;

pub use message::{EventMessage, LogMessage};
pub use publisher::{
    BufferPublisher, NoopPublisher, Publisher, QueueSettings, EVENTS_QUEUE, LOGS_QUEUE,
};
