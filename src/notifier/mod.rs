//! # Notification Broadcaster
//!
//! Fire-and-forget fan-out of notification events to every connected observer.
//!
//! ## Overview
//!
//! The [`Notifier`] is the publish side of a single shared
//! [`tokio::sync::broadcast`] channel. Anything that wants to push a global
//! notification (the order workflow, operational alerting, ...) calls
//! [`Notifier::notify`]; anything that forwards notifications to live
//! connections (a websocket/socket.io adapter, a TUI, a test) calls
//! [`Notifier::subscribe`] and reads [`BroadcastMessage`]s.
//!
//! ## Delivery Model
//!
//! Best-effort, at-most-once:
//!
//! - Publishing never blocks and never awaits acknowledgment.
//! - Zero, some, or all receivers is the same success path; the publisher
//!   cannot observe how many subscribers got a copy.
//! - A lagging receiver drops the oldest messages (broadcast-channel
//!   semantics); there is no redelivery and no persisted history.
//!
//! Because delivery is decoupled this way, a broken subscriber can never fail
//! the workflow that triggered the event.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::broadcast;
use tracing::info;

/// The well-known channel every global notification is published on.
///
/// Connected clients subscribe to this name; it is part of the wire contract
/// with the frontend.
pub const NOTIFICATION_CHANNEL: &str = "notificacion";

/// Default capacity of the broadcast channel.
pub const DEFAULT_CAPACITY: usize = 64;

/// A transient notification payload. Never persisted.
///
/// Serializes as `{title, message, timestamp, extra}` with an ISO-8601 UTC
/// timestamp; `extra` is `{}` unless the emitter supplied structured data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationEvent {
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub extra: Value,
}

/// The unit carried on the broadcast channel: an event plus the channel name
/// a transport adapter should route it to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BroadcastMessage {
    pub channel: String,
    pub event: NotificationEvent,
}

/// Publish handle for global notifications.
///
/// Cheap to clone; every clone publishes into the same channel. The set of
/// currently-connected subscribers lives entirely in the transport layer and
/// is invisible here.
#[derive(Debug, Clone)]
pub struct Notifier {
    sender: broadcast::Sender<BroadcastMessage>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Attach a new observer. Each receiver gets a copy of every message
    /// published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<BroadcastMessage> {
        self.sender.subscribe()
    }

    /// Builds a [`NotificationEvent`] stamped with the current UTC instant and
    /// publishes it on [`NOTIFICATION_CHANNEL`].
    ///
    /// Never fails from the caller's perspective: a send error only means no
    /// subscriber is currently attached, and that is not the publisher's
    /// problem.
    pub fn notify(&self, title: impl Into<String>, message: impl Into<String>, extra: Option<Value>) {
        let event = NotificationEvent {
            title: title.into(),
            message: message.into(),
            timestamp: Utc::now(),
            extra: extra.unwrap_or_else(|| Value::Object(serde_json::Map::new())),
        };

        info!(
            channel = NOTIFICATION_CHANNEL,
            title = %event.title,
            message = %event.message,
            "Broadcasting notification"
        );

        let _ = self.sender.send(BroadcastMessage {
            channel: NOTIFICATION_CHANNEL.to_string(),
            event,
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
