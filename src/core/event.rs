//! Conversation events and the discriminator accessor.
//!
//! Events reach the guard in two shapes: raw JSON mappings exactly as the
//! host serialized them, and structured [`TrackerEvent`] values. Both expose
//! their kind through [`EventLike`], so a scan never needs to know which
//! representation it is looking at.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Key holding the discriminator in mapping-style events.
pub const EVENT_KEY: &str = "event";

/// Discriminator of an utterance sent by the bot.
pub const BOT_EVENT: &str = "bot";

/// Discriminator of the marker that opens a conversation session.
pub const SESSION_STARTED_EVENT: &str = "session_started";

/// Coarse classification of an event, as far as the greeting guard cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// The bot said something.
    Bot,
    /// A new session began here.
    SessionStarted,
    /// Anything else, including events without a discriminator.
    Other,
}

impl EventKind {
    /// Classify a discriminator. Matching is exact and case-sensitive.
    pub fn from_discriminator(discriminator: Option<&str>) -> Self {
        match discriminator {
            Some(BOT_EVENT) => Self::Bot,
            Some(SESSION_STARTED_EVENT) => Self::SessionStarted,
            _ => Self::Other,
        }
    }
}

/// Uniform access to the discriminator of any event representation.
///
/// Mapping-style implementations look the `"event"` key up; structured ones
/// answer from their own variant. An event whose kind cannot be determined
/// returns `None`, which callers treat as "some other event".
///
/// # Example
///
/// ```rust
/// use session_greeter::core::{EventKind, EventLike, TrackerEvent};
/// use serde_json::json;
///
/// let mapping = json!({"event": "bot", "text": "hi"});
/// let structured = TrackerEvent::bot("hi");
///
/// assert_eq!(mapping.kind(), EventKind::Bot);
/// assert_eq!(structured.kind(), EventKind::Bot);
/// assert_eq!(json!(42).event_type(), None);
/// ```
pub trait EventLike {
    /// The raw discriminator, if the event carries a readable one.
    fn event_type(&self) -> Option<&str>;

    /// The discriminator classified into an [`EventKind`].
    fn kind(&self) -> EventKind {
        EventKind::from_discriminator(self.event_type())
    }
}

impl EventLike for Value {
    fn event_type(&self) -> Option<&str> {
        self.get(EVENT_KEY).and_then(Value::as_str)
    }
}

impl EventLike for Map<String, Value> {
    fn event_type(&self) -> Option<&str> {
        self.get(EVENT_KEY).and_then(Value::as_str)
    }
}

impl EventLike for HashMap<String, Value> {
    fn event_type(&self) -> Option<&str> {
        self.get(EVENT_KEY).and_then(Value::as_str)
    }
}

impl<T: EventLike + ?Sized> EventLike for &T {
    fn event_type(&self) -> Option<&str> {
        (**self).event_type()
    }
}

impl<T: EventLike + ?Sized> EventLike for Box<T> {
    fn event_type(&self) -> Option<&str> {
        (**self).event_type()
    }
}

/// Structured conversation event, tagged on the wire by `"event"`.
///
/// Timestamps are unix seconds, as the host writes them. Every payload
/// field is optional so partially filled events still parse.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TrackerEvent {
    /// The user sent a message.
    User {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timestamp: Option<f64>,
    },

    /// The bot sent a message.
    Bot {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timestamp: Option<f64>,
    },

    /// A conversation session started.
    SessionStarted {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timestamp: Option<f64>,
    },

    /// An action ran.
    #[serde(rename = "action")]
    ActionExecuted {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timestamp: Option<f64>,
    },

    /// A slot was set.
    #[serde(rename = "slot")]
    SlotSet {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        value: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timestamp: Option<f64>,
    },
}

impl TrackerEvent {
    pub fn user(text: impl Into<String>) -> Self {
        Self::User {
            text: Some(text.into()),
            timestamp: None,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::Bot {
            text: Some(text.into()),
            timestamp: None,
        }
    }

    /// Bot utterance stamped with the current time.
    pub fn bot_now(text: impl Into<String>) -> Self {
        Self::Bot {
            text: Some(text.into()),
            timestamp: Some(now_timestamp()),
        }
    }

    pub fn session_started() -> Self {
        Self::SessionStarted { timestamp: None }
    }

    /// Session marker stamped with the current time.
    pub fn session_started_now() -> Self {
        Self::SessionStarted {
            timestamp: Some(now_timestamp()),
        }
    }

    pub fn action_executed(name: impl Into<String>) -> Self {
        Self::ActionExecuted {
            name: Some(name.into()),
            timestamp: None,
        }
    }

    pub fn slot_set(name: impl Into<String>, value: Value) -> Self {
        Self::SlotSet {
            name: Some(name.into()),
            value,
            timestamp: None,
        }
    }

    /// The wire discriminator of this variant.
    pub fn discriminator(&self) -> &'static str {
        match self {
            Self::User { .. } => "user",
            Self::Bot { .. } => BOT_EVENT,
            Self::SessionStarted { .. } => SESSION_STARTED_EVENT,
            Self::ActionExecuted { .. } => "action",
            Self::SlotSet { .. } => "slot",
        }
    }

    pub fn timestamp(&self) -> Option<f64> {
        match self {
            Self::User { timestamp, .. }
            | Self::Bot { timestamp, .. }
            | Self::SessionStarted { timestamp }
            | Self::ActionExecuted { timestamp, .. }
            | Self::SlotSet { timestamp, .. } => *timestamp,
        }
    }
}

impl EventLike for TrackerEvent {
    fn event_type(&self) -> Option<&str> {
        Some(self.discriminator())
    }
}

/// A history entry in whichever shape the host handed over.
///
/// Deserialization tries the structured form first and falls back to the raw
/// value, so unknown kinds and malformed payloads are kept rather than
/// rejected. A structured event keeps only the fields [`TrackerEvent`]
/// models; extra host fields such as `metadata` or `parse_data` are dropped,
/// so re-serializing a structured entry is lossy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnyEvent {
    Structured(TrackerEvent),
    Mapping(Value),
}

impl EventLike for AnyEvent {
    fn event_type(&self) -> Option<&str> {
        match self {
            Self::Structured(event) => event.event_type(),
            Self::Mapping(value) => value.event_type(),
        }
    }
}

impl From<TrackerEvent> for AnyEvent {
    fn from(event: TrackerEvent) -> Self {
        Self::Structured(event)
    }
}

impl From<Value> for AnyEvent {
    fn from(value: Value) -> Self {
        Self::Mapping(value)
    }
}

fn now_timestamp() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}
