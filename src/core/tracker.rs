//! The host's per-session view of a conversation.

use super::event::{AnyEvent, EventLike};
use super::history::EventHistory;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Domain description supplied by the host. Opaque to this crate.
pub type Domain = Value;

/// Conversation state for one sender, as handed over with an action call.
///
/// Only the fields an action can act on are modelled; everything else the
/// host sends is ignored. Missing, null or wrongly typed fields fall back
/// to their defaults, so a damaged tracker still reaches the action.
///
/// # Example
///
/// ```rust
/// use session_greeter::core::Tracker;
/// use serde_json::json;
///
/// let tracker: Tracker = serde_json::from_value(json!({
///     "sender_id": "alice",
///     "events": [{"event": "session_started"}, {"event": "user", "text": "hi"}]
/// }))
/// .unwrap();
///
/// assert_eq!(tracker.sender_id, "alice");
/// assert_eq!(tracker.events.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    #[serde(default, deserialize_with = "or_default")]
    pub sender_id: String,

    #[serde(default, deserialize_with = "or_default")]
    pub events: EventHistory<AnyEvent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_message: Option<Value>,

    #[serde(default, deserialize_with = "or_default")]
    pub slots: Map<String, Value>,
}

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

impl Tracker {
    pub fn new(sender_id: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            ..Self::default()
        }
    }

    /// Replace the event history.
    pub fn with_events<I, E>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<AnyEvent>,
    {
        self.events = events.into_iter().map(Into::into).collect();
        self
    }

    /// Return a tracker with one more event at the end of its history.
    pub fn record(&self, event: impl Into<AnyEvent>) -> Self {
        Self {
            events: self.events.record(event.into()),
            ..self.clone()
        }
    }

    /// Value of a slot, if set.
    pub fn get_slot(&self, name: &str) -> Option<&Value> {
        self.slots.get(name).filter(|value| !value.is_null())
    }

    /// Text of the most recent user message.
    pub fn latest_user_text(&self) -> Option<&str> {
        self.latest_message
            .as_ref()
            .and_then(|message| message.get("text"))
            .and_then(Value::as_str)
    }

    /// Events of the current session only.
    pub fn session_events(&self) -> &[AnyEvent] {
        self.events.current_session()
    }

    /// Discriminators of the whole history, oldest first.
    pub fn event_types(&self) -> Vec<Option<&str>> {
        self.events.events().iter().map(|e| e.event_type()).collect()
    }
}
