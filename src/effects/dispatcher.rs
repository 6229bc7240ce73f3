//! Outbound messages and the capability to send them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One message the bot asks the host to deliver.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OutboundMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Name of a response template the host should render instead of `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value>,
}

impl OutboundMessage {
    /// Plain text message.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Message rendered by the host from a named response template.
    pub fn from_response(name: impl Into<String>) -> Self {
        Self {
            response: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_buttons(mut self, buttons: Vec<Value>) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn with_custom(mut self, payload: Value) -> Self {
        self.custom = Some(payload);
        self
    }
}

/// Capability to enqueue outbound messages.
///
/// Delivery is the host's job; implementations only record what should be
/// sent.
pub trait Dispatcher: Send + Sync {
    fn utter_message(&self, message: OutboundMessage);
}

/// Dispatcher that keeps every message in send order.
///
/// Clones share the same buffer, so a clone handed to an action and the
/// original kept by the caller see the same messages.
///
/// ```rust
/// use session_greeter::effects::{CollectingDispatcher, Dispatcher, OutboundMessage};
///
/// let dispatcher = CollectingDispatcher::new();
/// dispatcher.clone().utter_message(OutboundMessage::text("hello"));
///
/// assert_eq!(dispatcher.messages(), vec![OutboundMessage::text("hello")]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CollectingDispatcher {
    messages: Arc<Mutex<Vec<OutboundMessage>>>,
}

impl CollectingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the collected messages.
    pub fn messages(&self) -> Vec<OutboundMessage> {
        self.lock().clone()
    }

    /// Remove and return the collected messages.
    pub fn take(&self) -> Vec<OutboundMessage> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave a Vec half-pushed.
    fn lock(&self) -> MutexGuard<'_, Vec<OutboundMessage>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Dispatcher for CollectingDispatcher {
    fn utter_message(&self, message: OutboundMessage) {
        self.lock().push(message);
    }
}
