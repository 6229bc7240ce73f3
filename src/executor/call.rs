//! Wire shapes of an action call and its response.

use crate::core::{Domain, Tracker, TrackerEvent};
use crate::effects::OutboundMessage;
use serde::{Deserialize, Serialize};

/// Request from the host to run one action.
///
/// Every field is optional on the wire; validation reports what is missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracker: Option<Tracker>,

    #[serde(default)]
    pub domain: Domain,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ActionCall {
    pub fn new(next_action: impl Into<String>, tracker: Tracker) -> Self {
        Self {
            next_action: Some(next_action.into()),
            sender_id: Some(tracker.sender_id.clone()),
            tracker: Some(tracker),
            ..Self::default()
        }
    }

    /// The requested action name, if present and not blank.
    pub fn action_name(&self) -> Option<&str> {
        self.next_action
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// What the host merges back into the conversation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub events: Vec<TrackerEvent>,

    #[serde(default)]
    pub responses: Vec<OutboundMessage>,
}
