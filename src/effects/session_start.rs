//! Session-start action: greet once per session.

use crate::config::GreetingConfig;
use crate::core::{Domain, EventLike, GreetingDecision, GreetingGuard, Tracker, TrackerEvent};
use crate::effects::action::{Action, ActionEffect, ActionEnv};
use crate::effects::dispatcher::{Dispatcher, OutboundMessage};
use stillwater::prelude::*;
use tracing::{debug, info};

/// Name the host invokes this action under.
pub const ACTION_SESSION_START: &str = "action_session_start";

/// Greets the user when a session starts, unless the bot has already
/// spoken in this session.
///
/// Never returns events of its own: the `session_started` marker is written
/// by the host.
#[derive(Clone, Debug, Default)]
pub struct ActionSessionStart {
    config: GreetingConfig,
    guard: GreetingGuard,
}

impl ActionSessionStart {
    pub fn new(config: GreetingConfig) -> Self {
        Self {
            config,
            guard: GreetingGuard::new(),
        }
    }

    pub fn config(&self) -> &GreetingConfig {
        &self.config
    }
}

impl Action for ActionSessionStart {
    fn name(&self) -> &str {
        ACTION_SESSION_START
    }

    fn run(&self, tracker: &Tracker, _domain: &Domain) -> ActionEffect {
        let decision = self.guard.decide(tracker.events.events());
        debug!(
            sender_id = %tracker.sender_id,
            action = ACTION_SESSION_START,
            ?decision,
            "scanned history for an earlier greeting"
        );

        if !decision.should_greet() {
            return pure(Vec::new()).boxed();
        }

        let config = self.config.clone();
        let sender_id = tracker.sender_id.clone();
        from_fn(move |env: &ActionEnv| {
            send_greeting(env.dispatcher(), &config);
            info!(sender_id = %sender_id, "queued session greeting");
            Ok(Vec::new())
        })
        .boxed()
    }
}

/// Scan `history` and, if no greeting was sent in the current session,
/// queue one on `sender`.
///
/// Synchronous form of [`ActionSessionStart`]. Always returns an empty list
/// of events.
///
/// ```rust
/// use session_greeter::config::GreetingConfig;
/// use session_greeter::effects::{decide_and_send, CollectingDispatcher};
/// use serde_json::json;
///
/// let sender = CollectingDispatcher::new();
/// let history = vec![json!({"event": "session_started"})];
///
/// let events = decide_and_send(&history, &sender, &GreetingConfig::default());
///
/// assert!(events.is_empty());
/// assert_eq!(sender.len(), 1);
/// ```
pub fn decide_and_send<E: EventLike>(
    history: &[E],
    sender: &dyn Dispatcher,
    config: &GreetingConfig,
) -> Vec<TrackerEvent> {
    let decision: GreetingDecision = GreetingGuard::new().decide(history);
    if decision.should_greet() {
        send_greeting(sender, config);
    }
    Vec::new()
}

fn send_greeting(sender: &dyn Dispatcher, config: &GreetingConfig) {
    sender.utter_message(OutboundMessage::text(config.text.clone()));
}
