//! Action abstraction executed by the host on behalf of a conversation.

use crate::core::{Domain, Tracker, TrackerEvent};
use crate::effects::dispatcher::Dispatcher;
use std::fmt;
use std::sync::Arc;
use stillwater::effect::BoxedEffect;

/// Errors an action can report to the host
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ActionError {
    #[error("Action '{action}' rejected execution: {reason}")]
    Rejected { action: String, reason: String },

    #[error("Action '{action}' failed: {reason}")]
    Failed { action: String, reason: String },
}

/// Environment an action effect runs against.
///
/// Carries the sender capability. Cloning is cheap; clones share the
/// underlying dispatcher.
#[derive(Clone)]
pub struct ActionEnv {
    dispatcher: Arc<dyn Dispatcher>,
}

impl ActionEnv {
    pub fn new<D: Dispatcher + 'static>(dispatcher: D) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    pub fn from_shared(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &dyn Dispatcher {
        self.dispatcher.as_ref()
    }
}

impl fmt::Debug for ActionEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionEnv").finish_non_exhaustive()
    }
}

/// Effect produced by running an action: the events to merge into the
/// conversation, or an error.
pub type ActionEffect = BoxedEffect<Vec<TrackerEvent>, ActionError, ActionEnv>;

/// A named unit of bot behaviour invoked by the host.
///
/// `run` reads the tracker eagerly and returns an effect; the effect only
/// touches the outside world (the dispatcher) once it is run against an
/// [`ActionEnv`].
pub trait Action: Send + Sync {
    /// Name the host uses to invoke this action.
    fn name(&self) -> &str;

    fn run(&self, tracker: &Tracker, domain: &Domain) -> ActionEffect;
}

impl<A: Action + ?Sized> Action for Arc<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn run(&self, tracker: &Tracker, domain: &Domain) -> ActionEffect {
        (**self).run(tracker, domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::dispatcher::{CollectingDispatcher, OutboundMessage};
    use serde_json::json;
    use stillwater::effect::Effect;
    use stillwater::prelude::*;

    struct EchoLatest;

    impl Action for EchoLatest {
        fn name(&self) -> &str {
            "action_echo"
        }

        fn run(&self, tracker: &Tracker, _domain: &Domain) -> ActionEffect {
            let Some(text) = tracker.latest_user_text().map(str::to_string) else {
                return fail(ActionError::Rejected {
                    action: self.name().to_string(),
                    reason: "no user message".to_string(),
                })
                .boxed();
            };

            from_fn(move |env: &ActionEnv| {
                env.dispatcher().utter_message(OutboundMessage::text(text.clone()));
                Ok(vec![TrackerEvent::bot(text.clone())])
            })
            .boxed()
        }
    }

    #[tokio::test]
    async fn effect_sends_through_environment_dispatcher() {
        let dispatcher = CollectingDispatcher::new();
        let env = ActionEnv::new(dispatcher.clone());
        let tracker = Tracker {
            latest_message: Some(json!({"text": "ping"})),
            ..Tracker::new("erin")
        };

        let events = EchoLatest.run(&tracker, &json!({})).run(&env).await.unwrap();

        assert_eq!(events, vec![TrackerEvent::bot("ping")]);
        assert_eq!(dispatcher.messages(), vec![OutboundMessage::text("ping")]);
    }

    #[tokio::test]
    async fn sending_waits_until_the_effect_runs() {
        let dispatcher = CollectingDispatcher::new();
        let env = ActionEnv::new(dispatcher.clone());
        let tracker = Tracker {
            latest_message: Some(json!({"text": "ping"})),
            ..Tracker::new("erin")
        };

        let effect = EchoLatest.run(&tracker, &json!({}));
        assert!(dispatcher.is_empty());

        effect.run(&env).await.unwrap();
        assert_eq!(dispatcher.len(), 1);
    }

    #[tokio::test]
    async fn rejection_surfaces_as_error() {
        let env = ActionEnv::new(CollectingDispatcher::new());
        let result = EchoLatest
            .run(&Tracker::new("frank"), &json!({}))
            .run(&env)
            .await;

        assert!(matches!(result, Err(ActionError::Rejected { .. })));
    }

    #[test]
    fn shared_actions_keep_their_name() {
        let action: Arc<dyn Action> = Arc::new(EchoLatest);
        assert_eq!(Action::name(&action), "action_echo");
    }
}
