//! In-process execution of host action calls.
//!
//! The executor owns a registry of actions keyed by name. For each call it
//! validates the request, looks the action up, runs its effect against a
//! fresh collecting dispatcher, and assembles the response the host merges
//! back into the conversation. Calls share no mutable state, so one
//! executor can serve many sessions concurrently.
//!
//! # Example
//!
//! ```rust
//! use session_greeter::executor::ActionExecutor;
//!
//! # let rt = tokio::runtime::Runtime::new().unwrap();
//! # rt.block_on(async {
//! let executor = ActionExecutor::with_defaults();
//! let body = r#"{
//!     "next_action": "action_session_start",
//!     "tracker": {"sender_id": "alice", "events": [{"event": "session_started"}]}
//! }"#;
//!
//! let response = executor.run_json(body).await.unwrap();
//! assert!(response.contains("Welcome to the Bank of Rasa!"));
//! # });
//! ```

pub mod builder;
pub mod call;
pub mod error;
pub mod validation;

pub use builder::ExecutorBuilder;
pub use call::{ActionCall, ActionResponse};
pub use error::{BuildError, ExecutorError};
pub use validation::{validate_call, CallViolation};

use crate::effects::{Action, ActionEnv, ActionSessionStart, CollectingDispatcher};
use std::collections::HashMap;
use std::sync::Arc;
use stillwater::effect::Effect;
use stillwater::validation::Validation;
use tracing::{info, warn};

/// Registry of actions, invoked by name.
pub struct ActionExecutor {
    actions: HashMap<String, Arc<dyn Action>>,
}

impl ActionExecutor {
    pub(crate) fn from_registry(actions: HashMap<String, Arc<dyn Action>>) -> Self {
        Self { actions }
    }

    /// Executor with the session-start greeting registered.
    pub fn with_defaults() -> Self {
        ExecutorBuilder::new()
            .action(ActionSessionStart::default())
            .build()
            .expect("Default executor should always build")
    }

    /// Registered action names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Run one action call.
    pub async fn run(&self, call: ActionCall) -> Result<ActionResponse, ExecutorError> {
        if let Validation::Failure(violations) = validate_call(&call) {
            let violations: Vec<CallViolation> = violations.iter().cloned().collect();
            warn!(count = violations.len(), "rejected invalid action call");
            return Err(ExecutorError::InvalidCall(violations));
        }

        let name = call
            .action_name()
            .ok_or_else(|| ExecutorError::InvalidCall(vec![CallViolation::MissingActionName]))?;
        let tracker = call
            .tracker
            .as_ref()
            .ok_or_else(|| ExecutorError::InvalidCall(vec![CallViolation::MissingTracker]))?;

        let Some(action) = self.actions.get(name) else {
            warn!(action = name, sender_id = %tracker.sender_id, "no registered action");
            return Err(ExecutorError::ActionNotFound(name.to_string()));
        };

        info!(action = name, sender_id = %tracker.sender_id, "running action");

        let dispatcher = CollectingDispatcher::new();
        let env = ActionEnv::new(dispatcher.clone());
        let events = action.run(tracker, &call.domain).run(&env).await?;

        Ok(ActionResponse {
            events,
            responses: dispatcher.take(),
        })
    }

    /// Parse a JSON action call, run it, and serialize the response.
    pub async fn run_json(&self, body: &str) -> Result<String, ExecutorError> {
        let call: ActionCall = serde_json::from_str(body)?;
        let response = self.run(call).await?;
        Ok(serde_json::to_string(&response)?)
    }
}
