//! Errors raised while building or running the action executor.

use super::validation::CallViolation;
use crate::effects::ActionError;
use thiserror::Error;

/// Errors that can occur when building an executor.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("No actions registered. Add at least one action with .action(..)")]
    NoActions,

    #[error("Action '{0}' is registered more than once")]
    DuplicateAction(String),
}

/// Errors that can occur when executing an action call.
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("Invalid action call ({} violation(s))", .0.len())]
    InvalidCall(Vec<CallViolation>),

    #[error("No registered action found for name '{0}'")]
    ActionNotFound(String),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("Malformed action call: {0}")]
    Malformed(#[from] serde_json::Error),
}
