//! Builder for constructing an action executor.

use super::error::BuildError;
use super::ActionExecutor;
use crate::effects::Action;
use std::collections::HashMap;
use std::sync::Arc;

/// Builder for registering actions with a fluent API.
///
/// ```rust
/// use session_greeter::effects::ActionSessionStart;
/// use session_greeter::executor::ExecutorBuilder;
///
/// let executor = ExecutorBuilder::new()
///     .action(ActionSessionStart::default())
///     .build()
///     .unwrap();
///
/// assert!(executor.contains("action_session_start"));
/// ```
#[derive(Default)]
pub struct ExecutorBuilder {
    actions: Vec<Arc<dyn Action>>,
}

impl ExecutorBuilder {
    /// Create a new executor builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action under its own name.
    pub fn action<A: Action + 'static>(mut self, action: A) -> Self {
        self.actions.push(Arc::new(action));
        self
    }

    /// Register an action that is already shared.
    pub fn shared(mut self, action: Arc<dyn Action>) -> Self {
        self.actions.push(action);
        self
    }

    /// Build the executor, rejecting empty or ambiguous registries.
    pub fn build(self) -> Result<ActionExecutor, BuildError> {
        if self.actions.is_empty() {
            return Err(BuildError::NoActions);
        }

        let mut registry: HashMap<String, Arc<dyn Action>> = HashMap::new();
        for action in self.actions {
            let name = action.name().to_string();
            if registry.contains_key(&name) {
                return Err(BuildError::DuplicateAction(name));
            }
            registry.insert(name, action);
        }

        Ok(ActionExecutor::from_registry(registry))
    }
}
