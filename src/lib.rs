//! Session Greeter: an idempotent session-start greeting action
//!
//! Session Greeter is built on Stillwater's "pure core, imperative shell" philosophy.
//! Deciding whether a session still needs a greeting is a pure scan over the
//! conversation history, while sending the greeting is isolated in an Effect
//! run against the host's dispatcher.
//!
//! # Core Concepts
//!
//! - **Events**: Heterogeneous conversation events read through the `EventLike` accessor
//! - **Guard**: Pure most-recent-first scan deciding whether to greet
//! - **Actions**: Named behaviours returning effects, e.g. `ActionSessionStart`
//! - **Executor**: Runs host action calls against registered actions
//!
//! # Example
//!
//! ```rust
//! use session_greeter::config::GreetingConfig;
//! use session_greeter::effects::{decide_and_send, CollectingDispatcher};
//! use serde_json::json;
//!
//! let sender = CollectingDispatcher::new();
//! let config = GreetingConfig::default();
//!
//! // A fresh session gets exactly one greeting...
//! let history = vec![json!({"event": "session_started"})];
//! assert!(decide_and_send(&history, &sender, &config).is_empty());
//! assert_eq!(sender.len(), 1);
//!
//! // ...and a repeated trigger after the bot spoke adds nothing.
//! let history = vec![
//!     json!({"event": "session_started"}),
//!     json!({"event": "bot", "text": config.text}),
//! ];
//! decide_and_send(&history, &sender, &config);
//! assert_eq!(sender.len(), 1);
//! ```

pub mod config;
pub mod core;
pub mod effects;
pub mod executor;

// Re-export commonly used types
pub use config::GreetingConfig;
pub use crate::core::{
    AnyEvent, EventHistory, EventLike, GreetingDecision, GreetingGuard, Tracker, TrackerEvent,
};
pub use effects::{Action, ActionSessionStart, CollectingDispatcher, Dispatcher, OutboundMessage};
pub use executor::{ActionCall, ActionExecutor, ActionResponse};
