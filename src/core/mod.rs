//! Core conversation types and the greeting decision.
//!
//! This module contains the pure functional core:
//! - Events in any representation, read through the `EventLike` accessor
//! - Immutable history of a conversation
//! - The tracker handed over by the host for one invocation
//! - The greeting guard that scans the history
//!
//! Nothing in this module performs I/O or logs, following
//! the "pure core, imperative shell" philosophy.

mod event;
mod guard;
mod history;
mod tracker;

pub use event::{
    AnyEvent, EventKind, EventLike, TrackerEvent, BOT_EVENT, EVENT_KEY, SESSION_STARTED_EVENT,
};
pub use guard::{GreetingDecision, GreetingGuard};
pub use history::EventHistory;
pub use tracker::{Domain, Tracker};
