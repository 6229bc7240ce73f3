//! Effectful actions using Stillwater 0.11.0.
//!
//! This module provides the "imperative shell" around the pure core:
//! actions read the tracker eagerly, decide purely, and defer every side
//! effect (queuing outbound messages) to an effect run against an
//! [`ActionEnv`].
//!
//! # Key Concepts
//!
//! - **Dispatcher**: the capability to enqueue outbound messages
//! - **Action**: a named behaviour the host invokes, returning an effect
//! - **Session start**: the greeting action built on the greeting guard
//!
//! Following Stillwater 0.11.0 conventions, actions return `BoxedEffect`
//! built with the free-standing constructors `pure()`, `fail()` and `from_fn()`.

mod action;
mod dispatcher;
mod session_start;

pub use action::{Action, ActionEffect, ActionEnv, ActionError};
pub use dispatcher::{CollectingDispatcher, Dispatcher, OutboundMessage};
pub use session_start::{decide_and_send, ActionSessionStart, ACTION_SESSION_START};
