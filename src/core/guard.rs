//! Greeting guard: decides whether the current session still needs a greeting.
//!
//! The guard is a pure scan over the history. It performs no I/O; sending
//! the greeting is left to the effectful shell.

use super::event::{EventKind, EventLike};

/// Outcome of scanning a history for an earlier greeting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GreetingDecision {
    /// A bot utterance was found before any session boundary.
    AlreadyGreeted { position: usize },

    /// The session boundary was reached without a bot utterance after it.
    SessionStart { position: usize },

    /// The whole history was scanned without finding either.
    NoBoundary,
}

impl GreetingDecision {
    /// Whether the greeting should be sent.
    ///
    /// Everything but an earlier bot utterance leads to a greeting, including
    /// histories that never mark a session start.
    pub fn should_greet(&self) -> bool {
        !matches!(self, Self::AlreadyGreeted { .. })
    }

    /// Chronological index of the event that ended the scan, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::AlreadyGreeted { position } | Self::SessionStart { position } => Some(*position),
            Self::NoBoundary => None,
        }
    }
}

/// Pure predicate over a conversation history.
///
/// Scans most recent first and stops at the first bot utterance or session
/// marker. Events of any other kind, including events whose kind cannot be
/// read, are skipped.
///
/// # Example
///
/// ```rust
/// use session_greeter::core::{GreetingDecision, GreetingGuard};
/// use serde_json::json;
///
/// let guard = GreetingGuard::new();
///
/// let fresh = vec![json!({"event": "session_started"})];
/// assert_eq!(guard.decide(&fresh), GreetingDecision::SessionStart { position: 0 });
///
/// let greeted = vec![json!({"event": "session_started"}), json!({"event": "bot", "text": "hi"})];
/// assert!(!guard.check(&greeted));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GreetingGuard;

impl GreetingGuard {
    pub fn new() -> Self {
        Self
    }

    /// Scan the history and report why a greeting is or is not due.
    pub fn decide<E: EventLike>(&self, history: &[E]) -> GreetingDecision {
        for (position, event) in history.iter().enumerate().rev() {
            match event.kind() {
                EventKind::Bot => return GreetingDecision::AlreadyGreeted { position },
                EventKind::SessionStarted => return GreetingDecision::SessionStart { position },
                EventKind::Other => {}
            }
        }
        GreetingDecision::NoBoundary
    }

    /// Check if the history still needs a greeting.
    pub fn check<E: EventLike>(&self, history: &[E]) -> bool {
        self.decide(history).should_greet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::{AnyEvent, TrackerEvent};
    use serde_json::{json, Value};

    fn guard() -> GreetingGuard {
        GreetingGuard::new()
    }

    #[test]
    fn empty_history_greets() {
        let history: Vec<Value> = Vec::new();
        assert_eq!(guard().decide(&history), GreetingDecision::NoBoundary);
        assert!(guard().check(&history));
    }

    #[test]
    fn session_marker_alone_greets() {
        let history = vec![json!({"event": "session_started"})];
        assert_eq!(
            guard().decide(&history),
            GreetingDecision::SessionStart { position: 0 }
        );
    }

    #[test]
    fn bot_after_marker_blocks_greeting() {
        let history = vec![
            json!({"event": "session_started"}),
            json!({"event": "bot", "text": "hi"}),
        ];
        assert_eq!(
            guard().decide(&history),
            GreetingDecision::AlreadyGreeted { position: 1 }
        );
        assert!(!guard().check(&history));
    }

    #[test]
    fn user_before_marker_still_greets() {
        let history = vec![
            json!({"event": "user", "text": "hello"}),
            json!({"event": "session_started"}),
        ];
        assert_eq!(
            guard().decide(&history),
            GreetingDecision::SessionStart { position: 1 }
        );
    }

    #[test]
    fn bot_from_previous_session_is_ignored() {
        let history = vec![
            json!({"event": "session_started"}),
            json!({"event": "bot", "text": "welcome"}),
            json!({"event": "session_started"}),
            json!({"event": "user", "text": "back again"}),
        ];
        assert_eq!(
            guard().decide(&history),
            GreetingDecision::SessionStart { position: 2 }
        );
    }

    #[test]
    fn bot_without_any_marker_blocks_greeting() {
        let history = vec![
            json!({"event": "user", "text": "hello"}),
            json!({"event": "bot", "text": "hi"}),
            json!({"event": "action", "name": "action_listen"}),
        ];
        assert_eq!(
            guard().decide(&history),
            GreetingDecision::AlreadyGreeted { position: 1 }
        );
    }

    #[test]
    fn malformed_events_are_skipped() {
        let history = vec![
            json!({"event": "session_started"}),
            json!(null),
            json!({"text": "no discriminator"}),
            json!({"event": ["bot"]}),
            json!(3),
        ];
        assert_eq!(
            guard().decide(&history),
            GreetingDecision::SessionStart { position: 0 }
        );
    }

    #[test]
    fn mixed_representations_scan_identically() {
        let mappings = vec![
            json!({"event": "session_started"}),
            json!({"event": "user", "text": "hello"}),
            json!({"event": "bot", "text": "hi"}),
        ];
        let mixed: Vec<AnyEvent> = vec![
            AnyEvent::from(TrackerEvent::session_started()),
            AnyEvent::from(json!({"event": "user", "text": "hello"})),
            AnyEvent::from(TrackerEvent::bot("hi")),
        ];

        assert_eq!(guard().decide(&mappings), guard().decide(&mixed));
    }

    #[test]
    fn decision_exposes_position() {
        assert_eq!(
            GreetingDecision::AlreadyGreeted { position: 4 }.position(),
            Some(4)
        );
        assert_eq!(GreetingDecision::NoBoundary.position(), None);
        assert!(GreetingDecision::NoBoundary.should_greet());
    }

    #[test]
    fn guard_is_deterministic() {
        let history = vec![TrackerEvent::user("a"), TrackerEvent::session_started()];
        assert_eq!(guard().decide(&history), guard().decide(&history));
    }
}
