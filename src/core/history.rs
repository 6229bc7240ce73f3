//! Ordered conversation history.
//!
//! Provides an immutable, chronological view of the events of one
//! conversation, following functional programming principles.

use super::event::{EventKind, EventLike};
use serde::{Deserialize, Serialize};

/// Chronological sequence of conversation events.
///
/// History is immutable - the `record` method returns a new history
/// with the event appended, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use session_greeter::core::{EventHistory, TrackerEvent};
///
/// let history = EventHistory::new()
///     .record(TrackerEvent::session_started())
///     .record(TrackerEvent::user("hello"));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest(), Some(&TrackerEvent::user("hello")));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventHistory<E> {
    events: Vec<E>,
}

impl<E> Default for EventHistory<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventHistory<E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Wrap events that are already in chronological order.
    pub fn from_events(events: Vec<E>) -> Self {
        Self { events }
    }

    /// Record an event, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the event added.
    ///
    /// ```rust
    /// use session_greeter::core::{EventHistory, TrackerEvent};
    ///
    /// let history = EventHistory::new();
    /// let next = history.record(TrackerEvent::bot("hi"));
    ///
    /// assert_eq!(next.len(), 1);
    /// assert!(history.is_empty()); // Original unchanged
    /// ```
    pub fn record(&self, event: E) -> Self
    where
        E: Clone,
    {
        let mut events = self.events.clone();
        events.push(event);
        Self { events }
    }

    /// All events, oldest first.
    pub fn events(&self) -> &[E] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The most recent event.
    pub fn latest(&self) -> Option<&E> {
        self.events.last()
    }

    /// Events most recent first, each paired with its chronological index.
    pub fn iter_recent_first(&self) -> impl Iterator<Item = (usize, &E)> + '_ {
        self.events.iter().enumerate().rev()
    }

    pub fn into_events(self) -> Vec<E> {
        self.events
    }
}

impl<E: EventLike> EventHistory<E> {
    /// Events of the current session.
    ///
    /// Starts at the most recent `session_started` marker (inclusive). A
    /// history without any marker is treated as one session in its entirety.
    pub fn current_session(&self) -> &[E] {
        let start = self
            .events
            .iter()
            .rposition(|event| event.kind() == EventKind::SessionStarted)
            .unwrap_or(0);
        &self.events[start..]
    }

    /// Number of `session_started` markers seen so far.
    pub fn session_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| event.kind() == EventKind::SessionStarted)
            .count()
    }
}

impl<E> From<Vec<E>> for EventHistory<E> {
    fn from(events: Vec<E>) -> Self {
        Self::from_events(events)
    }
}

impl<E> FromIterator<E> for EventHistory<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}
