//! Validation of incoming action calls.
//!
//! Uses Stillwater's `Validation` so that every problem with a call is
//! reported at once instead of one per round trip.

use super::call::ActionCall;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single problem with an action call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CallViolation {
    #[error("Action call names no action")]
    MissingActionName,

    #[error("Action call carries no tracker")]
    MissingTracker,

    #[error("Sender '{call}' does not match tracker sender '{tracker}'")]
    SenderMismatch { call: String, tracker: String },
}

/// Check a call, accumulating ALL violations.
///
/// An empty sender on either side is not compared; hosts may omit one.
pub fn validate_call(call: &ActionCall) -> Validation<(), NonEmptyVec<CallViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<CallViolation>>> = Vec::new();

    checks.push(if call.action_name().is_some() {
        Validation::success(())
    } else {
        Validation::fail(CallViolation::MissingActionName)
    });

    match &call.tracker {
        None => checks.push(Validation::fail(CallViolation::MissingTracker)),
        Some(tracker) => {
            let mismatch = call
                .sender_id
                .as_deref()
                .filter(|sender| !sender.is_empty() && !tracker.sender_id.is_empty())
                .filter(|sender| *sender != tracker.sender_id);
            checks.push(match mismatch {
                Some(sender) => Validation::fail(CallViolation::SenderMismatch {
                    call: sender.to_string(),
                    tracker: tracker.sender_id.clone(),
                }),
                None => Validation::success(()),
            });
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
