//! Push-based delivery of a producer's outcome to caller-supplied handlers.

use crate::{Payload, Producer, RelayError, Result};

/// Activates `producer` once and pushes a success payload into
/// `on_success`. A failure outcome has no handler and is discarded.
///
/// Awaiting the returned future schedules the work; spawn it onto the
/// runtime for fire-and-forget delivery.
pub async fn subscribe<P, S>(producer: P, on_success: S)
where
    P: Producer,
    S: FnOnce(Payload),
{
    let outcome = producer.activate().await;
    deliver(outcome, on_success, None::<fn(RelayError)>);
}

/// Activates `producer` once and pushes the terminal outcome into
/// `on_success` or `on_failure`, whichever matches.
pub async fn subscribe_with<P, S, F>(producer: P, on_success: S, on_failure: F)
where
    P: Producer,
    S: FnOnce(Payload),
    F: FnOnce(RelayError),
{
    let outcome = producer.activate().await;
    deliver(outcome, on_success, Some(on_failure));
}

/// Dispatches one terminal outcome to exactly one handler, exactly once.
fn deliver<S, F>(outcome: Result<Payload>, on_success: S, on_failure: Option<F>)
where
    S: FnOnce(Payload),
    F: FnOnce(RelayError),
{
    match outcome {
        Ok(payload) => on_success(payload),
        Err(err) => match on_failure {
            Some(handler) => handler(err),
            // The subscriber opted out of failure delivery.
            None => drop(err),
        },
    }
}
