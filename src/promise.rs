//! Single-settlement future adaptation of a producer.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::{Payload, Producer, RelayError, Result};

/// Single-settlement container for one producer activation.
///
/// Settles exactly once, with the activation's payload or error. The
/// settlement side is a consumed one-shot sender, so a settled promise
/// cannot be re-settled. Created by [`promise`].
#[derive(Debug)]
pub struct Promise {
    rx: oneshot::Receiver<Result<Payload>>,
}

impl Future for Promise {
    type Output = Result<Payload>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(|settled| match settled {
            Ok(outcome) => outcome,
            Err(_) => Err(RelayError::Abandoned),
        })
    }
}

/// Activates `producer` exactly once on the current Tokio runtime and
/// returns a future that settles with its terminal outcome.
///
/// Must be called from within a Tokio runtime context.
pub fn promise<P>(producer: P) -> Promise
where
    P: Producer + 'static,
{
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        // Send fails only when the receiver is gone; there is nobody left
        // to deliver to.
        let _ = tx.send(producer.activate().await);
    });
    Promise { rx }
}
