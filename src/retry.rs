use crate::{Payload, Producer, Result};

/// Bounds automatic re-activation of a failing producer.
///
/// The bound counts retries after the initial attempt, so a producer
/// wrapped with a bound of N performs at most N + 1 activations.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of re-activations after the initial attempt.
    pub max_additional_attempts: u32,
}

impl RetryPolicy {
    pub fn new(max_additional_attempts: u32) -> Self {
        Self {
            max_additional_attempts,
        }
    }
}

/// Producer decorator that re-activates its inner producer on failure.
///
/// Attempts are strictly sequential: attempt k + 1 is issued only after
/// attempt k's outcome has been observed. Retries fire immediately, with no
/// delay between attempts. A success propagates as soon as it occurs; once
/// the bound is exhausted the most recent failure propagates and earlier
/// failures are discarded. A bound of 0 behaves exactly like the
/// undecorated producer.
#[derive(Clone, Debug)]
pub struct Retry<P> {
    inner: P,
    policy: RetryPolicy,
}

impl<P: Producer> Retry<P> {
    pub fn new(inner: P, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

impl<P: Producer> Producer for Retry<P> {
    async fn activate(&self) -> Result<Payload> {
        let mut attempt = 0u32;
        loop {
            match self.inner.activate().await {
                Ok(payload) => return Ok(payload),
                Err(err) => {
                    if attempt >= self.policy.max_additional_attempts {
                        return Err(err);
                    }
                    attempt += 1;

                    #[cfg(feature = "tracing")]
                    tracing::debug!(attempt, "attempt failed, re-activating");
                }
            }
        }
    }
}
