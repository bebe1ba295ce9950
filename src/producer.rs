use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::{Body, Method, Payload, RequestSpec, Result, Retry, RetryPolicy, Transport};

/// A lazy, restartable description of one asynchronous request attempt.
///
/// Constructing a producer performs no work; activation does. The same
/// producer can be activated any number of times and each activation is an
/// independent attempt sharing no mutable state with prior ones.
pub trait Producer: Send + Sync {
    /// Runs one attempt, resolving with exactly one outcome.
    fn activate(&self) -> impl Future<Output = Result<Payload>> + Send;

    /// Wraps this producer so failed activations are re-issued up to
    /// `policy.max_additional_attempts` more times before the failure
    /// surfaces.
    fn with_retry(self, policy: RetryPolicy) -> Retry<Self>
    where
        Self: Sized,
    {
        Retry::new(self, policy)
    }
}

/// Producer that performs one [`RequestSpec`] against a [`Transport`].
pub struct Request<T> {
    transport: Arc<T>,
    spec: RequestSpec,
}

impl<T> Clone for Request<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            spec: self.spec.clone(),
        }
    }
}

impl<T> fmt::Debug for Request<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request").field("spec", &self.spec).finish()
    }
}

impl<T: Transport> Request<T> {
    pub(crate) fn new(transport: Arc<T>, spec: RequestSpec) -> Self {
        Self { transport, spec }
    }

    /// The request this producer describes.
    pub fn spec(&self) -> &RequestSpec {
        &self.spec
    }
}

impl<T: Transport> Producer for Request<T> {
    async fn activate(&self) -> Result<Payload> {
        let spec = &self.spec;
        let empty = Body::new();
        let body = spec.body.as_ref().unwrap_or(&empty);
        match spec.method {
            Method::Get => self.transport.get(&spec.url).await,
            Method::Post => self.transport.post(&spec.url, body).await,
            Method::Put => self.transport.put(&spec.url, body).await,
            Method::Delete => self.transport.delete(&spec.url).await,
        }
    }
}
