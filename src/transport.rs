use std::future::Future;
use std::time::Duration;

use crate::{Body, ClientOptions, Method, RelayError, Result};

/// Opaque response value handed to the caller's sink.
///
/// The façade never inspects payloads; the default transport decodes
/// response bodies as JSON and passes them through unchanged.
pub type Payload = serde_json::Value;

/// Capability that performs a single network request per call.
///
/// Each operation issues exactly one request and resolves with exactly one
/// [`Payload`] or one [`RelayError`]. Wire concerns — framing, TLS, status
/// interpretation, body encoding — live behind this seam.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> impl Future<Output = Result<Payload>> + Send;
    fn post(&self, url: &str, body: &Body) -> impl Future<Output = Result<Payload>> + Send;
    fn put(&self, url: &str, body: &Body) -> impl Future<Output = Result<Payload>> + Send;
    fn delete(&self, url: &str) -> impl Future<Output = Result<Payload>> + Send;
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Default [`Transport`] backed by `reqwest`.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
    options: ClientOptions,
}

impl HttpTransport {
    /// Creates a transport with default options.
    pub fn new() -> Self {
        Self::with_options(ClientOptions::default())
    }

    /// Creates a transport with explicit options.
    pub fn with_options(options: ClientOptions) -> Self {
        Self {
            http: reqwest::Client::new(),
            options,
        }
    }

    async fn send(&self, method: Method, url: &str, body: Option<&Body>) -> Result<Payload> {
        #[cfg(feature = "tracing")]
        tracing::debug!(%method, url, "dispatching request");

        let mut request = self
            .http
            .request(method.into(), url)
            .timeout(Duration::from_millis(self.options.timeout_ms));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(RelayError::Transport)?;
        let status = response.status();
        let text = response.text().await.map_err(RelayError::Transport)?;

        if !status.is_success() {
            return Err(RelayError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Payload::Null);
        }
        serde_json::from_str(&text).map_err(|err| {
            RelayError::Decode(format!("invalid response JSON: {err}; body: {text}"))
        })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Payload> {
        self.send(Method::Get, url, None).await
    }

    async fn post(&self, url: &str, body: &Body) -> Result<Payload> {
        self.send(Method::Post, url, Some(body)).await
    }

    async fn put(&self, url: &str, body: &Body) -> Result<Payload> {
        self.send(Method::Put, url, Some(body)).await
    }

    async fn delete(&self, url: &str) -> Result<Payload> {
        self.send(Method::Delete, url, None).await
    }
}
