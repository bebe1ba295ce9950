use std::fmt;
use std::sync::Arc;

use crate::{Body, ClientOptions, HttpTransport, Request, RequestSpec, Transport};

/// Resolves a path suffix against a base address.
///
/// Plain concatenation, recomputed on every call:
/// `resolve_url("http://httpbin.org", "/get")` → `"http://httpbin.org/get"`.
pub fn resolve_url(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

/// HTTP request façade bound to one base endpoint.
///
/// Verb methods build cold [`Request`] producers; no network call occurs
/// until a producer is activated through one of the delivery adapters.
/// Every call site gets its own producer — nothing is shared across
/// requests.
pub struct RelayClient<T = HttpTransport> {
    transport: Arc<T>,
    base_url: String,
}

impl<T> Clone for RelayClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            base_url: self.base_url.clone(),
        }
    }
}

impl<T> fmt::Debug for RelayClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl RelayClient<HttpTransport> {
    /// Creates a client with the default `reqwest` transport.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, HttpTransport::new())
    }

    /// Applies transport options such as the per-request timeout.
    pub fn with_options(mut self, options: ClientOptions) -> Self {
        self.transport = Arc::new(HttpTransport::with_options(options));
        self
    }

    /// Creates a client from environment variables.
    ///
    /// Reads `RELAY_BASE_URL` — the base endpoint address requests are
    /// resolved against. Returns an error if the variable is missing or
    /// empty.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use relay_http::RelayClient;
    ///
    /// let client = RelayClient::from_env().expect("missing RELAY_BASE_URL");
    /// ```
    pub fn from_env() -> std::result::Result<Self, String> {
        let base_url = std::env::var("RELAY_BASE_URL")
            .map_err(|_| "missing RELAY_BASE_URL environment variable".to_owned())?;
        if base_url.trim().is_empty() {
            return Err("RELAY_BASE_URL is set but empty".to_owned());
        }
        Ok(Self::new(base_url))
    }
}

impl<T: Transport> RelayClient<T> {
    /// Creates a client over an injected transport capability.
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            base_url: base_url.into(),
        }
    }

    /// The configured base endpoint address.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a producer for an arbitrary [`RequestSpec`].
    pub fn request(&self, spec: RequestSpec) -> Request<T> {
        Request::new(Arc::clone(&self.transport), spec)
    }

    /// Builds a GET producer for `base_url + path`.
    pub fn get(&self, path: &str) -> Request<T> {
        self.request(RequestSpec::get(resolve_url(&self.base_url, path)))
    }

    /// Builds a POST producer carrying a JSON object body.
    pub fn post(&self, path: &str, body: Body) -> Request<T> {
        self.request(RequestSpec::post(resolve_url(&self.base_url, path), body))
    }

    /// Builds a PUT producer carrying a JSON object body.
    pub fn put(&self, path: &str, body: Body) -> Request<T> {
        self.request(RequestSpec::put(resolve_url(&self.base_url, path), body))
    }

    /// Builds a DELETE producer for `base_url + path`.
    pub fn delete(&self, path: &str) -> Request<T> {
        self.request(RequestSpec::delete(resolve_url(&self.base_url, path)))
    }
}
