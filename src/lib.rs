//! `relay-http` is a minimal async HTTP request façade.
//!
//! Verb methods on [`RelayClient`] build cold request producers which are
//! consumed through one of three delivery styles:
//! - push subscription: [`subscribe`] / [`subscribe_with`]
//! - single-settlement future: [`promise`]
//! - bounded automatic retry under either of the above:
//!   [`Producer::with_retry`]

mod client;
mod error;
mod options;
mod producer;
mod promise;
mod request;
mod retry;
mod subscribe;
mod transport;

pub use client::{resolve_url, RelayClient};
pub use error::RelayError;
pub use options::ClientOptions;
pub use producer::{Producer, Request};
pub use promise::{promise, Promise};
pub use request::{Body, Method, RequestSpec};
pub use retry::{Retry, RetryPolicy};
pub use subscribe::{subscribe, subscribe_with};
pub use transport::{HttpTransport, Payload, Transport};

pub type Result<T> = std::result::Result<T, RelayError>;
