/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Non-success HTTP status code with raw response body.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// Response body decoding error.
    #[error("decode error: {0}")]
    Decode(String),
    /// The activation task ended before settling its promise.
    #[error("request abandoned before settlement")]
    Abandoned,
}
