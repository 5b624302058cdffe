use thiserror::Error;

/// Every failure the Ktexa client can surface.
///
/// The taxonomy is deliberately flat: callers that need retry or recovery
/// semantics layer them on top, the client never retries on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KtexaError {
    /// Construction-time validation failure: empty API key, a key that cannot
    /// be carried in an HTTP header, or a transport that refused to build.
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// The request did not produce a usable response: network failure,
    /// non-2xx status (the message carries status and response body), or a
    /// response body the client could not interpret.
    #[error("request failed: {0}")]
    Transport(String),

    /// The image payload handed to the client was malformed, e.g. a data URI
    /// without a `,` separator or with invalid base64 after it.
    #[error("invalid image payload: {0}")]
    Decoding(String),
}

impl From<reqwest::Error> for KtexaError {
    fn from(error: reqwest::Error) -> Self {
        KtexaError::Transport(error.to_string())
    }
}
