use std::fmt;

use crate::global_constants;

/// Connection settings for [`KtexaClient`](crate::KtexaClient).
///
/// `api_key` is required and validated when the client is built; `base_url`
/// defaults to the hosted service origin.
#[derive(Clone)]
pub struct KtexaConfig {
    pub api_key: String,
    pub base_url: String,
}

impl KtexaConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: global_constants::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the client at a different service origin, e.g. a staging
    /// deployment or a local mock.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl fmt::Debug for KtexaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KtexaConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
