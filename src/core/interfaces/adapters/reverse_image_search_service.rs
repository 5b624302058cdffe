use async_trait::async_trait;

use crate::core::models::{ImagePayload, KtexaImage};
use crate::error::KtexaError;

/// Finds indexed images visually similar to a query image.
#[async_trait]
pub trait ReverseImageSearchService: Send + Sync {
    /// Searches for up to `limit` similar images; `None` asks for the
    /// service default of ten results.
    async fn search_images(
        &self,
        image: ImagePayload,
        limit: Option<u32>,
    ) -> Result<Vec<KtexaImage>, KtexaError>;
}
