use async_trait::async_trait;

use crate::core::models::{ImagePayload, Metadata};
use crate::error::KtexaError;

/// Uploads an image with its metadata and returns the identifier the service
/// assigned to it.
#[async_trait]
pub trait ImageIndexingService: Send + Sync {
    async fn index_image(
        &self,
        image: ImagePayload,
        metadata: Metadata,
    ) -> Result<String, KtexaError>;
}
