//! Client library for the Ktexa image indexing and reverse image search API.
//!
//! [`KtexaClient`] exposes the two service operations: [`KtexaClient::index_image`]
//! uploads an image with caller metadata and returns its assigned identifier,
//! and [`KtexaClient::search_images`] finds indexed images similar to a query
//! image. Images are supplied as an [`ImagePayload`], either raw bytes or a
//! base64 data URI.
//!
//! ```no_run
//! use ktexa_client::{ImagePayload, KtexaClient, KtexaConfig, Metadata};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = KtexaClient::new(KtexaConfig::new("your-api-key"))?;
//!
//! let photo = ImagePayload::from_file("sunset.jpg").await?;
//! let mut metadata = Metadata::new();
//! metadata.insert("label".to_string(), serde_json::json!("sunset"));
//! let image_id = client.index_image(photo, metadata).await?;
//! println!("indexed as {}", image_id);
//!
//! let query = ImagePayload::from_file("query.jpg").await?;
//! for image in client.search_images(query, Some(5)).await? {
//!     println!("{} -> {}", image.id, image.url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod core;
pub mod error;
pub mod global_constants;

pub use crate::adapters::KtexaClient;
pub use crate::core::interfaces::adapters::{ImageIndexingService, ReverseImageSearchService};
pub use crate::core::models::{
    ImageBlob, ImageFormat, ImagePayload, KtexaConfig, KtexaImage, Metadata,
};
pub use crate::error::KtexaError;
