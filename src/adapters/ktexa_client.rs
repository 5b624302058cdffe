use async_trait::async_trait;

use crate::core::interfaces::adapters::{ImageIndexingService, ReverseImageSearchService};
use crate::core::models::{
    coerce_to_form_value, ImageBlob, ImagePayload, KtexaConfig, KtexaImage, Metadata,
};
use crate::error::KtexaError;
use crate::global_constants;

/// HTTP client for the Ktexa image indexing and reverse image search API.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct KtexaClient {
    http_client: reqwest::Client,
    config: KtexaConfig,
}

impl KtexaClient {
    /// Creates a client from the given configuration.
    ///
    /// Fails with [`KtexaError::Config`] when the API key is empty,
    /// whitespace-only, or not usable as an HTTP header value. The key is
    /// installed as a default header so every request carries it.
    pub fn new(mut config: KtexaConfig) -> Result<Self, KtexaError> {
        if config.api_key.trim().is_empty() {
            return Err(KtexaError::Config(
                "API key must not be empty".to_string(),
            ));
        }

        let api_key = reqwest::header::HeaderValue::from_str(&config.api_key).map_err(|_| {
            KtexaError::Config(
                "API key contains characters not allowed in an HTTP header".to_string(),
            )
        })?;

        let mut headers = reqwest::header::HeaderMap::with_capacity(1);
        headers.insert(
            reqwest::header::HeaderName::from_static(global_constants::API_KEY_HEADER),
            api_key,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|error| {
                KtexaError::Config(format!("failed to build HTTP client: {}", error))
            })?;

        // Keeps path concatenation from producing "//images".
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        log::debug!("[KTEXA] Client configured for {}", config.base_url);

        Ok(Self {
            http_client,
            config,
        })
    }

    /// The origin this client sends requests to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Uploads an image for indexing and returns the identifier the service
    /// assigned to it. Each metadata entry travels as its own
    /// `metadata[<key>]` form field next to the image.
    pub async fn index_image(
        &self,
        image: ImagePayload,
        metadata: Metadata,
    ) -> Result<String, KtexaError> {
        log::info!(
            "[KTEXA] Indexing image with {} metadata fields",
            metadata.len()
        );

        let blob = image.into_blob()?;
        let mut form = reqwest::multipart::Form::new()
            .part(global_constants::IMAGE_PART_NAME, build_image_part(blob)?);

        for (key, value) in &metadata {
            form = form.text(
                format!("{}[{}]", global_constants::METADATA_PART_PREFIX, key),
                coerce_to_form_value(value),
            );
        }

        let url = self.request_url(global_constants::INDEX_IMAGES_PATH);
        let response = self.http_client.post(&url).multipart(form).send().await?;

        let body = read_success_body(response).await?;
        let json: serde_json::Value = serde_json::from_str(&body).map_err(|error| {
            KtexaError::Transport(format!("invalid JSON in index response: {}", error))
        })?;

        let image_id = json
            .get("id")
            .and_then(|id| id.as_str())
            .ok_or_else(|| {
                KtexaError::Transport("index response has no 'id' field".to_string())
            })?;

        log::info!("[KTEXA] Image indexed as {}", image_id);
        Ok(image_id.to_string())
    }

    /// Searches for images similar to the query image and returns the
    /// matches, best first. `limit` caps the result count; `None` asks for
    /// the service default of ten.
    pub async fn search_images(
        &self,
        image: ImagePayload,
        limit: Option<u32>,
    ) -> Result<Vec<KtexaImage>, KtexaError> {
        let limit = limit.unwrap_or(global_constants::DEFAULT_SEARCH_LIMIT);
        log::info!("[KTEXA] Searching for up to {} similar images", limit);

        let blob = image.into_blob()?;
        let form = reqwest::multipart::Form::new()
            .part(global_constants::IMAGE_PART_NAME, build_image_part(blob)?);

        let url = format!(
            "{}?{}={}",
            self.request_url(global_constants::SEARCH_IMAGES_PATH),
            global_constants::SEARCH_LIMIT_PARAM,
            limit
        );
        let response = self.http_client.post(&url).multipart(form).send().await?;

        let body = read_success_body(response).await?;
        let images: Vec<KtexaImage> = serde_json::from_str(&body).map_err(|error| {
            KtexaError::Transport(format!("invalid JSON in search response: {}", error))
        })?;

        log::info!("[KTEXA] Search returned {} images", images.len());
        Ok(images)
    }

    fn request_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }
}

#[async_trait]
impl ImageIndexingService for KtexaClient {
    async fn index_image(
        &self,
        image: ImagePayload,
        metadata: Metadata,
    ) -> Result<String, KtexaError> {
        KtexaClient::index_image(self, image, metadata).await
    }
}

#[async_trait]
impl ReverseImageSearchService for KtexaClient {
    async fn search_images(
        &self,
        image: ImagePayload,
        limit: Option<u32>,
    ) -> Result<Vec<KtexaImage>, KtexaError> {
        KtexaClient::search_images(self, image, limit).await
    }
}

fn build_image_part(blob: ImageBlob) -> Result<reqwest::multipart::Part, KtexaError> {
    let ImageBlob {
        bytes,
        file_name,
        content_type,
    } = blob;

    reqwest::multipart::Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(&content_type)
        .map_err(|error| {
            KtexaError::Decoding(format!(
                "unusable content type {:?}: {}",
                content_type, error
            ))
        })
}

async fn read_success_body(response: reqwest::Response) -> Result<String, KtexaError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        log::error!("[KTEXA] Request rejected with HTTP {}: {}", status, body);
        return Err(KtexaError::Transport(format!(
            "HTTP error {}: {}",
            status, body
        )));
    }

    log::debug!("[KTEXA] Response body: {}", body);
    Ok(body)
}
