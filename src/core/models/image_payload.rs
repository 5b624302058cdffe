use std::fmt;
use std::path::Path;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::core::models::ImageFormat;
use crate::error::KtexaError;
use crate::global_constants;

// Data URIs lifted from HTML or CSS are routinely line-wrapped or unpadded;
// padding must stay optional and unused trailing bits are not validated.
// Whitespace is stripped before decoding.
const DATA_URI_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Image input accepted by the client: an image file already in memory, or a
/// `data:<mime>;base64,<payload>` string.
#[derive(Clone)]
pub enum ImagePayload {
    /// An in-memory image file, uploaded as-is under its own name and
    /// content type.
    File {
        bytes: Vec<u8>,
        file_name: String,
        content_type: String,
    },
    /// A base64 data URI, decoded into raw bytes before upload.
    DataUri(String),
}

impl ImagePayload {
    pub fn from_bytes(
        bytes: Vec<u8>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self::File {
            bytes,
            file_name: file_name.into(),
            content_type: content_type.into(),
        }
    }

    pub fn from_data_uri(data_uri: impl Into<String>) -> Self {
        Self::DataUri(data_uri.into())
    }

    /// Reads an image file from disk. The multipart file name is taken from
    /// the path and the content type inferred from its extension; unknown
    /// extensions are uploaded as `application/octet-stream`.
    pub async fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| ImageFormat::JPEG.default_file_name().to_string());

        let content_type = path
            .extension()
            .and_then(|extension| ImageFormat::from_extension(&extension.to_string_lossy()))
            .map(|format| format.content_type().to_string())
            .unwrap_or_else(|| global_constants::FALLBACK_CONTENT_TYPE.to_string());

        log::debug!(
            "[PAYLOAD] read {} bytes from {:?} as {}",
            bytes.len(),
            path,
            content_type
        );

        Ok(Self::File {
            bytes,
            file_name,
            content_type,
        })
    }

    /// Normalizes the payload into the binary blob the service receives.
    ///
    /// File payloads pass through untouched. Data URIs are split on the first
    /// `,` and the remainder base64-decoded; the decoded blob is always
    /// tagged `image/jpeg`, ignoring the MIME type declared inside the URI.
    /// That matches the service's established client behavior. Callers
    /// holding non-JPEG bytes should use [`ImagePayload::from_bytes`], which
    /// keeps their content type.
    pub fn into_blob(self) -> Result<ImageBlob, KtexaError> {
        match self {
            ImagePayload::File {
                bytes,
                file_name,
                content_type,
            } => Ok(ImageBlob {
                bytes,
                file_name,
                content_type,
            }),
            ImagePayload::DataUri(data_uri) => decode_data_uri(&data_uri),
        }
    }
}

impl fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImagePayload::File {
                bytes,
                file_name,
                content_type,
            } => f
                .debug_struct("ImagePayload::File")
                .field("byte_count", &bytes.len())
                .field("file_name", file_name)
                .field("content_type", content_type)
                .finish(),
            ImagePayload::DataUri(data_uri) => f
                .debug_struct("ImagePayload::DataUri")
                .field("length", &data_uri.len())
                .finish(),
        }
    }
}

/// Binary image data plus the multipart identity it is uploaded under.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageBlob {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

impl fmt::Debug for ImageBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageBlob")
            .field("byte_count", &self.bytes.len())
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .finish()
    }
}

fn decode_data_uri(data_uri: &str) -> Result<ImageBlob, KtexaError> {
    let (_, encoded) = data_uri.split_once(',').ok_or_else(|| {
        KtexaError::Decoding("data URI has no ',' separator".to_string())
    })?;

    let encoded: String = encoded.split_ascii_whitespace().collect();
    let bytes = DATA_URI_BASE64
        .decode(encoded)
        .map_err(|error| KtexaError::Decoding(format!("invalid base64 in data URI: {}", error)))?;

    log::debug!("[PAYLOAD] decoded data URI into {} bytes", bytes.len());

    Ok(ImageBlob {
        bytes,
        file_name: ImageFormat::JPEG.default_file_name().to_string(),
        content_type: ImageFormat::JPEG.content_type().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_as_data_uri(declared_mime: &str, bytes: &[u8]) -> String {
        format!(
            "data:{};base64,{}",
            declared_mime,
            base64::engine::general_purpose::STANDARD.encode(bytes)
        )
    }

    #[test]
    fn test_data_uri_decodes_to_original_bytes() {
        let original_bytes = b"ktexa test image bytes".to_vec();
        let payload = ImagePayload::from_data_uri(encode_as_data_uri("image/jpeg", &original_bytes));

        let blob = payload.into_blob().unwrap();

        assert_eq!(blob.bytes, original_bytes);
        assert_eq!(blob.bytes.len(), original_bytes.len());
        assert_eq!(blob.content_type, "image/jpeg");
        assert_eq!(blob.file_name, "image.jpg");
    }

    #[test]
    fn test_data_uri_declared_mime_type_is_ignored() {
        let payload = ImagePayload::from_data_uri(encode_as_data_uri("image/png", b"png bytes"));

        let blob = payload.into_blob().unwrap();

        assert_eq!(blob.content_type, "image/jpeg");
    }

    #[test]
    fn test_data_uri_with_unpadded_base64_decodes() {
        let payload = ImagePayload::from_data_uri("data:image/jpeg;base64,QUJDRA");

        let blob = payload.into_blob().unwrap();

        assert_eq!(blob.bytes, b"ABCD");
    }

    #[test]
    fn test_data_uri_with_embedded_whitespace_decodes() {
        let payload = ImagePayload::from_data_uri("data:image/jpeg;base64,QUJD\nRA==\n");

        let blob = payload.into_blob().unwrap();

        assert_eq!(blob.bytes, b"ABCD");
    }

    #[test]
    fn test_data_uri_without_comma_fails_with_decoding_error() {
        let payload = ImagePayload::from_data_uri("data:image/jpeg;base64");

        let error = payload.into_blob().unwrap_err();

        assert!(matches!(error, KtexaError::Decoding(_)));
        assert!(error.to_string().contains("',' separator"));
    }

    #[test]
    fn test_data_uri_with_invalid_base64_fails_with_decoding_error() {
        let payload = ImagePayload::from_data_uri("data:image/jpeg;base64,not*valid*base64");

        let error = payload.into_blob().unwrap_err();

        assert!(matches!(error, KtexaError::Decoding(_)));
    }

    #[test]
    fn test_data_uri_with_impossible_base64_length_fails_with_decoding_error() {
        let payload = ImagePayload::from_data_uri("data:image/jpeg;base64,QUJDR");

        let error = payload.into_blob().unwrap_err();

        assert!(matches!(error, KtexaError::Decoding(_)));
    }

    #[test]
    fn test_data_uri_with_second_comma_fails_base64_validation() {
        let payload = ImagePayload::from_data_uri("data:image/jpeg;base64,QUJD,QUJD");

        let error = payload.into_blob().unwrap_err();

        assert!(matches!(error, KtexaError::Decoding(_)));
    }

    #[test]
    fn test_data_uri_with_empty_payload_decodes_to_zero_bytes() {
        let payload = ImagePayload::from_data_uri("data:image/jpeg;base64,");

        let blob = payload.into_blob().unwrap();

        assert!(blob.bytes.is_empty());
        assert_eq!(blob.content_type, "image/jpeg");
    }

    #[test]
    fn test_file_payload_passes_through_unchanged() {
        let payload =
            ImagePayload::from_bytes(b"raw png bytes".to_vec(), "screenshot.png", "image/png");

        let blob = payload.into_blob().unwrap();

        assert_eq!(blob.bytes, b"raw png bytes");
        assert_eq!(blob.file_name, "screenshot.png");
        assert_eq!(blob.content_type, "image/png");
    }

    #[test]
    fn test_debug_output_elides_raw_bytes() {
        let payload = ImagePayload::from_bytes(vec![0u8; 4096], "big.jpg", "image/jpeg");

        let rendered = format!("{:?}", payload);

        assert!(rendered.contains("byte_count: 4096"));
        assert!(!rendered.contains("[0, 0"));
    }

    #[tokio::test]
    async fn test_from_file_reads_bytes_and_infers_content_type() {
        let file_path = std::env::temp_dir().join("ktexa-client-from-file-test.png");
        std::fs::write(&file_path, b"fake png contents").unwrap();

        let payload = ImagePayload::from_file(&file_path).await.unwrap();

        match payload {
            ImagePayload::File {
                bytes,
                file_name,
                content_type,
            } => {
                assert_eq!(bytes, b"fake png contents");
                assert_eq!(file_name, "ktexa-client-from-file-test.png");
                assert_eq!(content_type, "image/png");
            }
            other => panic!("expected file payload, got {:?}", other),
        }

        std::fs::remove_file(&file_path).ok();
    }

    #[tokio::test]
    async fn test_from_file_falls_back_to_octet_stream_for_unknown_extension() {
        let file_path = std::env::temp_dir().join("ktexa-client-from-file-test.raw");
        std::fs::write(&file_path, b"raw sensor data").unwrap();

        let payload = ImagePayload::from_file(&file_path).await.unwrap();

        match payload {
            ImagePayload::File { content_type, .. } => {
                assert_eq!(content_type, "application/octet-stream");
            }
            other => panic!("expected file payload, got {:?}", other),
        }

        std::fs::remove_file(&file_path).ok();
    }

    #[tokio::test]
    async fn test_from_file_surfaces_io_error_for_missing_file() {
        let file_path = std::env::temp_dir().join("ktexa-client-does-not-exist.jpg");

        let result = ImagePayload::from_file(&file_path).await;

        assert!(result.is_err());
    }
}
