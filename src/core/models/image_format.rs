use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    PNG,
    JPEG,
    GIF,
    WEBP,
}

impl ImageFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::PNG),
            "jpg" | "jpeg" => Some(ImageFormat::JPEG),
            "gif" => Some(ImageFormat::GIF),
            "webp" => Some(ImageFormat::WEBP),
            _ => None,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ImageFormat::PNG => "image/png",
            ImageFormat::JPEG => "image/jpeg",
            ImageFormat::GIF => "image/gif",
            ImageFormat::WEBP => "image/webp",
        }
    }

    /// File name used when the payload has no name of its own, as with
    /// decoded data URIs.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ImageFormat::PNG => "image.png",
            ImageFormat::JPEG => "image.jpg",
            ImageFormat::GIF => "image.gif",
            ImageFormat::WEBP => "image.webp",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension_recognizes_common_image_extensions() {
        assert_eq!(ImageFormat::from_extension("png"), Some(ImageFormat::PNG));
        assert_eq!(ImageFormat::from_extension("jpg"), Some(ImageFormat::JPEG));
        assert_eq!(ImageFormat::from_extension("jpeg"), Some(ImageFormat::JPEG));
        assert_eq!(ImageFormat::from_extension("gif"), Some(ImageFormat::GIF));
        assert_eq!(ImageFormat::from_extension("webp"), Some(ImageFormat::WEBP));
    }

    #[test]
    fn test_from_extension_is_case_insensitive() {
        assert_eq!(ImageFormat::from_extension("JPG"), Some(ImageFormat::JPEG));
        assert_eq!(ImageFormat::from_extension("Png"), Some(ImageFormat::PNG));
    }

    #[test]
    fn test_from_extension_rejects_unknown_extensions() {
        assert_eq!(ImageFormat::from_extension("tiff"), None);
        assert_eq!(ImageFormat::from_extension(""), None);
    }

    #[test]
    fn test_content_type_maps_to_mime_types() {
        assert_eq!(ImageFormat::JPEG.content_type(), "image/jpeg");
        assert_eq!(ImageFormat::PNG.content_type(), "image/png");
        assert_eq!(ImageFormat::GIF.content_type(), "image/gif");
        assert_eq!(ImageFormat::WEBP.content_type(), "image/webp");
    }

    #[test]
    fn test_default_file_name_matches_format() {
        assert_eq!(ImageFormat::JPEG.default_file_name(), "image.jpg");
        assert_eq!(ImageFormat::WEBP.default_file_name(), "image.webp");
    }
}
