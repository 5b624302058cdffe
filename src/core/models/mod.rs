mod client_config;
mod image_format;
mod image_payload;
mod ktexa_image;
mod metadata;

pub use client_config::KtexaConfig;
pub use image_format::ImageFormat;
pub use image_payload::{ImageBlob, ImagePayload};
pub use ktexa_image::KtexaImage;
pub use metadata::{coerce_to_form_value, Metadata};
