mod image_indexing_service;
mod reverse_image_search_service;

pub use image_indexing_service::ImageIndexingService;
pub use reverse_image_search_service::ReverseImageSearchService;
