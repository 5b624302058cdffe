pub const DEFAULT_BASE_URL: &str = "https://api.ktexa.com/v1";

pub const API_KEY_HEADER: &str = "x-api-key";

pub const INDEX_IMAGES_PATH: &str = "/images";
pub const SEARCH_IMAGES_PATH: &str = "/search";

pub const IMAGE_PART_NAME: &str = "image";
pub const METADATA_PART_PREFIX: &str = "metadata";

pub const SEARCH_LIMIT_PARAM: &str = "limit";
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";
