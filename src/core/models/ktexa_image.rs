use serde::{Deserialize, Serialize};

use crate::core::models::Metadata;

/// One indexed image returned by a similarity search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KtexaImage {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}
