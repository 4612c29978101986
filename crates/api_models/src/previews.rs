use serde::{Deserialize, Serialize};

use crate::enums::PreviewVariant;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PreviewsGenerateRequest {
    /// Name to render on the product. Required, must be non-empty after
    /// trimming; enforced before any external call.
    pub name: String,
    #[serde(default)]
    pub variant: PreviewVariant,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PreviewsGenerateResponse {
    pub success: bool,
    /// `data:image/png;base64,...` URI, directly usable as an `<img>` source.
    pub image: String,
}
