use serde::{Deserialize, Serialize};

/// Body of `POST /api/extract`. A missing `url` field reads as empty and is
/// rejected by the handler.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractResponse {
    pub text: String,
}
