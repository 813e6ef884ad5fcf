use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const STATUS_SUCCESS: &str = "SUCCESS";

/// Body of `POST /v1/api/example`. Any JSON object is accepted; no field is read.
#[derive(Debug, Default, Deserialize)]
pub struct DefaultRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultResponse {
    pub status: String,
    pub uuid: Uuid,
}

impl DefaultResponse {
    /// A successful response carrying a freshly generated v4 identifier.
    pub fn success() -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            uuid: Uuid::new_v4(),
        }
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}
