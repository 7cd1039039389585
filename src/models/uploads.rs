// src/models/uploads.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignedUrlPayload {
    #[validate(length(min = 1, message = "fileName é obrigatório."))]
    pub file_name: String,
    #[validate(length(min = 1, message = "fileType é obrigatório."))]
    pub file_type: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignedUrlResponse {
    pub upload_url: String,
    pub public_url: String,
}
