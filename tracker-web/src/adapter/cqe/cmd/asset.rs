use crate::common::AssetStatus;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;
use validator::Validate;

/// Create when `id` is absent, otherwise update the given asset. On update,
/// absent optional fields keep their stored value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetSaveCmd {
    pub id: Option<String>,
    #[validate(length(min = 1, max = 255, message = "asset name is empty"))]
    pub name: String,
    pub category: Option<String>,
    pub status: Option<AssetStatus>,
    pub location: Option<String>,
    #[validate(range(min = 0.0, message = "asset value must not be negative"))]
    pub value: Option<f64>,
    pub assigned_to: Option<String>,
    pub tags: Option<Vec<String>>,
    pub remark: Option<String>,
    /// custom field key -> value
    pub custom_fields: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetScanCmd {
    #[validate(length(min = 1, message = "scan payload is empty"))]
    pub payload: String,
}
