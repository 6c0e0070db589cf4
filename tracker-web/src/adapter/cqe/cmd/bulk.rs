use crate::common::BulkField;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateCmd {
    #[validate(length(min = 1, message = "no asset selected"))]
    pub asset_ids: Vec<String>,
    pub field: BulkField,
    /// new value, checked against `field`
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteCmd {
    #[validate(length(min = 1, message = "no asset selected"))]
    pub asset_ids: Vec<String>,
}
