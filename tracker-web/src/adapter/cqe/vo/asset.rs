use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Clone, Default, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetVO {
    pub id: String,
    pub name: String,
    pub category: String,
    pub status: String,
    pub location: String,
    pub value: f64,
    pub assigned_to: String,
    pub tags: Vec<String>,
    pub remark: String,
    /// custom field key -> value
    pub custom_fields: BTreeMap<String, String>,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: chrono::DateTime<Local>,
    pub updated_at: chrono::DateTime<Local>,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetListItemVO {
    pub id: String,
    pub name: String,
    pub category: String,
    pub status: String,
    pub location: String,
    pub value: f64,
    pub assigned_to: String,
    pub tags: Vec<String>,
    pub remark: String,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: chrono::DateTime<Local>,
    pub updated_at: chrono::DateTime<Local>,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetQrVO {
    pub asset_id: String,
    /// text to encode into the QR image
    pub payload: String,
}
