use chrono::Local;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Default, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkResultVO {
    pub operation_id: String,
    pub affected: u64,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UndoResultVO {
    pub operation_id: String,
    pub restored: u64,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkOperationVO {
    pub id: String,
    pub action: String,
    pub field: String,
    pub value: serde_json::Value,
    pub asset_ids: Vec<String>,
    pub undone: bool,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: chrono::DateTime<Local>,
    pub updated_at: chrono::DateTime<Local>,
}
