use chrono::Local;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Default, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldVO {
    pub id: String,
    pub name: String,
    pub field_key: String,
    pub field_type: String,
    pub required: bool,
    pub options: Vec<String>,
    pub remark: String,
    pub created_at: chrono::DateTime<Local>,
    pub updated_at: chrono::DateTime<Local>,
}
