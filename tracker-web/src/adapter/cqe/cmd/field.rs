use crate::common::FieldType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldSaveCmd {
    pub id: Option<String>,
    #[validate(length(min = 1, max = 128, message = "field name is empty"))]
    pub name: String,
    #[validate(length(min = 1, max = 64, message = "field key is empty"))]
    pub field_key: String,
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    pub options: Option<Vec<String>>,
    pub remark: Option<String>,
}
