use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserVO {
    pub id: String,
    pub tenant_id: String,
    pub name: String,
    pub username: String,
    pub phone: String,
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRes {
    pub token: String,
}
