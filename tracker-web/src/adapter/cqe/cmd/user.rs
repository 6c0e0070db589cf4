use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserLoginCmd {
    #[validate(length(min = 1, message = "name is empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is empty"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRegisterCmd {
    #[validate(length(min = 1, message = "username is empty"))]
    pub username: String,
    #[validate(length(min = 6, message = "password is too short"))]
    pub password: String,
    #[validate(length(min = 1, message = "phone is empty"))]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub remark: String,
    #[serde(default)]
    pub name: String,
    /// name of the new tenant, the username when absent
    pub tenant_name: Option<String>,
}

/// A member added to the caller's own tenant.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserAddCmd {
    #[validate(length(min = 1, message = "username is empty"))]
    pub username: String,
    #[validate(length(min = 6, message = "password is too short"))]
    pub password: String,
    #[validate(length(min = 1, message = "phone is empty"))]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub remark: String,
    #[serde(default)]
    pub name: String,
}
