use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod asset;
pub mod bulk;
pub mod dashboard;
pub mod field;
pub mod maintenance;
pub mod user;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BaseKV {
    pub key: String,
    pub value: String,
}
