use crate::common::{AssetStatus, PageQuery};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetListQuery {
    #[serde(default)]
    pub page_query: PageQuery,
    pub name: Option<String>,
    pub category: Option<String>,
    pub status: Option<AssetStatus>,
    pub location: Option<String>,
    pub assigned_to: Option<String>,
    pub tag: Option<String>,
}
