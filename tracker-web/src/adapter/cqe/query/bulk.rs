use crate::common::PageQuery;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkListQuery {
    #[serde(default)]
    pub page_query: PageQuery,
}
