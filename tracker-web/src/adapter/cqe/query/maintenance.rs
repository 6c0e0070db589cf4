use crate::common::PageQuery;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleListQuery {
    #[serde(default)]
    pub page_query: PageQuery,
    pub asset_id: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryListQuery {
    #[serde(default)]
    pub page_query: PageQuery,
    pub asset_id: Option<String>,
    pub schedule_id: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DueQuery {
    /// upcoming window in days, default 7
    pub days: Option<i64>,
}
