use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountItem {
    pub key: String,
    pub count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryVO {
    pub total_assets: u64,
    pub total_value: f64,
    pub by_status: Vec<CountItem>,
    pub by_category: Vec<CountItem>,
    pub overdue_maintenance: u64,
    pub upcoming_maintenance: u64,
}
