use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSaveCmd {
    pub id: Option<String>,
    #[validate(length(min = 1, message = "asset id is empty"))]
    pub asset_id: String,
    #[validate(length(min = 1, message = "maintenance type is empty"))]
    pub maintenance_type: String,
    #[validate(range(min = 1, max = 3650, message = "interval days must in [1~3650]"))]
    pub interval_days: i32,
    pub next_due_date: NaiveDate,
    pub remark: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecordCmd {
    #[validate(length(min = 1, message = "schedule id is empty"))]
    pub schedule_id: String,
    pub performed_at: NaiveDate,
    pub notes: Option<String>,
}
