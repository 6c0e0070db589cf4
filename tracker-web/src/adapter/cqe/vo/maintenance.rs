use crate::common::DueState;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Default, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleVO {
    pub id: String,
    pub asset_id: String,
    pub maintenance_type: String,
    pub interval_days: i32,
    pub next_due_date: NaiveDate,
    pub remark: String,
    pub created_by: String,
    pub created_at: chrono::DateTime<Local>,
    pub updated_at: chrono::DateTime<Local>,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryVO {
    pub id: String,
    pub schedule_id: String,
    pub asset_id: String,
    pub performed_at: NaiveDate,
    pub notes: String,
    pub performed_by: String,
    pub created_at: chrono::DateTime<Local>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DueItemVO {
    pub schedule_id: String,
    pub asset_id: String,
    pub asset_name: String,
    pub maintenance_type: String,
    pub next_due_date: NaiveDate,
    pub state: DueState,
}
