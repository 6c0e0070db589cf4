pub mod asset;
pub mod asset_field_value;
pub mod bulk_operation;
pub mod custom_field;
pub mod maintenance_history;
pub mod maintenance_schedule;
pub mod tenant;
pub mod user;

use chrono::Local;

/// Fresh row id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn now() -> chrono::DateTime<Local> {
    Local::now()
}
