use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    EnumIter,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AssetStatus {
    #[default]
    Active,
    Maintenance,
    Retired,
    Lost,
    Damaged,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Boolean,
    Select,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BulkAction {
    Update,
    Delete,
}

/// Asset columns a bulk update may touch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr, ToSchema,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum BulkField {
    Status,
    Category,
    Location,
    AssignedTo,
    Value,
    Tags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DueState {
    Overdue,
    Upcoming,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_status_names() {
        assert_eq!(AssetStatus::from_str("lost").unwrap(), AssetStatus::Lost);
        assert!(AssetStatus::from_str("stolen").is_err());
        let all: Vec<String> = AssetStatus::iter().map(|s| s.as_ref().to_owned()).collect();
        assert_eq!(all, ["active", "maintenance", "retired", "lost", "damaged"]);
        assert_eq!(
            serde_json::to_string(&AssetStatus::Damaged).unwrap(),
            "\"damaged\""
        );
    }

    #[test]
    fn test_bulk_field_names() {
        assert_eq!(
            BulkField::from_str("assignedTo").unwrap(),
            BulkField::AssignedTo
        );
        assert_eq!(BulkField::AssignedTo.as_ref(), "assignedTo");
        let f: BulkField = serde_json::from_str("\"tags\"").unwrap();
        assert_eq!(f, BulkField::Tags);
    }
}
