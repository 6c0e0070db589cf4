use chrono::Local;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tenant defined extra attribute for assets.
#[derive(Clone, Debug, Default, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "custom_field")]
#[serde(default)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(indexed)]
    pub tenant_id: String,
    pub name: String,
    pub field_key: String,
    pub field_type: String,
    pub required: bool,
    /// allowed values of a select field
    pub options: Json,
    pub remark: String,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: chrono::DateTime<Local>,
    pub updated_at: chrono::DateTime<Local>,
    pub deleted: i8,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn new() -> Model {
        let now = super::now();
        Model {
            id: super::new_id(),
            options: Json::Array(Vec::new()),
            created_at: now,
            updated_at: now,
            ..Default::default()
        }
    }

    pub fn option_list(&self) -> Vec<String> {
        match &self.options {
            Json::Array(items) => items
                .iter()
                .filter_map(|d| d.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }
}
