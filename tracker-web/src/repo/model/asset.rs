use chrono::Local;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::AssetStatus;

#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "asset")]
#[serde(default)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(indexed)]
    pub tenant_id: String,
    pub name: String,
    pub category: String,
    pub status: String,
    pub location: String,
    pub value: f64,
    pub assigned_to: String,
    /// json array of strings
    pub tags: Json,
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
            status: AssetStatus::default().as_ref().to_string(),
            tags: Json::Array(Vec::new()),
            created_at: now,
            updated_at: now,
            ..Default::default()
        }
    }

    pub fn tag_list(&self) -> Vec<String> {
        match &self.tags {
            Json::Array(items) => items
                .iter()
                .filter_map(|d| d.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }
}
