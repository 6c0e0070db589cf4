use chrono::Local;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "asset_field_value")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub tenant_id: String,
    #[sea_orm(indexed)]
    pub asset_id: String,
    pub field_id: String,
    pub value: String,
    pub created_at: chrono::DateTime<Local>,
    pub updated_at: chrono::DateTime<Local>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn new(tenant_id: &str, asset_id: &str, field_id: &str, value: String) -> Model {
        let now = super::now();
        Model {
            id: super::new_id(),
            tenant_id: tenant_id.to_string(),
            asset_id: asset_id.to_string(),
            field_id: field_id.to_string(),
            value,
            created_at: now,
            updated_at: now,
        }
    }
}
