use chrono::Local;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Journal row of one bulk update/delete; `snapshot` holds what undo replays.
#[derive(Clone, Debug, Default, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bulk_operation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(indexed)]
    pub tenant_id: String,
    pub action: String,
    pub field: String,
    pub value: Json,
    pub asset_ids: Json,
    pub snapshot: Json,
    pub undone: i8,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: chrono::DateTime<Local>,
    pub updated_at: chrono::DateTime<Local>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn new() -> Model {
        let now = super::now();
        Model {
            id: super::new_id(),
            created_at: now,
            updated_at: now,
            ..Default::default()
        }
    }
}
