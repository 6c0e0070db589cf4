//! tenant repo

use crate::repo::model::tenant;
use crate::repo::sea::SeaRepo;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct TenantRepo;

impl TenantRepo {
    pub async fn insert_tenant_one<C: ConnectionTrait>(
        db: &C,
        data: tenant::Model,
    ) -> Result<String, DbErr> {
        let id = data.id.clone();
        SeaRepo::insert_with_default::<tenant::Entity, tenant::ActiveModel, _>(db, data).await?;
        Ok(id)
    }

    pub async fn get_tenant_by_id<C: ConnectionTrait>(
        db: &C,
        id: &str,
    ) -> Result<tenant::Model, DbErr> {
        tenant::Entity::find_by_id(id)
            .filter(tenant::Column::Deleted.eq(0))
            .one(db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("tenant {} not found", id)))
    }
}
