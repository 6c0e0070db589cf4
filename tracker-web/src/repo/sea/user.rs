//! user repo

use crate::repo::model::user;
use crate::repo::sea::SeaRepo;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct UserRepo;

impl UserRepo {
    pub async fn find_user_by_username<C: ConnectionTrait>(
        db: &C,
        username: &str,
    ) -> Result<Option<user::Model>, DbErr> {
        user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .filter(user::Column::Deleted.eq(0))
            .one(db)
            .await
    }

    pub async fn insert_user_one<C: ConnectionTrait>(
        db: &C,
        data: user::Model,
    ) -> Result<String, DbErr> {
        let id = data.id.clone();
        SeaRepo::insert_with_default::<user::Entity, user::ActiveModel, _>(db, data).await?;
        Ok(id)
    }

    pub async fn get_user_by_id<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        id: &str,
    ) -> Result<user::Model, DbErr> {
        user::Entity::find_by_id(id)
            .filter(user::Column::TenantId.eq(tenant_id))
            .filter(user::Column::Deleted.eq(0))
            .one(db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("user {} not found", id)))
    }
}
