//! custom field repo

use crate::repo::model::{self, asset_field_value, custom_field};
use crate::repo::sea::SeaRepo;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct FieldRepo;

impl FieldRepo {
    pub async fn insert_field_one<C: ConnectionTrait>(
        db: &C,
        data: custom_field::Model,
    ) -> Result<String, DbErr> {
        let id = data.id.clone();
        SeaRepo::insert_with_default::<custom_field::Entity, custom_field::ActiveModel, _>(db, data)
            .await?;
        Ok(id)
    }

    pub async fn update_field_by_id<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        id: &str,
        active_model: custom_field::ActiveModel,
    ) -> Result<(), DbErr> {
        let res = custom_field::Entity::update_many()
            .set(active_model)
            .col_expr(custom_field::Column::UpdatedAt, Expr::value(model::now()))
            .filter(custom_field::Column::Id.eq(id))
            .filter(custom_field::Column::TenantId.eq(tenant_id))
            .filter(custom_field::Column::Deleted.eq(0))
            .exec(db)
            .await?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!("field {} not found", id)));
        }
        Ok(())
    }

    pub async fn get_field_by_id<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        id: &str,
    ) -> Result<custom_field::Model, DbErr> {
        custom_field::Entity::find_by_id(id)
            .filter(custom_field::Column::TenantId.eq(tenant_id))
            .filter(custom_field::Column::Deleted.eq(0))
            .one(db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("field {} not found", id)))
    }

    pub async fn find_field_by_key<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        key: &str,
    ) -> Result<Option<custom_field::Model>, DbErr> {
        custom_field::Entity::find()
            .filter(custom_field::Column::TenantId.eq(tenant_id))
            .filter(custom_field::Column::FieldKey.eq(key))
            .filter(custom_field::Column::Deleted.eq(0))
            .one(db)
            .await
    }

    pub async fn list_field<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
    ) -> Result<Vec<custom_field::Model>, DbErr> {
        custom_field::Entity::find()
            .filter(custom_field::Column::TenantId.eq(tenant_id))
            .filter(custom_field::Column::Deleted.eq(0))
            .order_by_asc(custom_field::Column::Name)
            .all(db)
            .await
    }

    pub async fn values_of_asset<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        asset_id: &str,
    ) -> Result<Vec<asset_field_value::Model>, DbErr> {
        asset_field_value::Entity::find()
            .filter(asset_field_value::Column::TenantId.eq(tenant_id))
            .filter(asset_field_value::Column::AssetId.eq(asset_id))
            .all(db)
            .await
    }

    /// Replace the stored value of one field on one asset.
    pub async fn put_value<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        asset_id: &str,
        field_id: &str,
        value: String,
    ) -> Result<(), DbErr> {
        asset_field_value::Entity::delete_many()
            .filter(asset_field_value::Column::TenantId.eq(tenant_id))
            .filter(asset_field_value::Column::AssetId.eq(asset_id))
            .filter(asset_field_value::Column::FieldId.eq(field_id))
            .exec(db)
            .await?;
        let row = asset_field_value::Model::new(tenant_id, asset_id, field_id, value);
        SeaRepo::insert_with_default::<asset_field_value::Entity, asset_field_value::ActiveModel, _>(
            db, row,
        )
        .await
    }

    pub async fn delete_values_of_asset<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        asset_id: &str,
    ) -> Result<u64, DbErr> {
        let res = asset_field_value::Entity::delete_many()
            .filter(asset_field_value::Column::TenantId.eq(tenant_id))
            .filter(asset_field_value::Column::AssetId.eq(asset_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn delete_values_of_field<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        field_id: &str,
    ) -> Result<u64, DbErr> {
        let res = asset_field_value::Entity::delete_many()
            .filter(asset_field_value::Column::TenantId.eq(tenant_id))
            .filter(asset_field_value::Column::FieldId.eq(field_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }
}
