//! asset repo

use crate::repo::model::{self, asset};
use crate::repo::sea::SeaRepo;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, Order, QueryFilter, QueryOrder,
};

pub struct AssetRepo;

impl AssetRepo {
    fn live(tenant_id: &str) -> Condition {
        Condition::all()
            .add(asset::Column::TenantId.eq(tenant_id))
            .add(asset::Column::Deleted.eq(0))
    }

    pub async fn insert_asset_one<C: ConnectionTrait>(
        db: &C,
        data: asset::Model,
    ) -> Result<String, DbErr> {
        let id = data.id.clone();
        SeaRepo::insert_with_default::<asset::Entity, asset::ActiveModel, _>(db, data).await?;
        Ok(id)
    }

    /// Write the `Set` columns of `active_model` to a live row of the tenant.
    pub async fn update_asset_by_id<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        id: &str,
        active_model: asset::ActiveModel,
    ) -> Result<(), DbErr> {
        let res = asset::Entity::update_many()
            .set(active_model)
            .col_expr(asset::Column::UpdatedAt, Expr::value(model::now()))
            .filter(Self::live(tenant_id))
            .filter(asset::Column::Id.eq(id))
            .exec(db)
            .await?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!("asset {} not found", id)));
        }
        Ok(())
    }

    pub async fn get_asset_by_id<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        id: &str,
    ) -> Result<asset::Model, DbErr> {
        asset::Entity::find_by_id(id)
            .filter(Self::live(tenant_id))
            .one(db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("asset {} not found", id)))
    }

    pub async fn find_asset_by<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        pg: (u64, u64),
        search: Condition,
    ) -> Result<(u64, Vec<asset::Model>), DbErr> {
        let search = search.add(asset::Column::TenantId.eq(tenant_id));
        SeaRepo::page_with_default::<asset::Entity, _>(db, pg, search).await
    }

    /// Rows of `ids` regardless of their deleted flag.
    pub async fn find_by_ids<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        ids: &[String],
    ) -> Result<Vec<asset::Model>, DbErr> {
        asset::Entity::find()
            .filter(asset::Column::TenantId.eq(tenant_id))
            .filter(asset::Column::Id.is_in(ids.iter().cloned()))
            .all(db)
            .await
    }

    pub async fn find_live_by_ids<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        ids: &[String],
    ) -> Result<Vec<asset::Model>, DbErr> {
        asset::Entity::find()
            .filter(Self::live(tenant_id))
            .filter(asset::Column::Id.is_in(ids.iter().cloned()))
            .all(db)
            .await
    }

    pub async fn list_live<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
    ) -> Result<Vec<asset::Model>, DbErr> {
        asset::Entity::find()
            .filter(Self::live(tenant_id))
            .all(db)
            .await
    }

    pub async fn asset_select_kv<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
    ) -> Result<Vec<asset::Model>, DbErr> {
        asset::Entity::find()
            .filter(Self::live(tenant_id))
            .order_by(asset::Column::CreatedAt, Order::Desc)
            .all(db)
            .await
    }

    /// Set one column on every listed asset of the tenant.
    pub async fn set_column<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        ids: &[String],
        column: asset::Column,
        value: SimpleExpr,
    ) -> Result<u64, DbErr> {
        let res = asset::Entity::update_many()
            .col_expr(column, value)
            .col_expr(asset::Column::UpdatedAt, Expr::value(model::now()))
            .filter(asset::Column::TenantId.eq(tenant_id))
            .filter(asset::Column::Id.is_in(ids.iter().cloned()))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn set_deleted<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        ids: &[String],
        deleted: i8,
    ) -> Result<u64, DbErr> {
        let res = asset::Entity::update_many()
            .col_expr(asset::Column::Deleted, Expr::value(deleted))
            .col_expr(asset::Column::UpdatedAt, Expr::value(model::now()))
            .filter(asset::Column::TenantId.eq(tenant_id))
            .filter(asset::Column::Id.is_in(ids.iter().cloned()))
            .filter(asset::Column::Deleted.ne(deleted))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }
}
