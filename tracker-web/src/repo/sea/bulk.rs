//! bulk operation journal repo

use crate::repo::model::{self, bulk_operation};
use crate::repo::sea::SeaRepo;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct BulkRepo;

impl BulkRepo {
    pub async fn insert_operation_one<C: ConnectionTrait>(
        db: &C,
        data: bulk_operation::Model,
    ) -> Result<String, DbErr> {
        let id = data.id.clone();
        SeaRepo::insert_with_default::<bulk_operation::Entity, bulk_operation::ActiveModel, _>(
            db, data,
        )
        .await?;
        Ok(id)
    }

    pub async fn get_operation_by_id<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        id: &str,
    ) -> Result<bulk_operation::Model, DbErr> {
        bulk_operation::Entity::find_by_id(id)
            .filter(bulk_operation::Column::TenantId.eq(tenant_id))
            .one(db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("operation {} not found", id)))
    }

    /// Flag the operation as undone; 0 rows means someone already did.
    pub async fn mark_undone<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        id: &str,
        user_id: &str,
    ) -> Result<u64, DbErr> {
        let res = bulk_operation::Entity::update_many()
            .col_expr(bulk_operation::Column::Undone, Expr::value(1))
            .col_expr(bulk_operation::Column::UpdatedBy, Expr::value(user_id))
            .col_expr(bulk_operation::Column::UpdatedAt, Expr::value(model::now()))
            .filter(bulk_operation::Column::Id.eq(id))
            .filter(bulk_operation::Column::TenantId.eq(tenant_id))
            .filter(bulk_operation::Column::Undone.eq(0))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn find_operation_by<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        pg: (u64, u64),
    ) -> Result<(u64, Vec<bulk_operation::Model>), DbErr> {
        SeaRepo::page_with_default::<bulk_operation::Entity, _>(
            db,
            pg,
            Condition::all().add(bulk_operation::Column::TenantId.eq(tenant_id)),
        )
        .await
    }
}
