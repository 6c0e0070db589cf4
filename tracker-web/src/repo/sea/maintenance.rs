//! maintenance repo

use crate::repo::model::{self, asset, maintenance_history, maintenance_schedule};
use crate::repo::sea::SeaRepo;
use chrono::NaiveDate;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait,
};

pub struct MaintenanceRepo;

impl MaintenanceRepo {
    fn live(tenant_id: &str) -> Condition {
        Condition::all()
            .add(maintenance_schedule::Column::TenantId.eq(tenant_id))
            .add(maintenance_schedule::Column::Deleted.eq(0))
    }

    pub async fn insert_schedule_one<C: ConnectionTrait>(
        db: &C,
        data: maintenance_schedule::Model,
    ) -> Result<String, DbErr> {
        let id = data.id.clone();
        SeaRepo::insert_with_default::<
            maintenance_schedule::Entity,
            maintenance_schedule::ActiveModel,
            _,
        >(db, data)
        .await?;
        Ok(id)
    }

    pub async fn update_schedule_by_id<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        id: &str,
        active_model: maintenance_schedule::ActiveModel,
    ) -> Result<(), DbErr> {
        let res = maintenance_schedule::Entity::update_many()
            .set(active_model)
            .col_expr(
                maintenance_schedule::Column::UpdatedAt,
                Expr::value(model::now()),
            )
            .filter(Self::live(tenant_id))
            .filter(maintenance_schedule::Column::Id.eq(id))
            .exec(db)
            .await?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!("schedule {} not found", id)));
        }
        Ok(())
    }

    pub async fn get_schedule_by_id<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        id: &str,
    ) -> Result<maintenance_schedule::Model, DbErr> {
        maintenance_schedule::Entity::find_by_id(id)
            .filter(Self::live(tenant_id))
            .one(db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("schedule {} not found", id)))
    }

    /// Page of schedules whose asset is live. Schedules of a bulk-deleted
    /// asset stay stored for undo but are not listed.
    pub async fn find_schedule_by<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        pg: (u64, u64),
        search: Condition,
    ) -> Result<(u64, Vec<maintenance_schedule::Model>), DbErr> {
        let live_assets = asset::Entity::find()
            .select_only()
            .column(asset::Column::Id)
            .filter(asset::Column::TenantId.eq(tenant_id))
            .filter(asset::Column::Deleted.eq(0))
            .into_query();
        let search = search
            .add(maintenance_schedule::Column::TenantId.eq(tenant_id))
            .add(maintenance_schedule::Column::AssetId.in_subquery(live_assets));
        SeaRepo::page_with_default::<maintenance_schedule::Entity, _>(db, pg, search).await
    }

    /// Live schedules due on or before `until`, earliest first.
    pub async fn list_due_until<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        until: NaiveDate,
    ) -> Result<Vec<maintenance_schedule::Model>, DbErr> {
        maintenance_schedule::Entity::find()
            .filter(Self::live(tenant_id))
            .filter(maintenance_schedule::Column::NextDueDate.lte(until))
            .order_by_asc(maintenance_schedule::Column::NextDueDate)
            .all(db)
            .await
    }

    pub async fn set_next_due<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        id: &str,
        next_due: NaiveDate,
    ) -> Result<(), DbErr> {
        maintenance_schedule::Entity::update_many()
            .col_expr(
                maintenance_schedule::Column::NextDueDate,
                Expr::value(next_due),
            )
            .col_expr(
                maintenance_schedule::Column::UpdatedAt,
                Expr::value(model::now()),
            )
            .filter(Self::live(tenant_id))
            .filter(maintenance_schedule::Column::Id.eq(id))
            .exec(db)
            .await?;
        Ok(())
    }

    pub async fn delete_schedules_of_asset<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        asset_id: &str,
    ) -> Result<u64, DbErr> {
        let res = maintenance_schedule::Entity::update_many()
            .col_expr(maintenance_schedule::Column::Deleted, Expr::value(1))
            .col_expr(
                maintenance_schedule::Column::UpdatedAt,
                Expr::value(model::now()),
            )
            .filter(Self::live(tenant_id))
            .filter(maintenance_schedule::Column::AssetId.eq(asset_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn insert_history_one<C: ConnectionTrait>(
        db: &C,
        data: maintenance_history::Model,
    ) -> Result<String, DbErr> {
        let id = data.id.clone();
        SeaRepo::insert_with_default::<
            maintenance_history::Entity,
            maintenance_history::ActiveModel,
            _,
        >(db, data)
        .await?;
        Ok(id)
    }

    pub async fn find_history_by<C: ConnectionTrait>(
        db: &C,
        tenant_id: &str,
        pg: (u64, u64),
        search: Condition,
    ) -> Result<(u64, Vec<maintenance_history::Model>), DbErr> {
        let paginator = maintenance_history::Entity::find()
            .filter(search)
            .filter(maintenance_history::Column::TenantId.eq(tenant_id))
            .order_by_desc(maintenance_history::Column::PerformedAt)
            .order_by_desc(maintenance_history::Column::CreatedAt)
            .paginate(db, pg.1.max(1));
        let total = paginator.num_items().await?;
        let list = paginator.fetch_page(pg.0.max(1) - 1).await?;
        Ok((total, list))
    }
}
