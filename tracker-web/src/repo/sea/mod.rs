//! sea-orm repositories

mod asset;
mod bulk;
mod field;
mod maintenance;
mod tenant;
mod user;

pub use asset::*;
pub use bulk::*;
pub use field::*;
pub use maintenance::*;
pub use tenant::*;
pub use user::*;

use crate::repo::model;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, Schema,
};
use std::str::FromStr;

pub struct SeaRepo;

/// `LIKE` pattern matching `text` anywhere, with `%` and `_` taken literally.
pub fn like_contains(text: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    LikeExpr::new(pattern).escape('\\')
}

impl SeaRepo {
    /// Column of `E` by its table name, if the entity has it.
    fn column<E: EntityTrait>(name: &str) -> Option<E::Column> {
        E::Column::from_str(name).ok()
    }

    pub async fn insert_with_default<E, A, C>(db: &C, data: E::Model) -> Result<(), DbErr>
    where
        E: EntityTrait,
        A: ActiveModelTrait<Entity = E>,
        E::Model: IntoActiveModel<A>,
        C: ConnectionTrait,
    {
        E::insert(data.into_active_model().reset_all())
            .exec_without_returning(db)
            .await?;
        Ok(())
    }

    /// Page of live rows matching `search`, newest first. `pg` is (1-based page, size).
    pub async fn page_with_default<E, C>(
        db: &C,
        pg: (u64, u64),
        search: Condition,
    ) -> Result<(u64, Vec<E::Model>), DbErr>
    where
        E: EntityTrait,
        E::Model: Send + Sync,
        C: ConnectionTrait,
    {
        let mut select = E::find().filter(search);
        if let Some(deleted) = Self::column::<E>("deleted") {
            select = select.filter(deleted.eq(0));
        }
        if let Some(created_at) = Self::column::<E>("created_at") {
            select = select.order_by_desc(created_at);
        }
        let paginator = select.paginate(db, pg.1.max(1));
        let total = paginator.num_items().await?;
        let list = paginator.fetch_page(pg.0.max(1) - 1).await?;
        Ok((total, list))
    }

    /// Soft delete one tenant row. Returns the number of rows flagged.
    pub async fn delete_by_id<E, C>(db: &C, tenant_id: &str, id: &str) -> Result<u64, DbErr>
    where
        E: EntityTrait,
        C: ConnectionTrait,
    {
        let (Some(id_col), Some(tenant_col), Some(deleted)) = (
            Self::column::<E>("id"),
            Self::column::<E>("tenant_id"),
            Self::column::<E>("deleted"),
        ) else {
            return Err(DbErr::Custom(format!(
                "{} does not support soft delete",
                E::default().table_name()
            )));
        };
        let mut update = E::update_many().col_expr(deleted, Expr::value(1));
        if let Some(updated_at) = Self::column::<E>("updated_at") {
            update = update.col_expr(updated_at, Expr::value(model::now()));
        }
        let res = update
            .filter(id_col.eq(id))
            .filter(tenant_col.eq(tenant_id))
            .filter(deleted.eq(0))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }
}

async fn create_table<E, C>(db: &C, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(db.get_database_backend().build(&table)).await?;
    Ok(())
}

/// Create any missing table from the entity definitions.
pub async fn sync_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());
    create_table(db, &schema, model::tenant::Entity).await?;
    create_table(db, &schema, model::user::Entity).await?;
    create_table(db, &schema, model::asset::Entity).await?;
    create_table(db, &schema, model::custom_field::Entity).await?;
    create_table(db, &schema, model::asset_field_value::Entity).await?;
    create_table(db, &schema, model::maintenance_schedule::Entity).await?;
    create_table(db, &schema, model::maintenance_history::Entity).await?;
    create_table(db, &schema, model::bulk_operation::Entity).await?;
    tracing::info!("schema synced");
    Ok(())
}
