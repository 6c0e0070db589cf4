//! Bulk update/delete of selected assets, with a journal that allows one undo.
//!
//! Every operation captures the previous values of exactly the selected
//! assets before it writes, and stores them in `bulk_operation.snapshot`.
//! Undo replays that snapshot inside a transaction.

use crate::adapter::cmd::bulk::{BulkDeleteCmd, BulkUpdateCmd};
use crate::adapter::vo::bulk::{BulkResultVO, UndoResultVO};
use crate::common::{AssetStatus, BulkAction, BulkField};
use crate::error::AppError;
use crate::repo::model::{asset, bulk_operation};
use crate::repo::sea::{AssetRepo, BulkRepo};
use crate::service::asset::{normalize_tags, tags_json};
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Checked value for one asset column.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Tags(Vec<String>),
}

impl FieldValue {
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Number(n) => serde_json::json!(n),
            FieldValue::Tags(tags) => tags_json(tags.clone()),
        }
    }

    fn into_expr(self) -> SimpleExpr {
        match self {
            FieldValue::Text(s) => Expr::value(s),
            FieldValue::Number(n) => Expr::value(n),
            FieldValue::Tags(tags) => Expr::value(tags_json(tags)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotItem {
    pub asset_id: String,
    /// column value before the operation; null for deletes
    pub previous: Value,
}

pub fn column_of(field: BulkField) -> asset::Column {
    match field {
        BulkField::Status => asset::Column::Status,
        BulkField::Category => asset::Column::Category,
        BulkField::Location => asset::Column::Location,
        BulkField::AssignedTo => asset::Column::AssignedTo,
        BulkField::Value => asset::Column::Value,
        BulkField::Tags => asset::Column::Tags,
    }
}

/// Validate `raw` for `field` the same way a single asset save does.
pub fn parse_field_value(field: BulkField, raw: &Value) -> Result<FieldValue, AppError> {
    let bad = |what: &str| {
        AppError::MsgError(format!("{} expects {}", field.as_ref(), what))
    };
    match field {
        BulkField::Status => {
            let s = raw.as_str().ok_or_else(|| bad("a status"))?;
            let status = AssetStatus::from_str(s).map_err(|_| bad("a status"))?;
            Ok(FieldValue::Text(status.as_ref().to_string()))
        }
        BulkField::Category => raw
            .as_str()
            .map(|s| FieldValue::Text(s.trim().to_string()))
            .ok_or_else(|| bad("a string")),
        BulkField::Location | BulkField::AssignedTo => raw
            .as_str()
            .map(|s| FieldValue::Text(s.to_string()))
            .ok_or_else(|| bad("a string")),
        BulkField::Value => match raw.as_f64() {
            Some(n) if n.is_finite() && n >= 0.0 => Ok(FieldValue::Number(n)),
            _ => Err(bad("a non-negative number")),
        },
        BulkField::Tags => {
            let items = raw.as_array().ok_or_else(|| bad("a list of tags"))?;
            let tags = items
                .iter()
                .map(|d| d.as_str().map(str::to_string).ok_or_else(|| bad("a list of tags")))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(FieldValue::Tags(normalize_tags(tags)))
        }
    }
}

pub fn previous_value(model: &asset::Model, field: BulkField) -> Value {
    match field {
        BulkField::Status => Value::String(model.status.clone()),
        BulkField::Category => Value::String(model.category.clone()),
        BulkField::Location => Value::String(model.location.clone()),
        BulkField::AssignedTo => Value::String(model.assigned_to.clone()),
        BulkField::Value => serde_json::json!(model.value),
        BulkField::Tags => tags_json(model.tag_list()),
    }
}

/// Keep the first occurrence of each id, dropping blanks.
pub fn dedup_ids(ids: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        let id = id.trim();
        if !id.is_empty() && !out.iter().any(|d| d == id) {
            out.push(id.to_string());
        }
    }
    out
}

/// Live rows of exactly `ids`; any id missing from the tenant fails the whole selection.
async fn load_selection(
    txn: &DatabaseTransaction,
    tenant_id: &str,
    ids: &[String],
) -> Result<Vec<asset::Model>, AppError> {
    if ids.is_empty() {
        return Err(AppError::MsgError("no asset selected".to_string()));
    }
    let rows = AssetRepo::find_live_by_ids(txn, tenant_id, ids).await?;
    if let Some(missing) = ids.iter().find(|id| !rows.iter().any(|r| &r.id == *id)) {
        return Err(AppError::not_found("asset", missing));
    }
    Ok(rows)
}

fn journal_row(
    tenant_id: &str,
    user_id: &str,
    action: BulkAction,
    field: Option<BulkField>,
    value: Value,
    ids: &[String],
    snapshot: &[SnapshotItem],
) -> Result<bulk_operation::Model, AppError> {
    let mut op = bulk_operation::Model::new();
    op.tenant_id = tenant_id.to_string();
    op.action = action.as_ref().to_string();
    op.field = field.map(|f| f.as_ref().to_string()).unwrap_or_default();
    op.value = value;
    op.asset_ids = serde_json::to_value(ids)?;
    op.snapshot = serde_json::to_value(snapshot)?;
    op.created_by = user_id.to_string();
    op.updated_by = user_id.to_string();
    Ok(op)
}

pub async fn bulk_update(
    db: &DatabaseConnection,
    tenant_id: &str,
    user_id: &str,
    cmd: BulkUpdateCmd,
) -> Result<BulkResultVO, AppError> {
    let ids = dedup_ids(cmd.asset_ids);
    let value = parse_field_value(cmd.field, &cmd.value)?;
    let txn = db.begin().await?;
    let rows = load_selection(&txn, tenant_id, &ids).await?;
    let snapshot: Vec<SnapshotItem> = rows
        .iter()
        .map(|r| SnapshotItem {
            asset_id: r.id.clone(),
            previous: previous_value(r, cmd.field),
        })
        .collect();
    let affected = AssetRepo::set_column(
        &txn,
        tenant_id,
        &ids,
        column_of(cmd.field),
        value.clone().into_expr(),
    )
    .await?;
    let op = journal_row(
        tenant_id,
        user_id,
        BulkAction::Update,
        Some(cmd.field),
        value.to_json(),
        &ids,
        &snapshot,
    )?;
    let operation_id = BulkRepo::insert_operation_one(&txn, op).await?;
    txn.commit().await?;
    tracing::info!(
        "bulk update {} of {} assets ({}) by {}",
        operation_id,
        affected,
        cmd.field.as_ref(),
        user_id
    );
    Ok(BulkResultVO {
        operation_id,
        affected,
    })
}

pub async fn bulk_delete(
    db: &DatabaseConnection,
    tenant_id: &str,
    user_id: &str,
    cmd: BulkDeleteCmd,
) -> Result<BulkResultVO, AppError> {
    let ids = dedup_ids(cmd.asset_ids);
    let txn = db.begin().await?;
    let rows = load_selection(&txn, tenant_id, &ids).await?;
    let snapshot: Vec<SnapshotItem> = rows
        .iter()
        .map(|r| SnapshotItem {
            asset_id: r.id.clone(),
            previous: Value::Null,
        })
        .collect();
    let affected = AssetRepo::set_deleted(&txn, tenant_id, &ids, 1).await?;
    let op = journal_row(
        tenant_id,
        user_id,
        BulkAction::Delete,
        None,
        Value::Null,
        &ids,
        &snapshot,
    )?;
    let operation_id = BulkRepo::insert_operation_one(&txn, op).await?;
    txn.commit().await?;
    tracing::info!("bulk delete {} of {} assets by {}", operation_id, affected, user_id);
    Ok(BulkResultVO {
        operation_id,
        affected,
    })
}

/// Replay the snapshot of `operation_id`. An operation can be undone once.
pub async fn undo(
    db: &DatabaseConnection,
    tenant_id: &str,
    user_id: &str,
    operation_id: &str,
) -> Result<UndoResultVO, AppError> {
    let txn = db.begin().await?;
    let op = BulkRepo::get_operation_by_id(&txn, tenant_id, operation_id).await?;
    if BulkRepo::mark_undone(&txn, tenant_id, operation_id, user_id).await? == 0 {
        return Err(AppError::MsgError(format!(
            "operation {} was already undone",
            operation_id
        )));
    }
    let snapshot: Vec<SnapshotItem> = serde_json::from_value(op.snapshot)?;
    let action = BulkAction::from_str(&op.action)
        .map_err(|_| AppError::MsgError(format!("unknown bulk action {}", op.action)))?;
    let mut restored = 0;
    match action {
        BulkAction::Update => {
            let field = BulkField::from_str(&op.field)
                .map_err(|_| AppError::MsgError(format!("unknown bulk field {}", op.field)))?;
            for item in snapshot {
                let previous = parse_field_value(field, &item.previous)?;
                restored += AssetRepo::set_column(
                    &txn,
                    tenant_id,
                    &[item.asset_id],
                    column_of(field),
                    previous.into_expr(),
                )
                .await?;
            }
        }
        BulkAction::Delete => {
            let ids: Vec<String> = snapshot.into_iter().map(|d| d.asset_id).collect();
            restored = AssetRepo::set_deleted(&txn, tenant_id, &ids, 0).await?;
        }
    }
    txn.commit().await?;
    tracing::info!("bulk operation {} undone by {}", operation_id, user_id);
    Ok(UndoResultVO {
        operation_id: operation_id.to_string(),
        restored,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::sea::tests::memory_db;
    use serde_json::json;

    async fn seed(db: &DatabaseConnection, tenant: &str, names: &[&str]) -> Vec<String> {
        let mut ids = Vec::new();
        for (i, name) in names.iter().enumerate() {
            let mut m = asset::Model::new();
            m.tenant_id = tenant.to_string();
            m.name = name.to_string();
            m.location = format!("room-{i}");
            m.value = 100.0 * (i as f64 + 1.0);
            ids.push(AssetRepo::insert_asset_one(db, m).await.unwrap());
        }
        ids
    }

    #[test]
    fn test_parse_field_value() {
        assert_eq!(
            parse_field_value(BulkField::Status, &json!("retired")).unwrap(),
            FieldValue::Text("retired".into())
        );
        assert!(parse_field_value(BulkField::Status, &json!("gone")).is_err());
        assert!(parse_field_value(BulkField::Value, &json!(-1)).is_err());
        assert!(parse_field_value(BulkField::Value, &json!("10")).is_err());
        assert_eq!(
            parse_field_value(BulkField::Value, &json!(10)).unwrap(),
            FieldValue::Number(10.0)
        );
        assert_eq!(
            parse_field_value(BulkField::Tags, &json!([" a", "a", "b"])).unwrap(),
            FieldValue::Tags(vec!["a".into(), "b".into()])
        );
        assert!(parse_field_value(BulkField::Tags, &json!(["a", 1])).is_err());
        assert!(parse_field_value(BulkField::Location, &json!(null)).is_err());
    }

    #[test]
    fn test_dedup_ids() {
        assert_eq!(
            dedup_ids(vec!["b".into(), "a".into(), "b".into(), " ".into()]),
            vec!["b", "a"]
        );
    }

    #[tokio::test]
    async fn test_update_applies_to_exactly_selection_and_undo_restores() {
        let db = memory_db().await;
        let ids = seed(&db, "t1", &["a", "b", "c"]).await;
        let res = bulk_update(
            &db,
            "t1",
            "u1",
            BulkUpdateCmd {
                asset_ids: vec![ids[0].clone(), ids[1].clone(), ids[0].clone()],
                field: BulkField::Location,
                value: json!("warehouse"),
            },
        )
        .await
        .unwrap();
        assert_eq!(res.affected, 2);

        let rows = AssetRepo::find_by_ids(&db, "t1", &ids).await.unwrap();
        let location = |id: &str| {
            rows.iter()
                .find(|r| r.id == id)
                .map(|r| r.location.clone())
                .unwrap()
        };
        assert_eq!(location(&ids[0]), "warehouse");
        assert_eq!(location(&ids[1]), "warehouse");
        assert_eq!(location(&ids[2]), "room-2");

        let undo_res = undo(&db, "t1", "u1", &res.operation_id).await.unwrap();
        assert_eq!(undo_res.restored, 2);
        let rows = AssetRepo::find_by_ids(&db, "t1", &ids).await.unwrap();
        for (i, id) in ids.iter().enumerate() {
            let row = rows.iter().find(|r| &r.id == id).unwrap();
            assert_eq!(row.location, format!("room-{i}"));
        }

        // only once
        assert!(matches!(
            undo(&db, "t1", "u1", &res.operation_id).await,
            Err(AppError::MsgError(_))
        ));
    }

    #[tokio::test]
    async fn test_numeric_update_undo() {
        let db = memory_db().await;
        let ids = seed(&db, "t1", &["a", "b"]).await;
        let res = bulk_update(
            &db,
            "t1",
            "u1",
            BulkUpdateCmd {
                asset_ids: ids.clone(),
                field: BulkField::Value,
                value: json!(5.5),
            },
        )
        .await
        .unwrap();
        undo(&db, "t1", "u1", &res.operation_id).await.unwrap();
        let rows = AssetRepo::find_by_ids(&db, "t1", &ids).await.unwrap();
        let mut values: Vec<f64> = rows.iter().map(|r| r.value).collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(values, vec![100.0, 200.0]);
    }

    #[tokio::test]
    async fn test_selection_with_foreign_asset_changes_nothing() {
        let db = memory_db().await;
        let mine = seed(&db, "t1", &["a"]).await;
        let theirs = seed(&db, "t2", &["x"]).await;
        let res = bulk_update(
            &db,
            "t1",
            "u1",
            BulkUpdateCmd {
                asset_ids: vec![mine[0].clone(), theirs[0].clone()],
                field: BulkField::Status,
                value: json!("lost"),
            },
        )
        .await;
        assert!(matches!(res, Err(AppError::NotFound(_))));
        let row = AssetRepo::get_asset_by_id(&db, "t1", &mine[0]).await.unwrap();
        assert_eq!(row.status, "active");
        let (total, _) = BulkRepo::find_operation_by(&db, "t1", (1, 10)).await.unwrap();
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_delete_and_undo() {
        let db = memory_db().await;
        let ids = seed(&db, "t1", &["a", "b", "c"]).await;
        let res = bulk_delete(
            &db,
            "t1",
            "u1",
            BulkDeleteCmd {
                asset_ids: vec![ids[1].clone(), ids[2].clone()],
            },
        )
        .await
        .unwrap();
        assert_eq!(res.affected, 2);
        let live = AssetRepo::list_live(&db, "t1").await.unwrap();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].id, ids[0]);

        // deleting an already deleted asset is rejected
        assert!(bulk_delete(
            &db,
            "t1",
            "u1",
            BulkDeleteCmd {
                asset_ids: vec![ids[1].clone()],
            },
        )
        .await
        .is_err());

        let undo_res = undo(&db, "t1", "u1", &res.operation_id).await.unwrap();
        assert_eq!(undo_res.restored, 2);
        assert_eq!(AssetRepo::list_live(&db, "t1").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_undo_of_other_tenant_operation() {
        let db = memory_db().await;
        let ids = seed(&db, "t1", &["a"]).await;
        let res = bulk_delete(&db, "t1", "u1", BulkDeleteCmd { asset_ids: ids })
            .await
            .unwrap();
        assert!(matches!(
            undo(&db, "t2", "u9", &res.operation_id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
