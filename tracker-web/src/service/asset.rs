//! asset save/read/delete

use crate::adapter::cmd::asset::AssetSaveCmd;
use crate::adapter::vo::asset::AssetVO;
use crate::error::AppError;
use crate::repo::model::asset;
use crate::repo::sea::{AssetRepo, FieldRepo, MaintenanceRepo};
use crate::service::field;
use sea_orm::ActiveValue::Set;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde_json::Value;

/// Trim, drop empties and duplicates; first occurrence wins.
pub fn normalize_tags<I: IntoIterator<Item = String>>(tags: I) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|d| d == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

pub fn tags_json(tags: Vec<String>) -> Value {
    Value::Array(tags.into_iter().map(Value::String).collect())
}

pub async fn save_asset(
    db: &DatabaseConnection,
    tenant_id: &str,
    user_id: &str,
    cmd: AssetSaveCmd,
) -> Result<String, AppError> {
    if cmd.name.trim().is_empty() {
        return Err(AppError::MsgError("asset name is empty".to_string()));
    }
    let txn = db.begin().await?;
    let id = match cmd.id.as_deref().filter(|d| !d.is_empty()) {
        None => {
            let mut model = asset::Model::new();
            model.tenant_id = tenant_id.to_string();
            model.name = cmd.name.trim().to_string();
            model.category = cmd.category.unwrap_or_default().trim().to_string();
            if let Some(status) = cmd.status {
                model.status = status.as_ref().to_string();
            }
            model.location = cmd.location.unwrap_or_default();
            model.value = cmd.value.unwrap_or_default();
            model.assigned_to = cmd.assigned_to.unwrap_or_default();
            model.tags = tags_json(normalize_tags(cmd.tags.unwrap_or_default()));
            model.remark = cmd.remark.unwrap_or_default();
            model.created_by = user_id.to_string();
            model.updated_by = user_id.to_string();
            let id = AssetRepo::insert_asset_one(&txn, model).await?;
            field::apply_custom_fields(
                &txn,
                tenant_id,
                &id,
                &cmd.custom_fields.unwrap_or_default(),
                true,
            )
            .await?;
            tracing::info!("asset {} created by {}", id, user_id);
            id
        }
        Some(id) => {
            let mut active_model = asset::ActiveModel {
                name: Set(cmd.name.trim().to_string()),
                updated_by: Set(user_id.to_string()),
                ..Default::default()
            };
            if let Some(category) = cmd.category {
                active_model.category = Set(category.trim().to_string());
            }
            if let Some(status) = cmd.status {
                active_model.status = Set(status.as_ref().to_string());
            }
            if let Some(location) = cmd.location {
                active_model.location = Set(location);
            }
            if let Some(value) = cmd.value {
                active_model.value = Set(value);
            }
            if let Some(assigned_to) = cmd.assigned_to {
                active_model.assigned_to = Set(assigned_to);
            }
            if let Some(tags) = cmd.tags {
                active_model.tags = Set(tags_json(normalize_tags(tags)));
            }
            if let Some(remark) = cmd.remark {
                active_model.remark = Set(remark);
            }
            AssetRepo::update_asset_by_id(&txn, tenant_id, id, active_model).await?;
            if let Some(values) = cmd.custom_fields {
                field::apply_custom_fields(&txn, tenant_id, id, &values, false).await?;
            }
            id.to_string()
        }
    };
    txn.commit().await?;
    Ok(id)
}

pub async fn get_asset<C: ConnectionTrait>(
    db: &C,
    tenant_id: &str,
    id: &str,
) -> Result<AssetVO, AppError> {
    let model = AssetRepo::get_asset_by_id(db, tenant_id, id).await?;
    let mut vo: AssetVO = tracker_common::copy(&model)?;
    vo.custom_fields = field::custom_values_of(db, tenant_id, id).await?;
    Ok(vo)
}

/// Soft delete the asset with its schedules and drop its custom values.
pub async fn delete_asset(
    db: &DatabaseConnection,
    tenant_id: &str,
    id: &str,
) -> Result<(), AppError> {
    let txn = db.begin().await?;
    let ids = [id.to_string()];
    if AssetRepo::find_live_by_ids(&txn, tenant_id, &ids).await?.is_empty() {
        return Err(AppError::not_found("asset", id));
    }
    AssetRepo::set_deleted(&txn, tenant_id, &ids, 1).await?;
    let schedules = MaintenanceRepo::delete_schedules_of_asset(&txn, tenant_id, id).await?;
    FieldRepo::delete_values_of_asset(&txn, tenant_id, id).await?;
    txn.commit().await?;
    tracing::info!("asset {} deleted with {} schedules", id, schedules);
    Ok(())
}
