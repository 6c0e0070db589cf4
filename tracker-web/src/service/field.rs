//! custom field rules

use crate::adapter::cmd::field::FieldSaveCmd;
use crate::adapter::vo::field::FieldVO;
use crate::common::FieldType;
use crate::error::AppError;
use crate::repo::model::custom_field;
use crate::repo::sea::{FieldRepo, SeaRepo};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use sea_orm::ActiveValue::Set;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

lazy_static! {
    static ref FIELD_KEY_RE: Regex = Regex::new(r"^[a-z][a-z0-9_]*$").unwrap();
}

pub fn check_field_key(key: &str) -> Result<(), AppError> {
    if FIELD_KEY_RE.is_match(key) {
        Ok(())
    } else {
        Err(AppError::MsgError(format!(
            "field key {} must match [a-z][a-z0-9_]*",
            key
        )))
    }
}

/// Trimmed, non-empty, de-duplicated select options.
pub fn normalize_options(field_type: FieldType, options: Vec<String>) -> Result<Vec<String>, AppError> {
    let mut out: Vec<String> = Vec::with_capacity(options.len());
    for o in options {
        let o = o.trim();
        if !o.is_empty() && !out.iter().any(|d| d == o) {
            out.push(o.to_string());
        }
    }
    match field_type {
        FieldType::Select if out.is_empty() => Err(AppError::MsgError(
            "select field needs at least one option".to_string(),
        )),
        FieldType::Select => Ok(out),
        _ => Ok(Vec::new()),
    }
}

/// Check `raw` against the field definition and return the stored form.
pub fn normalize_value(def: &custom_field::Model, raw: &str) -> Result<String, AppError> {
    let field_type = FieldType::from_str(&def.field_type)
        .map_err(|_| AppError::MsgError(format!("field {} has unknown type", def.field_key)))?;
    let raw = raw.trim();
    let invalid = |what: &str| {
        AppError::MsgError(format!(
            "value {:?} of field {} is not a valid {}",
            raw, def.field_key, what
        ))
    };
    match field_type {
        FieldType::Text => Ok(raw.to_string()),
        FieldType::Number => match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(raw.to_string()),
            _ => Err(invalid("number")),
        },
        FieldType::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|d| d.format("%Y-%m-%d").to_string())
            .map_err(|_| invalid("date")),
        FieldType::Boolean => match raw.to_ascii_lowercase().as_str() {
            "true" => Ok("true".to_string()),
            "false" => Ok("false".to_string()),
            _ => Err(invalid("boolean")),
        },
        FieldType::Select => {
            if def.option_list().iter().any(|o| o == raw) {
                Ok(raw.to_string())
            } else {
                Err(invalid("option"))
            }
        }
    }
}

/// Validate and store custom field values of one asset. On create every
/// required field must be given.
pub async fn apply_custom_fields<C: ConnectionTrait>(
    db: &C,
    tenant_id: &str,
    asset_id: &str,
    values: &HashMap<String, String>,
    creating: bool,
) -> Result<(), AppError> {
    let defs = FieldRepo::list_field(db, tenant_id).await?;
    if let Some(unknown) = values
        .keys()
        .find(|k| !defs.iter().any(|d| &d.field_key == *k))
    {
        return Err(AppError::MsgError(format!("unknown custom field {}", unknown)));
    }
    for def in &defs {
        match values.get(&def.field_key) {
            Some(raw) if raw.trim().is_empty() && def.required => {
                return Err(AppError::MsgError(format!(
                    "custom field {} is required",
                    def.field_key
                )));
            }
            Some(raw) => {
                let value = normalize_value(def, raw)?;
                FieldRepo::put_value(db, tenant_id, asset_id, &def.id, value).await?;
            }
            None if creating && def.required => {
                return Err(AppError::MsgError(format!(
                    "custom field {} is required",
                    def.field_key
                )));
            }
            None => {}
        }
    }
    Ok(())
}

/// field key -> stored value for one asset; values of removed fields are skipped.
pub async fn custom_values_of<C: ConnectionTrait>(
    db: &C,
    tenant_id: &str,
    asset_id: &str,
) -> Result<BTreeMap<String, String>, AppError> {
    let defs = FieldRepo::list_field(db, tenant_id).await?;
    let values = FieldRepo::values_of_asset(db, tenant_id, asset_id).await?;
    Ok(values
        .into_iter()
        .filter_map(|v| {
            defs.iter()
                .find(|d| d.id == v.field_id)
                .map(|d| (d.field_key.clone(), v.value))
        })
        .collect())
}

/// Create or update a field definition; `field_key` stays unique among the
/// tenant's live fields.
pub async fn save_field(
    db: &DatabaseConnection,
    tenant_id: &str,
    user_id: &str,
    cmd: FieldSaveCmd,
) -> Result<String, AppError> {
    let field_key = cmd.field_key.trim().to_string();
    check_field_key(&field_key)?;
    let options = normalize_options(cmd.field_type, cmd.options.unwrap_or_default())?;
    let id = cmd.id.filter(|d| !d.is_empty());
    if let Some(other) = FieldRepo::find_field_by_key(db, tenant_id, &field_key).await? {
        if id.as_deref() != Some(other.id.as_str()) {
            return Err(AppError::MsgError(format!(
                "field key {} already exists",
                field_key
            )));
        }
    }
    let options = Value::Array(options.into_iter().map(Value::String).collect());
    match id {
        None => {
            let mut model = custom_field::Model::new();
            model.tenant_id = tenant_id.to_string();
            model.name = cmd.name.trim().to_string();
            model.field_key = field_key;
            model.field_type = cmd.field_type.as_ref().to_string();
            model.required = cmd.required;
            model.options = options;
            model.remark = cmd.remark.unwrap_or_default();
            model.created_by = user_id.to_string();
            model.updated_by = user_id.to_string();
            Ok(FieldRepo::insert_field_one(db, model).await?)
        }
        Some(id) => {
            let mut active_model = custom_field::ActiveModel {
                name: Set(cmd.name.trim().to_string()),
                field_key: Set(field_key),
                field_type: Set(cmd.field_type.as_ref().to_string()),
                required: Set(cmd.required),
                options: Set(options),
                updated_by: Set(user_id.to_string()),
                ..Default::default()
            };
            if let Some(remark) = cmd.remark {
                active_model.remark = Set(remark);
            }
            FieldRepo::update_field_by_id(db, tenant_id, &id, active_model).await?;
            Ok(id)
        }
    }
}

pub async fn list_fields<C: ConnectionTrait>(
    db: &C,
    tenant_id: &str,
) -> Result<Vec<FieldVO>, AppError> {
    let defs = FieldRepo::list_field(db, tenant_id).await?;
    let mut list = Vec::with_capacity(defs.len());
    for def in defs {
        let mut vo: FieldVO = tracker_common::copy(&def)?;
        vo.options = def.option_list();
        list.push(vo);
    }
    Ok(list)
}

/// Soft delete the definition and drop every value stored for it.
pub async fn delete_field(
    db: &DatabaseConnection,
    tenant_id: &str,
    id: &str,
) -> Result<(), AppError> {
    let txn = db.begin().await?;
    let n = SeaRepo::delete_by_id::<custom_field::Entity, _>(&txn, tenant_id, id).await?;
    if n == 0 {
        return Err(AppError::not_found("field", id));
    }
    let values = FieldRepo::delete_values_of_field(&txn, tenant_id, id).await?;
    txn.commit().await?;
    tracing::info!("field {} deleted with {} values", id, values);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::sea::tests::memory_db;

    fn def(field_type: FieldType, options: &[&str]) -> custom_field::Model {
        let mut m = custom_field::Model::new();
        m.field_key = "warranty".to_string();
        m.field_type = field_type.as_ref().to_string();
        m.options = serde_json::json!(options);
        m
    }

    #[test]
    fn test_field_key() {
        assert!(check_field_key("serial_no").is_ok());
        assert!(check_field_key("a1").is_ok());
        assert!(check_field_key("1abc").is_err());
        assert!(check_field_key("Serial").is_err());
        assert!(check_field_key("serial-no").is_err());
    }

    #[test]
    fn test_normalize_options() {
        let out = normalize_options(
            FieldType::Select,
            vec![" new ".into(), "used".into(), "new".into(), "".into()],
        )
        .unwrap();
        assert_eq!(out, vec!["new", "used"]);
        assert!(normalize_options(FieldType::Select, vec![" ".into()]).is_err());
        assert!(normalize_options(FieldType::Text, vec!["x".into()])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_normalize_value_by_type() {
        assert_eq!(
            normalize_value(&def(FieldType::Number, &[]), " 12.5 ").unwrap(),
            "12.5"
        );
        assert!(normalize_value(&def(FieldType::Number, &[]), "abc").is_err());
        assert!(normalize_value(&def(FieldType::Number, &[]), "NaN").is_err());
        assert_eq!(
            normalize_value(&def(FieldType::Date, &[]), "2026-03-01").unwrap(),
            "2026-03-01"
        );
        assert!(normalize_value(&def(FieldType::Date, &[]), "03/01/2026").is_err());
        assert_eq!(
            normalize_value(&def(FieldType::Boolean, &[]), "TRUE").unwrap(),
            "true"
        );
        assert!(normalize_value(&def(FieldType::Boolean, &[]), "yes").is_err());
        assert_eq!(
            normalize_value(&def(FieldType::Select, &["new", "used"]), "used").unwrap(),
            "used"
        );
        assert!(normalize_value(&def(FieldType::Select, &["new", "used"]), "broken").is_err());
        assert_eq!(
            normalize_value(&def(FieldType::Text, &[]), " free text ").unwrap(),
            "free text"
        );
    }

    fn save_cmd(key: &str, field_type: FieldType, required: bool) -> FieldSaveCmd {
        FieldSaveCmd {
            id: None,
            name: key.to_uppercase(),
            field_key: key.to_string(),
            field_type,
            required,
            options: Some(vec!["new".into(), "used".into()]),
            remark: None,
        }
    }

    #[tokio::test]
    async fn test_save_list_delete_field() {
        let db = memory_db().await;
        let id = save_field(&db, "t1", "u1", save_cmd("condition", FieldType::Select, false))
            .await
            .unwrap();
        save_field(&db, "t1", "u1", save_cmd("serial", FieldType::Text, false))
            .await
            .unwrap();
        // duplicate key in the same tenant
        assert!(save_field(&db, "t1", "u1", save_cmd("serial", FieldType::Text, false))
            .await
            .is_err());
        // but fine in another one
        assert!(save_field(&db, "t2", "u1", save_cmd("serial", FieldType::Text, false))
            .await
            .is_ok());

        let list = list_fields(&db, "t1").await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].field_key, "condition");
        assert_eq!(list[0].options, vec!["new", "used"]);
        assert!(list[1].options.is_empty());

        let mut values = HashMap::new();
        values.insert("condition".to_string(), "used".to_string());
        apply_custom_fields(&db, "t1", "a1", &values, true).await.unwrap();
        assert_eq!(custom_values_of(&db, "t1", "a1").await.unwrap().len(), 1);

        delete_field(&db, "t1", &id).await.unwrap();
        assert!(custom_values_of(&db, "t1", "a1").await.unwrap().is_empty());
        assert!(matches!(
            delete_field(&db, "t1", &id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_required_and_unknown_values() {
        let db = memory_db().await;
        save_field(&db, "t1", "u1", save_cmd("serial", FieldType::Text, true))
            .await
            .unwrap();
        let empty = HashMap::new();
        assert!(apply_custom_fields(&db, "t1", "a1", &empty, true).await.is_err());
        // updates may leave it out
        assert!(apply_custom_fields(&db, "t1", "a1", &empty, false).await.is_ok());
        let unknown = HashMap::from([("color".to_string(), "red".to_string())]);
        assert!(apply_custom_fields(&db, "t1", "a1", &unknown, false).await.is_err());
    }
}
