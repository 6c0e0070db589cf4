//! serde based field copy between request/response objects and table models

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::str::FromStr;

#[derive(thiserror::Error, Debug)]
pub enum CopyError {
    #[error("copy expects a struct, got: {0}")]
    NotObject(&'static str),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Copy every field of `D` from `source`, matching names in either
/// camelCase or snake_case. Fields missing in `source` keep `D::default()`.
pub fn copy<S, D>(source: &S) -> Result<D, CopyError>
where
    S: Serialize,
    D: DeserializeOwned + Serialize + Default,
{
    let Value::Object(src) = serde_json::to_value(source)? else {
        return Err(CopyError::NotObject("source"));
    };
    let Value::Object(template) = serde_json::to_value(D::default())? else {
        return Err(CopyError::NotObject("destination"));
    };
    let mut out = Map::with_capacity(template.len());
    for (key, ty) in template {
        let found = src
            .get(&key)
            .or_else(|| src.get(&snake_to_camel(&key)))
            .or_else(|| src.get(&camel_to_snake(&key)));
        let value = match found {
            Some(v) => convert_single_value(v, &ty),
            None => ty,
        };
        out.insert(key, value);
    }
    Ok(serde_json::from_value(Value::Object(out))?)
}

/// Coerce `value` to the json kind of `field_type`; anything that can not be
/// coerced falls back to the destination default.
fn convert_single_value(value: &Value, field_type: &Value) -> Value {
    if value.is_null() {
        return field_type.to_owned();
    }
    match field_type {
        Value::String(_) => match value {
            Value::String(_) => value.clone(),
            Value::Number(n) => Value::String(n.to_string()),
            Value::Bool(b) => Value::String(b.to_string()),
            _ => Value::String(String::new()),
        },
        Value::Number(_) => match value {
            Value::Number(_) => value.clone(),
            Value::String(s) => serde_json::Number::from_str(s)
                .map(Value::Number)
                .unwrap_or_else(|_| field_type.to_owned()),
            Value::Bool(b) => Value::Number(i64::from(*b).into()),
            _ => field_type.to_owned(),
        },
        Value::Bool(_) => match value {
            Value::Bool(_) => value.clone(),
            Value::Number(n) => Value::Bool(n.as_i64().is_some_and(|d| d != 0)),
            Value::String(s) => Value::Bool(matches!(s.as_str(), "true" | "1")),
            _ => Value::Bool(false),
        },
        Value::Array(_) => match value {
            Value::Array(_) => value.clone(),
            _ => field_type.to_owned(),
        },
        _ => value.clone(),
    }
}

pub fn camel_to_snake(input: &str) -> String {
    let mut snake_case = String::with_capacity(input.len() + 4);
    for (i, c) in input.chars().enumerate() {
        if c.is_uppercase() {
            if i != 0 {
                snake_case.push('_');
            }
            snake_case.extend(c.to_lowercase());
        } else {
            snake_case.push(c);
        }
    }
    snake_case
}

pub fn snake_to_camel(input: &str) -> String {
    let mut camel_case = String::with_capacity(input.len());
    let mut uppercase_next = false;
    for c in input.chars() {
        if c == '_' {
            uppercase_next = true;
        } else if uppercase_next {
            camel_case.extend(c.to_uppercase());
            uppercase_next = false;
        } else {
            camel_case.push(c);
        }
    }
    camel_case
}
