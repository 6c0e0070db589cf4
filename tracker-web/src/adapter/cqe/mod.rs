//! request commands, list queries and response views

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracker_common::CopyError;

pub mod cmd;
pub mod query;
pub mod vo;

const CODE_OK: u16 = 200;
const MSG_OK: &str = "success";

/// Envelope of a success without payload: `{code, msg}`.
#[derive(Clone, Debug, Serialize)]
pub struct ResponseSuccess {
    code: u16,
    msg: String,
}

impl Default for ResponseSuccess {
    fn default() -> Self {
        Self {
            code: CODE_OK,
            msg: MSG_OK.to_string(),
        }
    }
}

/// Envelope of every success body: `{code, msg, data}`. Errors use the same
/// shape with `data: null`, see `AppError`.
#[derive(Clone, Debug, Serialize)]
pub struct Response<T>
where
    T: Serialize,
{
    pub code: u16,
    pub msg: String,
    pub data: Option<T>,
}

impl<T> Response<T>
where
    T: Serialize,
{
    pub fn new_success(t: T) -> Response<T> {
        Self {
            code: CODE_OK,
            msg: MSG_OK.to_string(),
            data: Some(t),
        }
    }
}

/// One page of a list endpoint, with the total of matching rows.
#[derive(Clone, Debug, Serialize)]
pub struct ResList<T>
where
    T: Serialize,
{
    list: Vec<T>,
    total: u64,
}

impl<T> ResList<T>
where
    T: Serialize,
{
    pub fn new(total: u64, list: Vec<T>) -> ResList<T> {
        Self { total, list }
    }
}

impl<T> ResList<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Page of entity rows copied field by field into view `T`.
    pub fn copied<M: Serialize>(total: u64, rows: &[M]) -> Result<ResList<T>, CopyError> {
        let list = rows
            .iter()
            .map(|d| tracker_common::copy::<_, T>(d))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(total, list))
    }
}
