//! error

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{async_trait, Json};
use sea_orm::DbErr;
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::{Validate, ValidationErrors};

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("missing token")]
    MissingToken,
    #[error("invalid token")]
    InvalidToken,
    #[error("token creation failed")]
    TokenCreation,
    #[error("username or password is error")]
    WrongCredentials,
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    MsgError(String),
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Db(DbErr),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Copy(#[from] tracker_common::CopyError),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        match e {
            DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
            e => AppError::Db(e),
        }
    }
}

impl AppError {
    pub fn not_found(what: &str, id: &str) -> Self {
        AppError::NotFound(format!("{} {} not found", what, id))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonRejection(r) => r.status(),
            AppError::Validation(_) | AppError::MsgError(_) => StatusCode::BAD_REQUEST,
            AppError::Auth(AuthError::WrongCredentials) => StatusCode::BAD_REQUEST,
            AppError::Auth(AuthError::TokenCreation) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    code: u16,
    msg: String,
    data: Option<()>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = if status.is_server_error() {
            tracing::error!("request failed: {:?}", self);
            "internal server error".to_string()
        } else {
            tracing::debug!("request rejected: {}", self);
            self.to_string()
        };
        (
            status,
            Json(ErrorResponse {
                code: status.as_u16(),
                msg,
                data: None,
            }),
        )
            .into_response()
    }
}

/// Json body extractor that also runs the `validator` rules of `T`.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(AppJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::MsgError("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(DbErr::RecordNotFound("asset".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(AuthError::MissingToken).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(AuthError::WrongCredentials).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(DbErr::Custom("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            AppError::not_found("asset", "a1").to_string(),
            "asset a1 not found"
        );
    }
}
