//! runtime state

use super::AppConfig;
use crate::error::AppError;
use crate::repo::sea;
use crate::util::jwt::JwtConfig;
use lazy_static::lazy_static;
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use tokio::sync::RwLock;

lazy_static! {
    pub static ref SHARED_APP_CONFIG: RwLock<AppConfig> = RwLock::new(AppConfig::default());
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub conn: DatabaseConnection,
    pub jwt: Arc<JwtConfig>,
}

impl AppState {
    pub fn new(conn: DatabaseConnection, jwt: JwtConfig) -> Self {
        Self {
            conn,
            jwt: Arc::new(jwt),
        }
    }
}

pub async fn init_shared_app_state(config: &AppConfig) -> Result<AppState, AppError> {
    // step1. connect db
    let conn = match Database::connect(config.db_config.connect_url()).await {
        Ok(conn) => {
            tracing::debug!("db conn initialized");
            conn
        }
        Err(e) => {
            tracing::error!("create db conn error: {:?}", e);
            return Err(e.into());
        }
    };
    // step2. tables
    if config.server.sync_schema {
        sea::sync_schema(&conn).await?;
    }
    tracing::debug!("app state initialized");
    Ok(AppState::new(conn, config.jwt_config.clone()))
}
