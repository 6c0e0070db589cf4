//! config

mod alias;

pub use alias::*;

use std::path::Path;

use crate::error::AppError;
use crate::util::jwt::JwtConfig;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(rename = "db", default)]
    pub db_config: Db,
    #[serde(rename = "jwt", default)]
    pub jwt_config: JwtConfig,
    #[serde(rename = "tracing")]
    pub tracing: Option<TracingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub enum Db {
    #[serde(rename = "mysql")]
    Mysql(MysqlConfig),
    #[serde(rename = "sqlite")]
    Sqlite(SqliteConfig),
}

impl Default for Db {
    fn default() -> Self {
        Db::Sqlite(SqliteConfig {
            path: "tracker.sqlite".to_string(),
        })
    }
}

impl Db {
    pub fn connect_url(&self) -> String {
        match self {
            Db::Mysql(c) => c.connect_url(),
            Db::Sqlite(c) => c.connect_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    #[serde(default = "tracker_common::_default_listen_addr")]
    pub addr: String,
    pub port: u16,
    /// Create missing tables from the entity definitions on startup.
    #[serde(default = "tracker_common::_default_sync_schema")]
    pub sync_schema: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: tracker_common::_default_listen_addr(),
            port: 8080,
            sync_schema: tracker_common::_default_sync_schema(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TracingConfig {
    pub filter: String,
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct MysqlConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl MysqlConfig {
    pub fn connect_url(&self) -> String {
        format!(
            "mysql://{}:{}@{}/{}",
            self.username, self.password, self.host, self.database
        )
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct SqliteConfig {
    pub path: String,
}

impl SqliteConfig {
    pub fn connect_url(&self) -> String {
        if self.path == ":memory:" {
            "sqlite::memory:".to_string()
        } else {
            // rwc: create the file on first start
            format!("sqlite://{}?mode=rwc", self.path)
        }
    }
}

pub fn parse_config_str(data: &str) -> Result<AppConfig, AppError> {
    toml::from_str(data).map_err(|e| AppError::Config(e.to_string()))
}

pub async fn parse_config(path: &Path) -> Result<AppConfig, AppError> {
    tracing::debug!("parse config from path: {}", path.display());
    let data = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::Config(format!("read {}: {}", path.display(), e)))?;
    let config = parse_config_str(&data)?;
    info!("config loaded, server: {}", config.server.url());
    let mut init_config = SHARED_APP_CONFIG.write().await;
    *init_config = config.clone();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sqlite_config() {
        let config = parse_config_str(
            r#"
[server]
port = 9000

[db.sqlite]
path = "assets.db"

[jwt]
secret = "abc"
expireTime = 60

[tracing]
filter = "tracker_web=debug,sea_orm=info"
"#,
        )
        .unwrap();
        assert_eq!(config.server.url(), "0.0.0.0:9000");
        assert!(config.server.sync_schema);
        assert_eq!(config.db_config.connect_url(), "sqlite://assets.db?mode=rwc");
        assert_eq!(config.jwt_config.secret, "abc");
        assert_eq!(config.jwt_config.expire_time, 60);
        assert_eq!(config.jwt_config.issuer, "asset-tracker");
        assert_eq!(
            config.tracing.map(|t| t.filter).unwrap_or_default(),
            "tracker_web=debug,sea_orm=info"
        );
    }

    #[test]
    fn test_parse_mysql_config() {
        let config = parse_config_str(
            r#"
[server]
addr = "127.0.0.1"
port = 8081
syncSchema = false

[db.mysql]
host = "127.0.0.1:3306"
username = "tracker"
password = "pw"
database = "assets"

[jwt]
secret = "abc"
"#,
        )
        .unwrap();
        assert!(!config.server.sync_schema);
        assert_eq!(
            config.db_config.connect_url(),
            "mysql://tracker:pw@127.0.0.1:3306/assets"
        );
    }

    #[test]
    fn test_parse_invalid_config() {
        assert!(matches!(
            parse_config_str("[server]\nport = \"x\""),
            Err(AppError::Config(_))
        ));
    }
}
