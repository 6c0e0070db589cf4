//! jwt

use crate::error::AuthError;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "tracker_common::_default_jwt_issuer")]
    pub issuer: String,
    /// seconds
    #[serde(default = "tracker_common::_default_jwt_expire")]
    pub expire_time: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            issuer: tracker_common::_default_jwt_issuer(),
            expire_time: tracker_common::_default_jwt_expire(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub user_id: String,
    pub tenant_id: String,
    pub username: String,
    pub name: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(expire_time: i64, issuer: String) -> Result<Self, AuthError> {
        if expire_time <= 0 {
            return Err(AuthError::TokenCreation);
        }
        let now = Utc::now().timestamp();
        Ok(Self {
            iss: issuer,
            iat: now,
            exp: now + expire_time,
            ..Default::default()
        })
    }

    pub fn with_user_id(&mut self, user_id: String) -> &mut Self {
        self.sub = user_id.clone();
        self.user_id = user_id;
        self
    }

    pub fn with_tenant_id(&mut self, tenant_id: String) -> &mut Self {
        self.tenant_id = tenant_id;
        self
    }

    pub fn with_username(&mut self, username: String) -> &mut Self {
        self.username = username;
        self
    }

    pub fn with_name(&mut self, name: String) -> &mut Self {
        self.name = name;
        self
    }

    pub fn generate_token(&self, secret: &[u8]) -> Result<String, AuthError> {
        encode(&Header::default(), self, &EncodingKey::from_secret(secret))
            .map_err(|_| AuthError::TokenCreation)
    }
}

pub fn validate_jwt_token(token: &str, config: &JwtConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::default();
    validation.set_issuer(&[config.issuer.as_str()]);
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!("invalid token: {}", e);
        AuthError::InvalidToken
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "unit-secret".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_token_round() {
        let config = config();
        let mut claims = Claims::new(config.expire_time, config.issuer.clone()).unwrap();
        let token = claims
            .with_user_id("u1".to_string())
            .with_tenant_id("t1".to_string())
            .with_username("alice".to_string())
            .generate_token(config.secret.as_bytes())
            .unwrap();
        let parsed = validate_jwt_token(&token, &config).unwrap();
        assert_eq!(parsed.user_id, "u1");
        assert_eq!(parsed.sub, "u1");
        assert_eq!(parsed.tenant_id, "t1");
        assert_eq!(parsed.username, "alice");
    }

    #[test]
    fn test_token_wrong_secret() {
        let config = config();
        let token = Claims::new(60, config.issuer.clone())
            .unwrap()
            .generate_token(b"other")
            .unwrap();
        assert!(matches!(
            validate_jwt_token(&token, &config),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_token_wrong_issuer() {
        let config = config();
        let token = Claims::new(60, "someone-else".to_string())
            .unwrap()
            .generate_token(config.secret.as_bytes())
            .unwrap();
        assert!(validate_jwt_token(&token, &config).is_err());
    }

    #[test]
    fn test_non_positive_expire() {
        assert!(Claims::new(0, "x".to_string()).is_err());
    }
}
