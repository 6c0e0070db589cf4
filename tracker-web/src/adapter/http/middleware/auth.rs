use crate::config::AppState;
use crate::{
    error::{AppError, AuthError},
    util::jwt::{validate_jwt_token, Claims},
};
use axum::extract::State;
use axum::{body::Body, http::Request, middleware::Next, response::Response};
use serde::{Deserialize, Serialize};

const AUTHORIZATION_KEY: &str = "Authorization";
const AUTHORIZATION_SPLIT_KEY: &str = "Bearer";

/// Resolve the caller from `Authorization: Bearer <token>` (or an
/// `authorization` query parameter) and attach a [`Context`].
pub async fn jwt_auth_middle(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(AUTHORIZATION_KEY)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .strip_prefix(AUTHORIZATION_SPLIT_KEY)
                .unwrap_or(value)
                .trim()
        })
        .or_else(|| {
            req.uri().query().and_then(|query| {
                query.split('&').find_map(|part| {
                    let (key, value) = part.split_once('=')?;
                    key.eq_ignore_ascii_case(AUTHORIZATION_KEY).then_some(value)
                })
            })
        })
        .filter(|token| !token.is_empty())
        .map(str::to_string);

    let token = token.ok_or(AuthError::MissingToken)?;
    let mut context = Context::default();
    context
        .with_claims(validate_jwt_token(&token, &state.jwt)?)
        .with_token(token);

    req.extensions_mut().insert(context);
    Ok(next.run(req).await)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    pub token: String,
    pub claims: Claims,
}

impl Context {
    pub fn with_claims(&mut self, c: Claims) -> &mut Self {
        self.claims = c;
        self
    }

    pub fn with_token(&mut self, token: String) -> &mut Self {
        self.token = token;
        self
    }

    pub fn tenant_id(&self) -> &str {
        &self.claims.tenant_id
    }

    pub fn user_id(&self) -> &str {
        &self.claims.user_id
    }
}
