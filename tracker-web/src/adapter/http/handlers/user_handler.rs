use crate::adapter::cmd::user::{UserAddCmd, UserLoginCmd, UserRegisterCmd};
use crate::adapter::http::middleware::auth::Context;
use crate::adapter::vo::user::{LoginRes, UserVO};
use crate::adapter::Response;
use crate::config::AppState;
use crate::error::{AppError, AppJson, AuthError};
use crate::repo::sea::UserRepo;
use crate::service;
use crate::util::jwt;
use axum::extract::State;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/user/info",
    responses((status = 200, body = UserVO), (status = 401, body = String)),
    security(("bearer" = []))
)]
pub async fn user_info(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
) -> Result<Json<Response<UserVO>>, AppError> {
    let vo = service::user::user_info(&state.conn, ctx.tenant_id(), ctx.user_id()).await?;
    Ok(Json(Response::new_success(vo)))
}

#[utoipa::path(
    post,
    path = "/api/user/login",
    request_body = UserLoginCmd,
    responses((status = 200, body = LoginRes), (status = 400, body = String))
)]
pub async fn user_login(
    State(state): State<AppState>,
    AppJson(data): AppJson<UserLoginCmd>,
) -> Result<Json<Response<LoginRes>>, AppError> {
    let user = UserRepo::find_user_by_username(&state.conn, &data.username)
        .await?
        .ok_or(AuthError::WrongCredentials)?;
    if !tracker_crypto::verify_password(&user.password, &data.password)? {
        return Err(AuthError::WrongCredentials.into());
    };
    let mut cla = jwt::Claims::new(state.jwt.expire_time, state.jwt.issuer.clone())?;
    let token = cla
        .with_name(user.name.clone())
        .with_username(user.username.clone())
        .with_tenant_id(user.tenant_id.clone())
        .with_user_id(user.id.clone())
        .generate_token(state.jwt.secret.as_bytes())?;
    tracing::info!("user {} logged in", user.username);
    Ok(Json(Response::new_success(LoginRes { token })))
}

/// Register a user in a tenant of its own.
#[utoipa::path(
    post,
    path = "/api/user/register",
    request_body = UserRegisterCmd,
    responses((status = 200, body = UserVO), (status = 400, body = String))
)]
pub async fn user_register(
    State(state): State<AppState>,
    AppJson(data): AppJson<UserRegisterCmd>,
) -> Result<Json<Response<UserVO>>, AppError> {
    let vo = service::user::register(&state.conn, data).await?;
    Ok(Json(Response::new_success(vo)))
}

/// Add a member to the caller's tenant.
#[utoipa::path(
    post,
    path = "/api/user",
    request_body = UserAddCmd,
    responses((status = 200, body = UserVO), (status = 400, body = String), (status = 401, body = String)),
    security(("bearer" = []))
)]
pub async fn user_add(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    AppJson(data): AppJson<UserAddCmd>,
) -> Result<Json<Response<UserVO>>, AppError> {
    let vo = service::user::add_member(&state.conn, ctx.tenant_id(), ctx.user_id(), data).await?;
    Ok(Json(Response::new_success(vo)))
}
