use crate::adapter::cmd::field::FieldSaveCmd;
use crate::adapter::http::middleware::auth::Context;
use crate::adapter::vo::field::FieldVO;
use crate::adapter::{Response, ResponseSuccess};
use crate::config::AppState;
use crate::error::{AppError, AppJson};
use crate::service;
use axum::extract::{Path, State};
use axum::{Extension, Json};

#[utoipa::path(
    post,
    path = "/api/field",
    request_body = FieldSaveCmd,
    responses((status = 200, description = "id of the saved field", body = String), (status = 400, body = String)),
    security(("bearer" = []))
)]
pub async fn save_field(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    AppJson(param): AppJson<FieldSaveCmd>,
) -> Result<Json<Response<String>>, AppError> {
    let id = service::field::save_field(&state.conn, ctx.tenant_id(), ctx.user_id(), param).await?;
    Ok(Json(Response::new_success(id)))
}

#[utoipa::path(
    get,
    path = "/api/field/list",
    responses((status = 200, body = [FieldVO])),
    security(("bearer" = []))
)]
pub async fn list_field(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
) -> Result<Json<Response<Vec<FieldVO>>>, AppError> {
    let list = service::field::list_fields(&state.conn, ctx.tenant_id()).await?;
    Ok(Json(Response::new_success(list)))
}

#[utoipa::path(
    delete,
    path = "/api/field/{id}",
    params(("id" = String, Path, description = "field id")),
    responses((status = 200), (status = 404, body = String)),
    security(("bearer" = []))
)]
pub async fn delete_field_by_id(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    Path(id): Path<String>,
) -> Result<Json<ResponseSuccess>, AppError> {
    service::field::delete_field(&state.conn, ctx.tenant_id(), &id).await?;
    Ok(Json(ResponseSuccess::default()))
}
