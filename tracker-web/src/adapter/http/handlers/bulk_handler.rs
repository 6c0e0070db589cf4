use crate::adapter::cmd::bulk::{BulkDeleteCmd, BulkUpdateCmd};
use crate::adapter::http::middleware::auth::Context;
use crate::adapter::query::bulk::BulkListQuery;
use crate::adapter::vo::bulk::{BulkOperationVO, BulkResultVO, UndoResultVO};
use crate::adapter::{ResList, Response};
use crate::config::AppState;
use crate::error::{AppError, AppJson};
use crate::repo::sea::BulkRepo;
use crate::service;
use axum::extract::{Path, State};
use axum::{Extension, Json};

#[utoipa::path(
    post,
    path = "/api/asset/bulk/update",
    request_body = BulkUpdateCmd,
    responses(
        (status = 200, body = BulkResultVO),
        (status = 400, body = String),
        (status = 404, description = "a selected asset does not exist", body = String),
    ),
    security(("bearer" = []))
)]
pub async fn bulk_update(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    AppJson(param): AppJson<BulkUpdateCmd>,
) -> Result<Json<Response<BulkResultVO>>, AppError> {
    let res = service::bulk::bulk_update(&state.conn, ctx.tenant_id(), ctx.user_id(), param).await?;
    Ok(Json(Response::new_success(res)))
}

#[utoipa::path(
    post,
    path = "/api/asset/bulk/delete",
    request_body = BulkDeleteCmd,
    responses(
        (status = 200, body = BulkResultVO),
        (status = 400, body = String),
        (status = 404, description = "a selected asset does not exist", body = String),
    ),
    security(("bearer" = []))
)]
pub async fn bulk_delete(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    AppJson(param): AppJson<BulkDeleteCmd>,
) -> Result<Json<Response<BulkResultVO>>, AppError> {
    let res = service::bulk::bulk_delete(&state.conn, ctx.tenant_id(), ctx.user_id(), param).await?;
    Ok(Json(Response::new_success(res)))
}

#[utoipa::path(
    post,
    path = "/api/asset/bulk/undo/{id}",
    params(("id" = String, Path, description = "bulk operation id")),
    responses(
        (status = 200, body = UndoResultVO),
        (status = 400, description = "already undone", body = String),
        (status = 404, body = String),
    ),
    security(("bearer" = []))
)]
pub async fn bulk_undo(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    Path(id): Path<String>,
) -> Result<Json<Response<UndoResultVO>>, AppError> {
    let res = service::bulk::undo(&state.conn, ctx.tenant_id(), ctx.user_id(), &id).await?;
    Ok(Json(Response::new_success(res)))
}

#[utoipa::path(
    post,
    path = "/api/asset/bulk/list",
    request_body = BulkListQuery,
    responses((status = 200, body = [BulkOperationVO])),
    security(("bearer" = []))
)]
pub async fn list_bulk_operation(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    Json(query): Json<BulkListQuery>,
) -> Result<Json<Response<ResList<BulkOperationVO>>>, AppError> {
    let (total, list) =
        BulkRepo::find_operation_by(&state.conn, ctx.tenant_id(), query.page_query.init()).await?;
    let list = list
        .into_iter()
        .map(|d| BulkOperationVO {
            asset_ids: serde_json::from_value(d.asset_ids).unwrap_or_default(),
            undone: d.undone != 0,
            id: d.id,
            action: d.action,
            field: d.field,
            value: d.value,
            created_by: d.created_by,
            updated_by: d.updated_by,
            created_at: d.created_at,
            updated_at: d.updated_at,
        })
        .collect();
    Ok(Json(Response::new_success(ResList::new(total, list))))
}
