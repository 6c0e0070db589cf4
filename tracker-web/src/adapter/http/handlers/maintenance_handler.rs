use crate::adapter::cmd::maintenance::{HistoryRecordCmd, ScheduleSaveCmd};
use crate::adapter::http::middleware::auth::Context;
use crate::adapter::query::maintenance::{DueQuery, HistoryListQuery, ScheduleListQuery};
use crate::adapter::vo::maintenance::{DueItemVO, HistoryVO, ScheduleVO};
use crate::adapter::{ResList, Response, ResponseSuccess};
use crate::config::AppState;
use crate::error::{AppError, AppJson};
use crate::repo::model::{maintenance_history, maintenance_schedule};
use crate::repo::sea::MaintenanceRepo;
use crate::service;
use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use sea_orm::{ColumnTrait, Condition};

#[utoipa::path(
    post,
    path = "/api/maintenance/schedule",
    request_body = ScheduleSaveCmd,
    responses((status = 200, description = "id of the saved schedule", body = String), (status = 404, body = String)),
    security(("bearer" = []))
)]
pub async fn save_schedule(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    AppJson(param): AppJson<ScheduleSaveCmd>,
) -> Result<Json<Response<String>>, AppError> {
    let id =
        service::maintenance::save_schedule(&state.conn, ctx.tenant_id(), ctx.user_id(), param)
            .await?;
    Ok(Json(Response::new_success(id)))
}

#[utoipa::path(
    post,
    path = "/api/maintenance/schedule/list",
    request_body = ScheduleListQuery,
    responses((status = 200, body = [ScheduleVO])),
    security(("bearer" = []))
)]
pub async fn list_schedule(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    Json(query): Json<ScheduleListQuery>,
) -> Result<Json<Response<ResList<ScheduleVO>>>, AppError> {
    let mut search = Condition::all();
    if let Some(asset_id) = query.asset_id.filter(|d| !d.is_empty()) {
        search = search.add(maintenance_schedule::Column::AssetId.eq(asset_id));
    }
    let (total, list) = MaintenanceRepo::find_schedule_by(
        &state.conn,
        ctx.tenant_id(),
        query.page_query.init(),
        search,
    )
    .await?;
    Ok(Json(Response::new_success(ResList::copied(total, &list)?)))
}

#[utoipa::path(
    delete,
    path = "/api/maintenance/schedule/{id}",
    params(("id" = String, Path, description = "schedule id")),
    responses((status = 200), (status = 404, body = String)),
    security(("bearer" = []))
)]
pub async fn delete_schedule_by_id(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    Path(id): Path<String>,
) -> Result<Json<ResponseSuccess>, AppError> {
    service::maintenance::delete_schedule(&state.conn, ctx.tenant_id(), &id).await?;
    Ok(Json(ResponseSuccess::default()))
}

#[utoipa::path(
    post,
    path = "/api/maintenance/history",
    request_body = HistoryRecordCmd,
    responses((status = 200, description = "id of the history event", body = String), (status = 404, body = String)),
    security(("bearer" = []))
)]
pub async fn record_history(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    AppJson(param): AppJson<HistoryRecordCmd>,
) -> Result<Json<Response<String>>, AppError> {
    let id =
        service::maintenance::record_history(&state.conn, ctx.tenant_id(), ctx.user_id(), param)
            .await?;
    Ok(Json(Response::new_success(id)))
}

#[utoipa::path(
    post,
    path = "/api/maintenance/history/list",
    request_body = HistoryListQuery,
    responses((status = 200, body = [HistoryVO])),
    security(("bearer" = []))
)]
pub async fn list_history(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    Json(query): Json<HistoryListQuery>,
) -> Result<Json<Response<ResList<HistoryVO>>>, AppError> {
    let mut search = Condition::all();
    if let Some(asset_id) = query.asset_id.filter(|d| !d.is_empty()) {
        search = search.add(maintenance_history::Column::AssetId.eq(asset_id));
    }
    if let Some(schedule_id) = query.schedule_id.filter(|d| !d.is_empty()) {
        search = search.add(maintenance_history::Column::ScheduleId.eq(schedule_id));
    }
    let (total, list) = MaintenanceRepo::find_history_by(
        &state.conn,
        ctx.tenant_id(),
        query.page_query.init(),
        search,
    )
    .await?;
    Ok(Json(Response::new_success(ResList::copied(total, &list)?)))
}

#[utoipa::path(
    get,
    path = "/api/maintenance/due",
    params(DueQuery),
    responses((status = 200, body = [DueItemVO])),
    security(("bearer" = []))
)]
pub async fn due_maintenance(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    Query(query): Query<DueQuery>,
) -> Result<Json<Response<Vec<DueItemVO>>>, AppError> {
    let list = service::maintenance::due_list(
        &state.conn,
        ctx.tenant_id(),
        service::maintenance::today(),
        query.days,
    )
    .await?;
    Ok(Json(Response::new_success(list)))
}
