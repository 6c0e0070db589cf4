use crate::adapter::http::middleware::auth::Context;
use crate::adapter::vo::dashboard::DashboardSummaryVO;
use crate::adapter::Response;
use crate::config::AppState;
use crate::error::AppError;
use crate::service;
use axum::extract::State;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    responses((status = 200, body = DashboardSummaryVO)),
    security(("bearer" = []))
)]
pub async fn dashboard_summary(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
) -> Result<Json<Response<DashboardSummaryVO>>, AppError> {
    let vo = service::dashboard::load_summary(
        &state.conn,
        ctx.tenant_id(),
        service::maintenance::today(),
    )
    .await?;
    Ok(Json(Response::new_success(vo)))
}
