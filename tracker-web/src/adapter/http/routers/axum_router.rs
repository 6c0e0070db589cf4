use crate::adapter::http::handlers::*;
use crate::adapter::http::middleware::auth::jwt_auth_middle;
use crate::adapter::http::middleware::request_id::request_id;
use crate::adapter::http::middleware::server_time::ServerTimeLayer;
use crate::config::AppState;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Public routes plus the `/api` routes that need a bearer token.
pub async fn routes(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api/openapi.json", get(openapi_json))
        .route("/api/user/register", post(user_register))
        .route("/api/user/login", post(user_login));

    let protected = Router::new()
        .route("/api/user", post(user_add))
        .route("/api/user/info", get(user_info))
        // asset
        .route("/api/asset", post(save_asset))
        .route("/api/asset/list", post(list_asset))
        .route("/api/asset/kv", get(asset_select_kv))
        .route("/api/asset/scan", post(scan_asset))
        .route(
            "/api/asset/:id",
            get(get_asset_by_id).delete(delete_asset_by_id),
        )
        .route("/api/asset/:id/qr", get(asset_qr))
        // bulk
        .route("/api/asset/bulk/update", post(bulk_update))
        .route("/api/asset/bulk/delete", post(bulk_delete))
        .route("/api/asset/bulk/undo/:id", post(bulk_undo))
        .route("/api/asset/bulk/list", post(list_bulk_operation))
        // custom field
        .route("/api/field", post(save_field))
        .route("/api/field/list", get(list_field))
        .route("/api/field/:id", delete(delete_field_by_id))
        // maintenance
        .route("/api/maintenance/schedule", post(save_schedule))
        .route("/api/maintenance/schedule/list", post(list_schedule))
        .route(
            "/api/maintenance/schedule/:id",
            delete(delete_schedule_by_id),
        )
        .route("/api/maintenance/history", post(record_history))
        .route("/api/maintenance/history/list", post(list_history))
        .route("/api/maintenance/due", get(due_maintenance))
        // dashboard
        .route("/api/dashboard/summary", get(dashboard_summary))
        .route_layer(from_fn_with_state(state.clone(), jwt_auth_middle));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(from_fn(request_id))
        .layer(ServerTimeLayer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
