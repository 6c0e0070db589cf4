use crate::adapter::cmd::asset::{AssetSaveCmd, AssetScanCmd};
use crate::adapter::http::middleware::auth::Context;
use crate::adapter::query::asset::AssetListQuery;
use crate::adapter::vo::asset::{AssetListItemVO, AssetQrVO, AssetVO};
use crate::adapter::vo::BaseKV;
use crate::adapter::{ResList, Response, ResponseSuccess};
use crate::config::AppState;
use crate::error::{AppError, AppJson};
use crate::repo::model::asset;
use crate::repo::sea::{like_contains, AssetRepo};
use crate::service;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use sea_orm::{ColumnTrait, Condition};

#[utoipa::path(
    post,
    path = "/api/asset",
    request_body = AssetSaveCmd,
    responses(
        (status = 200, description = "id of the saved asset", body = String),
        (status = 400, body = String),
        (status = 404, body = String),
    ),
    security(("bearer" = []))
)]
pub async fn save_asset(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    AppJson(param): AppJson<AssetSaveCmd>,
) -> Result<Json<Response<String>>, AppError> {
    let id = service::asset::save_asset(&state.conn, ctx.tenant_id(), ctx.user_id(), param).await?;
    Ok(Json(Response::new_success(id)))
}

#[utoipa::path(
    get,
    path = "/api/asset/{id}",
    params(("id" = String, Path, description = "asset id")),
    responses((status = 200, body = AssetVO), (status = 404, body = String)),
    security(("bearer" = []))
)]
pub async fn get_asset_by_id(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    Path(id): Path<String>,
) -> Result<Json<Response<AssetVO>>, AppError> {
    let vo = service::asset::get_asset(&state.conn, ctx.tenant_id(), &id).await?;
    Ok(Json(Response::new_success(vo)))
}

#[utoipa::path(
    post,
    path = "/api/asset/list",
    request_body = AssetListQuery,
    responses((status = 200, body = [AssetListItemVO])),
    security(("bearer" = []))
)]
pub async fn list_asset(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    Json(query): Json<AssetListQuery>,
) -> Result<Json<Response<ResList<AssetListItemVO>>>, AppError> {
    let mut search = Condition::all();
    if let Some(name) = query.name.filter(|d| !d.is_empty()) {
        search = search.add(asset::Column::Name.like(like_contains(&name)));
    }
    if let Some(category) = query.category.filter(|d| !d.is_empty()) {
        search = search.add(asset::Column::Category.eq(category));
    }
    if let Some(status) = query.status {
        search = search.add(asset::Column::Status.eq(status.as_ref()));
    }
    if let Some(location) = query.location.filter(|d| !d.is_empty()) {
        search = search.add(asset::Column::Location.like(like_contains(&location)));
    }
    if let Some(assigned_to) = query.assigned_to.filter(|d| !d.is_empty()) {
        search = search.add(asset::Column::AssignedTo.eq(assigned_to));
    }
    if let Some(tag) = query.tag.filter(|d| !d.trim().is_empty()) {
        // tags are stored as a compact json array of strings
        let quoted = serde_json::Value::String(tag.trim().to_string()).to_string();
        search = search.add(asset::Column::Tags.like(like_contains(&quoted)));
    }

    let (total, list) = AssetRepo::find_asset_by(
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
    path = "/api/asset/{id}",
    params(("id" = String, Path, description = "asset id")),
    responses((status = 200), (status = 404, body = String)),
    security(("bearer" = []))
)]
pub async fn delete_asset_by_id(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    Path(id): Path<String>,
) -> Result<Json<ResponseSuccess>, AppError> {
    service::asset::delete_asset(&state.conn, ctx.tenant_id(), &id).await?;
    Ok(Json(ResponseSuccess::default()))
}

#[utoipa::path(
    get,
    path = "/api/asset/kv",
    responses((status = 200, body = [BaseKV])),
    security(("bearer" = []))
)]
pub async fn asset_select_kv(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
) -> Result<Json<Response<Vec<BaseKV>>>, AppError> {
    let kv = AssetRepo::asset_select_kv(&state.conn, ctx.tenant_id())
        .await?
        .into_iter()
        .map(|d| BaseKV {
            key: d.id,
            value: d.name,
        })
        .collect();
    Ok(Json(Response::new_success(kv)))
}

#[utoipa::path(
    get,
    path = "/api/asset/{id}/qr",
    params(("id" = String, Path, description = "asset id")),
    responses((status = 200, body = AssetQrVO), (status = 404, body = String)),
    security(("bearer" = []))
)]
pub async fn asset_qr(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    Path(id): Path<String>,
) -> Result<Json<Response<AssetQrVO>>, AppError> {
    let model = AssetRepo::get_asset_by_id(&state.conn, ctx.tenant_id(), &id).await?;
    Ok(Json(Response::new_success(AssetQrVO {
        payload: service::qr::encode_payload(&model.tenant_id, &model.id),
        asset_id: model.id,
    })))
}

#[utoipa::path(
    post,
    path = "/api/asset/scan",
    request_body = AssetScanCmd,
    responses(
        (status = 200, body = AssetVO),
        (status = 400, body = String),
        (status = 404, body = String),
    ),
    security(("bearer" = []))
)]
pub async fn scan_asset(
    State(state): State<AppState>,
    Extension(ctx): Extension<Context>,
    AppJson(param): AppJson<AssetScanCmd>,
) -> Result<Json<Response<AssetVO>>, AppError> {
    let id = service::qr::decode_payload(ctx.tenant_id(), &param.payload)?;
    let vo = service::asset::get_asset(&state.conn, ctx.tenant_id(), &id).await?;
    Ok(Json(Response::new_success(vo)))
}
