//! OpenAPI document of the REST surface

use crate::adapter::cmd::asset::{AssetSaveCmd, AssetScanCmd};
use crate::adapter::cmd::bulk::{BulkDeleteCmd, BulkUpdateCmd};
use crate::adapter::cmd::field::FieldSaveCmd;
use crate::adapter::cmd::maintenance::{HistoryRecordCmd, ScheduleSaveCmd};
use crate::adapter::cmd::user::{UserAddCmd, UserLoginCmd, UserRegisterCmd};
use crate::adapter::http::handlers;
use crate::adapter::query::asset::AssetListQuery;
use crate::adapter::query::bulk::BulkListQuery;
use crate::adapter::query::maintenance::{HistoryListQuery, ScheduleListQuery};
use crate::adapter::vo::asset::{AssetListItemVO, AssetQrVO, AssetVO};
use crate::adapter::vo::bulk::{BulkOperationVO, BulkResultVO, UndoResultVO};
use crate::adapter::vo::dashboard::{CountItem, DashboardSummaryVO};
use crate::adapter::vo::field::FieldVO;
use crate::adapter::vo::maintenance::{DueItemVO, HistoryVO, ScheduleVO};
use crate::adapter::vo::user::{LoginRes, UserVO};
use crate::adapter::vo::BaseKV;
use crate::common::{AssetStatus, BulkAction, BulkField, DueState, FieldType, PageQuery};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    info(title = "asset tracker", description = "Asset tracking REST api"),
    paths(
        // user
        handlers::user_register,
        handlers::user_login,
        handlers::user_info,
        handlers::user_add,
        // asset
        handlers::save_asset,
        handlers::get_asset_by_id,
        handlers::list_asset,
        handlers::delete_asset_by_id,
        handlers::asset_select_kv,
        handlers::asset_qr,
        handlers::scan_asset,
        // bulk
        handlers::bulk_update,
        handlers::bulk_delete,
        handlers::bulk_undo,
        handlers::list_bulk_operation,
        // custom field
        handlers::save_field,
        handlers::list_field,
        handlers::delete_field_by_id,
        // maintenance
        handlers::save_schedule,
        handlers::list_schedule,
        handlers::delete_schedule_by_id,
        handlers::record_history,
        handlers::list_history,
        handlers::due_maintenance,
        // dashboard
        handlers::dashboard_summary,
    ),
    components(schemas(
        AssetStatus, FieldType, BulkAction, BulkField, DueState, PageQuery,
        UserLoginCmd, UserRegisterCmd, UserAddCmd, UserVO, LoginRes,
        AssetSaveCmd, AssetScanCmd, AssetListQuery, AssetVO, AssetListItemVO, AssetQrVO, BaseKV,
        BulkUpdateCmd, BulkDeleteCmd, BulkListQuery, BulkResultVO, UndoResultVO, BulkOperationVO,
        FieldSaveCmd, FieldVO,
        ScheduleSaveCmd, ScheduleListQuery, ScheduleVO, HistoryRecordCmd, HistoryListQuery, HistoryVO, DueItemVO,
        DashboardSummaryVO, CountItem,
    )),
    modifiers(&BearerAuth),
    tags((name = "asset tracker", description = "assets, custom fields, maintenance and bulk operations"))
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
