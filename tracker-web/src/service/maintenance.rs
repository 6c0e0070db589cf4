//! maintenance schedules, history and due dates

use crate::adapter::cmd::maintenance::{HistoryRecordCmd, ScheduleSaveCmd};
use crate::adapter::vo::maintenance::DueItemVO;
use crate::common::DueState;
use crate::error::AppError;
use crate::repo::model::{maintenance_history, maintenance_schedule};
use crate::repo::sea::{AssetRepo, MaintenanceRepo, SeaRepo};
use chrono::{Days, NaiveDate};
use sea_orm::ActiveValue::Set;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

pub const DEFAULT_DUE_WINDOW: i64 = 7;
const MAX_DUE_WINDOW: i64 = 3650;

/// Next due date after an event on `performed_at`. Never moves backwards, so
/// back-filled events keep the current date.
pub fn advance_next_due(current: NaiveDate, performed_at: NaiveDate, interval_days: i32) -> NaiveDate {
    let days = Days::new(u64::try_from(interval_days.max(1)).unwrap_or(1));
    match performed_at.checked_add_days(days) {
        Some(next) if next > current => next,
        _ => current,
    }
}

/// Overdue before `today`, upcoming within `window` days from `today`.
pub fn classify_due(next_due: NaiveDate, today: NaiveDate, window: i64) -> Option<DueState> {
    if next_due < today {
        return Some(DueState::Overdue);
    }
    let until = today.checked_add_days(Days::new(window.max(0) as u64))?;
    (next_due <= until).then_some(DueState::Upcoming)
}

pub fn today() -> NaiveDate {
    crate::repo::model::now().date_naive()
}

pub async fn save_schedule<C: ConnectionTrait>(
    db: &C,
    tenant_id: &str,
    user_id: &str,
    cmd: ScheduleSaveCmd,
) -> Result<String, AppError> {
    AssetRepo::get_asset_by_id(db, tenant_id, &cmd.asset_id).await?;
    match cmd.id.filter(|d| !d.is_empty()) {
        None => {
            let mut model = maintenance_schedule::Model::new();
            model.tenant_id = tenant_id.to_string();
            model.asset_id = cmd.asset_id;
            model.maintenance_type = cmd.maintenance_type.trim().to_string();
            model.interval_days = cmd.interval_days;
            model.next_due_date = cmd.next_due_date;
            model.remark = cmd.remark.unwrap_or_default();
            model.created_by = user_id.to_string();
            model.updated_by = user_id.to_string();
            Ok(MaintenanceRepo::insert_schedule_one(db, model).await?)
        }
        Some(id) => {
            let mut active_model = maintenance_schedule::ActiveModel {
                asset_id: Set(cmd.asset_id),
                maintenance_type: Set(cmd.maintenance_type.trim().to_string()),
                interval_days: Set(cmd.interval_days),
                next_due_date: Set(cmd.next_due_date),
                updated_by: Set(user_id.to_string()),
                ..Default::default()
            };
            if let Some(remark) = cmd.remark {
                active_model.remark = Set(remark);
            }
            MaintenanceRepo::update_schedule_by_id(db, tenant_id, &id, active_model).await?;
            Ok(id)
        }
    }
}

pub async fn delete_schedule<C: ConnectionTrait>(
    db: &C,
    tenant_id: &str,
    id: &str,
) -> Result<(), AppError> {
    let n = SeaRepo::delete_by_id::<maintenance_schedule::Entity, _>(db, tenant_id, id).await?;
    if n == 0 {
        return Err(AppError::not_found("schedule", id));
    }
    Ok(())
}

/// Store the event and move the schedule's next due date. The schedule's
/// asset must be live.
pub async fn record_history(
    db: &DatabaseConnection,
    tenant_id: &str,
    user_id: &str,
    cmd: HistoryRecordCmd,
) -> Result<String, AppError> {
    let txn = db.begin().await?;
    let schedule = MaintenanceRepo::get_schedule_by_id(&txn, tenant_id, &cmd.schedule_id).await?;
    AssetRepo::get_asset_by_id(&txn, tenant_id, &schedule.asset_id).await?;
    let mut event = maintenance_history::Model::new();
    event.tenant_id = tenant_id.to_string();
    event.schedule_id = schedule.id.clone();
    event.asset_id = schedule.asset_id.clone();
    event.performed_at = cmd.performed_at;
    event.notes = cmd.notes.unwrap_or_default();
    event.performed_by = user_id.to_string();
    let id = MaintenanceRepo::insert_history_one(&txn, event).await?;

    let next = advance_next_due(schedule.next_due_date, cmd.performed_at, schedule.interval_days);
    if next != schedule.next_due_date {
        MaintenanceRepo::set_next_due(&txn, tenant_id, &schedule.id, next).await?;
    }
    txn.commit().await?;
    tracing::info!(
        "maintenance {} on schedule {} recorded, next due {}",
        id,
        schedule.id,
        next
    );
    Ok(id)
}

/// Overdue and upcoming schedules of live assets, earliest first.
pub async fn due_list<C: ConnectionTrait>(
    db: &C,
    tenant_id: &str,
    today: NaiveDate,
    window: Option<i64>,
) -> Result<Vec<DueItemVO>, AppError> {
    let window = window.unwrap_or(DEFAULT_DUE_WINDOW).clamp(0, MAX_DUE_WINDOW);
    let until = today
        .checked_add_days(Days::new(window as u64))
        .unwrap_or(NaiveDate::MAX);
    let schedules = MaintenanceRepo::list_due_until(db, tenant_id, until).await?;
    let asset_ids: Vec<String> = schedules.iter().map(|d| d.asset_id.clone()).collect();
    let assets = AssetRepo::find_live_by_ids(db, tenant_id, &asset_ids).await?;
    Ok(schedules
        .into_iter()
        .filter_map(|s| {
            let asset = assets.iter().find(|a| a.id == s.asset_id)?;
            let state = classify_due(s.next_due_date, today, window)?;
            Some(DueItemVO {
                schedule_id: s.id,
                asset_id: s.asset_id,
                asset_name: asset.name.clone(),
                maintenance_type: s.maintenance_type,
                next_due_date: s.next_due_date,
                state,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::cmd::bulk::BulkDeleteCmd;
    use crate::common::PageQuery;
    use crate::service::bulk;
    use crate::repo::model::asset;
    use crate::repo::sea::tests::memory_db;
    use sea_orm::{ColumnTrait, Condition};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_advance_next_due() {
        assert_eq!(
            advance_next_due(date("2026-01-10"), date("2026-01-12"), 30),
            date("2026-02-11")
        );
        // back-filled event does not move the date back
        assert_eq!(
            advance_next_due(date("2026-06-01"), date("2026-01-01"), 30),
            date("2026-06-01")
        );
    }

    #[test]
    fn test_classify_due() {
        let today = date("2026-05-10");
        assert_eq!(classify_due(date("2026-05-09"), today, 7), Some(DueState::Overdue));
        assert_eq!(classify_due(date("2026-05-10"), today, 7), Some(DueState::Upcoming));
        assert_eq!(classify_due(date("2026-05-17"), today, 7), Some(DueState::Upcoming));
        assert_eq!(classify_due(date("2026-05-18"), today, 7), None);
        assert_eq!(classify_due(date("2026-05-10"), today, 0), Some(DueState::Upcoming));
    }

    async fn seed_asset(db: &DatabaseConnection, tenant: &str, name: &str) -> String {
        let mut m = asset::Model::new();
        m.tenant_id = tenant.to_string();
        m.name = name.to_string();
        AssetRepo::insert_asset_one(db, m).await.unwrap()
    }

    fn schedule_cmd(asset_id: &str, due: &str) -> ScheduleSaveCmd {
        ScheduleSaveCmd {
            id: None,
            asset_id: asset_id.to_string(),
            maintenance_type: "inspection".to_string(),
            interval_days: 30,
            next_due_date: date(due),
            remark: None,
        }
    }

    #[tokio::test]
    async fn test_schedule_needs_live_asset() {
        let db = memory_db().await;
        let asset_id = seed_asset(&db, "t1", "forklift").await;
        assert!(matches!(
            save_schedule(&db, "t2", "u1", schedule_cmd(&asset_id, "2026-01-01")).await,
            Err(AppError::NotFound(_))
        ));
        let id = save_schedule(&db, "t1", "u1", schedule_cmd(&asset_id, "2026-01-01"))
            .await
            .unwrap();
        let mut update = schedule_cmd(&asset_id, "2026-02-01");
        update.id = Some(id.clone());
        update.interval_days = 90;
        save_schedule(&db, "t1", "u1", update).await.unwrap();
        let row = MaintenanceRepo::get_schedule_by_id(&db, "t1", &id).await.unwrap();
        assert_eq!(row.interval_days, 90);
        assert_eq!(row.next_due_date, date("2026-02-01"));

        delete_schedule(&db, "t1", &id).await.unwrap();
        assert!(delete_schedule(&db, "t1", &id).await.is_err());
    }

    #[tokio::test]
    async fn test_record_history_advances_due() {
        let db = memory_db().await;
        let asset_id = seed_asset(&db, "t1", "forklift").await;
        let sid = save_schedule(&db, "t1", "u1", schedule_cmd(&asset_id, "2026-01-10"))
            .await
            .unwrap();
        record_history(
            &db,
            "t1",
            "u7",
            HistoryRecordCmd {
                schedule_id: sid.clone(),
                performed_at: date("2026-01-12"),
                notes: Some("oil changed".to_string()),
            },
        )
        .await
        .unwrap();
        let row = MaintenanceRepo::get_schedule_by_id(&db, "t1", &sid).await.unwrap();
        assert_eq!(row.next_due_date, date("2026-02-11"));

        let (total, list) = MaintenanceRepo::find_history_by(
            &db,
            "t1",
            PageQuery::default().init(),
            Condition::all().add(maintenance_history::Column::ScheduleId.eq(sid.as_str())),
        )
        .await
        .unwrap();
        assert_eq!(total, 1);
        assert_eq!(list[0].asset_id, asset_id);
        assert_eq!(list[0].performed_by, "u7");
    }

    #[tokio::test]
    async fn test_bulk_deleted_asset_hides_schedules() {
        let db = memory_db().await;
        let asset_id = seed_asset(&db, "t1", "forklift").await;
        let sid = save_schedule(&db, "t1", "u1", schedule_cmd(&asset_id, "2026-01-10"))
            .await
            .unwrap();
        let cmd = BulkDeleteCmd {
            asset_ids: vec![asset_id.clone()],
        };
        let res = bulk::bulk_delete(&db, "t1", "u1", cmd).await.unwrap();

        let (total, _) =
            MaintenanceRepo::find_schedule_by(&db, "t1", PageQuery::default().init(), Condition::all())
                .await
                .unwrap();
        assert_eq!(total, 0);
        let event = HistoryRecordCmd {
            schedule_id: sid.clone(),
            performed_at: date("2026-01-12"),
            notes: None,
        };
        assert!(matches!(
            record_history(&db, "t1", "u1", event.clone()).await,
            Err(AppError::NotFound(_))
        ));
        let row = MaintenanceRepo::get_schedule_by_id(&db, "t1", &sid).await.unwrap();
        assert_eq!(row.next_due_date, date("2026-01-10"));

        bulk::undo(&db, "t1", "u1", &res.operation_id).await.unwrap();
        let (total, _) =
            MaintenanceRepo::find_schedule_by(&db, "t1", PageQuery::default().init(), Condition::all())
                .await
                .unwrap();
        assert_eq!(total, 1);
        record_history(&db, "t1", "u1", event).await.unwrap();
    }

    #[tokio::test]
    async fn test_due_list() {
        let db = memory_db().await;
        let a = seed_asset(&db, "t1", "forklift").await;
        let b = seed_asset(&db, "t1", "printer").await;
        save_schedule(&db, "t1", "u1", schedule_cmd(&a, "2026-05-01")).await.unwrap();
        save_schedule(&db, "t1", "u1", schedule_cmd(&b, "2026-05-12")).await.unwrap();
        save_schedule(&db, "t1", "u1", schedule_cmd(&b, "2026-07-01")).await.unwrap();

        let today = date("2026-05-10");
        let due = due_list(&db, "t1", today, None).await.unwrap();
        assert_eq!(due.len(), 2);
        assert_eq!(due[0].asset_name, "forklift");
        assert_eq!(due[0].state, DueState::Overdue);
        assert_eq!(due[1].state, DueState::Upcoming);

        assert!(due_list(&db, "t2", today, None).await.unwrap().is_empty());
        assert_eq!(due_list(&db, "t1", today, Some(60)).await.unwrap().len(), 3);
    }
}
