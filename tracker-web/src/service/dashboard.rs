//! dashboard counters

use crate::adapter::vo::dashboard::{CountItem, DashboardSummaryVO};
use crate::common::{AssetStatus, DueState};
use crate::error::AppError;
use crate::repo::model::{asset, maintenance_schedule};
use crate::repo::sea::{AssetRepo, MaintenanceRepo};
use crate::service::maintenance::{classify_due, DEFAULT_DUE_WINDOW};
use chrono::{Days, NaiveDate};
use sea_orm::ConnectionTrait;
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// Counters over live assets. Schedules of assets not in `assets` are ignored.
pub fn summarize(
    assets: &[asset::Model],
    schedules: &[maintenance_schedule::Model],
    today: NaiveDate,
) -> DashboardSummaryVO {
    let by_status = AssetStatus::iter()
        .map(|status| CountItem {
            key: status.as_ref().to_string(),
            count: assets.iter().filter(|a| a.status == status.as_ref()).count() as u64,
        })
        .collect();

    let mut categories: HashMap<&str, u64> = HashMap::new();
    for a in assets {
        *categories.entry(a.category.as_str()).or_default() += 1;
    }
    let mut by_category: Vec<CountItem> = categories
        .into_iter()
        .map(|(key, count)| CountItem {
            key: key.to_string(),
            count,
        })
        .collect();
    by_category.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));

    let (mut overdue, mut upcoming) = (0, 0);
    for s in schedules {
        if !assets.iter().any(|a| a.id == s.asset_id) {
            continue;
        }
        match classify_due(s.next_due_date, today, DEFAULT_DUE_WINDOW) {
            Some(DueState::Overdue) => overdue += 1,
            Some(DueState::Upcoming) => upcoming += 1,
            None => {}
        }
    }

    DashboardSummaryVO {
        total_assets: assets.len() as u64,
        total_value: assets.iter().map(|a| a.value).sum(),
        by_status,
        by_category,
        overdue_maintenance: overdue,
        upcoming_maintenance: upcoming,
    }
}

pub async fn load_summary<C: ConnectionTrait>(
    db: &C,
    tenant_id: &str,
    today: NaiveDate,
) -> Result<DashboardSummaryVO, AppError> {
    let assets = AssetRepo::list_live(db, tenant_id).await?;
    let until = today
        .checked_add_days(Days::new(DEFAULT_DUE_WINDOW as u64))
        .unwrap_or(NaiveDate::MAX);
    let schedules = MaintenanceRepo::list_due_until(db, tenant_id, until).await?;
    Ok(summarize(&assets, &schedules, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn asset(id: &str, category: &str, status: AssetStatus, value: f64) -> asset::Model {
        let mut m = asset::Model::new();
        m.id = id.to_string();
        m.category = category.to_string();
        m.status = status.as_ref().to_string();
        m.value = value;
        m
    }

    fn schedule(asset_id: &str, due: &str) -> maintenance_schedule::Model {
        let mut m = maintenance_schedule::Model::new();
        m.asset_id = asset_id.to_string();
        m.next_due_date = date(due);
        m
    }

    #[test]
    fn test_summarize() {
        let assets = vec![
            asset("a", "laptop", AssetStatus::Active, 1000.0),
            asset("b", "laptop", AssetStatus::Maintenance, 500.0),
            asset("c", "desk", AssetStatus::Active, 250.5),
            asset("d", "chair", AssetStatus::Lost, 0.0),
        ];
        let schedules = vec![
            schedule("a", "2026-05-01"),
            schedule("b", "2026-05-12"),
            schedule("gone", "2026-05-01"),
        ];
        let vo = summarize(&assets, &schedules, date("2026-05-10"));
        assert_eq!(vo.total_assets, 4);
        assert_eq!(vo.total_value, 1750.5);
        let status: Vec<(String, u64)> = vo
            .by_status
            .iter()
            .map(|d| (d.key.clone(), d.count))
            .collect();
        assert_eq!(
            status,
            vec![
                ("active".to_string(), 2),
                ("maintenance".to_string(), 1),
                ("retired".to_string(), 0),
                ("lost".to_string(), 1),
                ("damaged".to_string(), 0),
            ]
        );
        let category: Vec<&str> = vo.by_category.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(category, vec!["laptop", "chair", "desk"]);
        assert_eq!(vo.overdue_maintenance, 1);
        assert_eq!(vo.upcoming_maintenance, 1);
    }

    #[test]
    fn test_summarize_empty() {
        let vo = summarize(&[], &[], date("2026-05-10"));
        assert_eq!(vo.total_assets, 0);
        assert_eq!(vo.by_status.len(), 5);
        assert!(vo.by_category.is_empty());
    }
}
