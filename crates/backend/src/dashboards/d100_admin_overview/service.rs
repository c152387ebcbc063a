use anyhow::Result;
use contracts::dashboards::d100_admin_overview::{AdminOverview, ModuleCompletion};
use contracts::system::users::UserStatus;

use crate::shared::data::mock_store::{self, SharedStore};

/// Rounded percentage, 0 when the denominator is 0
fn percent(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

/// Build the admin overview from the current store contents
pub fn get_admin_overview(store: &SharedStore) -> Result<AdminOverview> {
    let guard = mock_store::read(store)?;

    let total_users = guard.users.len();
    let active_users = guard
        .users
        .iter()
        .filter(|u| u.status == UserStatus::Active)
        .count();
    let progress_sum: u64 = guard.users.iter().map(|u| u.progress as u64).sum();

    let total_lessons: u32 = guard.modules.iter().map(|m| m.total_lessons).sum();
    let completed_lessons: u32 = guard.modules.iter().map(|m| m.completed_lessons).sum();

    let modules = guard
        .modules
        .iter()
        .map(|m| ModuleCompletion {
            module_id: m.id.clone(),
            title: m.title.clone(),
            completed_lessons: m.completed_lessons,
            total_lessons: m.total_lessons,
            completion_percent: m.completion_percent(),
        })
        .collect();

    Ok(AdminOverview {
        total_users,
        active_users,
        active_modules: guard.modules.len(),
        total_lessons,
        completed_lessons,
        completion_rate: percent(completed_lessons as u64, total_lessons as u64),
        average_progress: percent(progress_sum, total_users as u64 * 100),
        modules,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::mock_store::MockStore;
    use std::sync::RwLock;

    #[test]
    fn percent_is_zero_safe() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
    }

    #[test]
    fn empty_store_yields_zeroes() {
        let store = RwLock::new(MockStore::default());
        let overview = get_admin_overview(&store).unwrap();
        assert_eq!(overview.total_users, 0);
        assert_eq!(overview.completion_rate, 0);
        assert_eq!(overview.average_progress, 0);
        assert!(overview.modules.is_empty());
    }

    #[test]
    fn seeded_overview() {
        let store = RwLock::new(MockStore::seeded());
        let overview = get_admin_overview(&store).unwrap();
        assert_eq!(overview.total_users, 6);
        assert_eq!(overview.active_users, 5);
        assert_eq!(overview.active_modules, 11);
        assert_eq!(overview.completed_lessons, 4);
        assert_eq!(overview.total_lessons, 65);
        // 4 / 65 = 6.15%
        assert_eq!(overview.completion_rate, 6);
        // (65 + 45 + 30 + 80) / 6 = 36.67
        assert_eq!(overview.average_progress, 37);
        assert_eq!(overview.modules[0].completion_percent, 38);
    }
}
