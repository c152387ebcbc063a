use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use contracts::domain::a001_learning_module::LearningModule;
use contracts::domain::a002_leaderboard::LeaderboardEntry;
use contracts::system::users::User;
use once_cell::sync::OnceCell;

use super::seed;

/// Всё состояние приложения. Живёт только в памяти процесса.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    pub users: Vec<User>,
    pub modules: Vec<LearningModule>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl MockStore {
    pub fn seeded() -> Self {
        Self {
            users: seed::users(),
            modules: seed::modules(),
            leaderboard: seed::leaderboard(),
        }
    }
}

pub type SharedStore = RwLock<MockStore>;

static STORE: OnceCell<SharedStore> = OnceCell::new();

/// Seed the process-wide store. Called once from main.
pub fn initialize_store() -> anyhow::Result<()> {
    let store = MockStore::seeded();
    tracing::info!(
        "Mock store seeded: {} users, {} modules, {} leaderboard entries",
        store.users.len(),
        store.modules.len(),
        store.leaderboard.len()
    );
    STORE
        .set(RwLock::new(store))
        .map_err(|_| anyhow::anyhow!("Mock store is already initialized"))
}

/// Process-wide store (seeded lazily if `initialize_store` was skipped)
pub fn get_store() -> &'static SharedStore {
    STORE.get_or_init(|| RwLock::new(MockStore::seeded()))
}

pub fn read(store: &SharedStore) -> anyhow::Result<RwLockReadGuard<'_, MockStore>> {
    store
        .read()
        .map_err(|_| anyhow::anyhow!("Mock store lock is poisoned"))
}

pub fn write(store: &SharedStore) -> anyhow::Result<RwLockWriteGuard<'_, MockStore>> {
    store
        .write()
        .map_err(|_| anyhow::anyhow!("Mock store lock is poisoned"))
}
