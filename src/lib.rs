pub mod cards;
pub mod layout;
pub mod logging;
pub mod preferences;
pub mod settings;
pub mod storage;
pub mod theme;

pub use cards::{CardId, DashboardCard, DASHBOARD_CARDS};
pub use preferences::{CardPreferences, CardVisibility};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use theme::{Theme, ThemePreference};
