// Application state (AppState)

use crate::core::config::Config;
use crate::stores::user_store::UserStore;
use std::sync::Arc;

/// Shared application state
///
/// Contains the components accessed by request handlers. The user store is
/// seeded once at startup and never mutated, so handlers only need shared
/// references.
#[derive(Clone)]
pub struct AppState {
    /// Read-only store of user records
    pub user_store: Arc<UserStore>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            user_store: Arc::new(UserStore::seeded()),
            config: Arc::new(config),
        }
    }
}
