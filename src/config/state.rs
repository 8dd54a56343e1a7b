// Application state module
// Settings plus the keyword store, shared across request handlers

use std::time::Instant;

use super::types::Settings;
use crate::store::KeywordStore;

/// Application state
pub struct AppState {
    pub settings: Settings,
    pub store: KeywordStore,
    started_at: Instant,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let store = KeywordStore::new(&settings.storage.config_file);
        Self {
            settings,
            store,
            started_at: Instant::now(),
        }
    }

    /// Seconds since the server started
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
