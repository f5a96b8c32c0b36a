use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::repository::WishRepository;

#[derive(Clone)]
pub struct AppState {
    pub wishes: Arc<dyn WishRepository>,
    pub config: Config,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(wishes: Arc<dyn WishRepository>, config: Config) -> Self {
        Self {
            wishes,
            config,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
