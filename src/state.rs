use std::sync::Arc;

use crate::{config::RelayConfig, gemini::TextGenerator};

/// Shared, read-only dependencies handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(config: RelayConfig, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            config: Arc::new(config),
            generator,
        }
    }
}
