use std::sync::Arc;

use crate::{
    conf::settings,
    pkg::internal::display::{ResultLog, Silent, TracingLog},
};

#[derive(Clone)]
pub struct AppState {
    pub result_log: Arc<dyn ResultLog>,
}

impl AppState {
    pub fn new() -> AppState {
        if settings.log_results {
            AppState::with_log(TracingLog)
        } else {
            AppState::with_log(Silent)
        }
    }

    pub fn with_log(log: impl ResultLog + 'static) -> AppState {
        AppState {
            result_log: Arc::new(log),
        }
    }
}
