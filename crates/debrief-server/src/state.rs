use debrief::analyst::Analyst;
use debrief::providers::base::Provider;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub analyst: Arc<Analyst>,
}

impl AppState {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self {
            analyst: Arc::new(Analyst::new(provider)),
        }
    }
}
