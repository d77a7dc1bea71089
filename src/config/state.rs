// Application state management with singleton pattern

use std::sync::Arc;
use once_cell::sync::Lazy;
use crate::config::environment::EnvironmentVariables;

// AppState singleton
#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
}

impl AppState {
    /// Creates a new AppState instance (private constructor)
    fn new() -> Self {
        let environment: EnvironmentVariables = EnvironmentVariables::instance().clone();

        Self {
            environment: Arc::new(environment),
        }
    }

    /// Returns the singleton instance
    pub fn instance() -> &'static Self {
        static INSTANCE: Lazy<AppState> = Lazy::new(AppState::new);
        &INSTANCE
    }
}
