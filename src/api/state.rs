//! Application state for the labour report API.

use std::sync::Arc;

use crate::config::ReportConfig;

/// Shared application state.
///
/// Holds the report configuration every request is computed with.
#[derive(Clone, Default)]
pub struct AppState {
    config: Arc<ReportConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the report configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_config() {
        let state = AppState::new(ReportConfig {
            decimal_places: 4,
            ..ReportConfig::default()
        });
        let cloned = state.clone();
        assert_eq!(cloned.config().decimal_places, 4);
    }
}
