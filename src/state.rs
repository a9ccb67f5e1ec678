use std::sync::Arc;

use crate::config::AppConfig;
use crate::documents::DocumentPaths;
use crate::services::{Geocoder, GoogleGeocode, GoogleTranslate, Notifier, SlackNotifier, Translator};

/// Shared application state: one HTTP client, the external collaborators,
/// and the template/output locations.
pub struct AppState {
    pub http_client: reqwest::Client,
    pub translator: Arc<dyn Translator + Send + Sync>,
    pub geocoder: Arc<dyn Geocoder + Send + Sync>,
    pub notifier: Arc<dyn Notifier + Send + Sync>,
    pub paths: DocumentPaths,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(AppConfig::from_env())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent("onestop-jpn-server/1.0")
            .build()
            .expect("Failed to create reqwest client");

        let translator = Arc::new(GoogleTranslate::new(config.clone(), http_client.clone()));
        let geocoder = Arc::new(GoogleGeocode::new(config.clone(), http_client.clone()));
        let notifier = Arc::new(SlackNotifier::new(config, http_client.clone()));

        Self {
            http_client,
            translator,
            geocoder,
            notifier,
            paths: DocumentPaths::default(),
        }
    }

    /// Build a state around injected collaborators; used by tests.
    pub fn with_collaborators(
        translator: Arc<dyn Translator + Send + Sync>,
        geocoder: Arc<dyn Geocoder + Send + Sync>,
        notifier: Arc<dyn Notifier + Send + Sync>,
        paths: DocumentPaths,
    ) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            translator,
            geocoder,
            notifier,
            paths,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
