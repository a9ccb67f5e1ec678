//! Environment-backed configuration for the external integrations.
//!
//! Every key is optional at startup; a missing key only surfaces as an error
//! when the integration that needs it is first called.

use std::env;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub translate_api_key: Option<String>,
    pub maps_api_key: Option<String>,
    pub slack_webhook_url: Option<String>,
    pub slack_bot_token: Option<String>,
    pub slack_channel_id: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            translate_api_key: env_opt("GOOGLE_TRANSLATE_API_KEY"),
            maps_api_key: env_opt("GOOGLE_MAPS_API_KEY"),
            slack_webhook_url: env_opt("SLACK_WEBHOOK_URL"),
            slack_bot_token: env_opt("SLACK_BOT_TOKEN"),
            slack_channel_id: env_opt("SLACK_CHANNEL_ID"),
        }
    }
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}
