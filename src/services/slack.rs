//! Slack delivery: webhook status messages and bot-token file uploads.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

use crate::config::AppConfig;
use crate::services::Notifier;

const FILES_UPLOAD_URL: &str = "https://slack.com/api/files.upload";

pub struct SlackNotifier {
    config: AppConfig,
    client: reqwest::Client,
}

impl SlackNotifier {
    pub fn new(config: AppConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    ok: bool,
    error: Option<String>,
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn notify(&self, message: &str) -> Result<(), String> {
        let webhook_url = self
            .config
            .slack_webhook_url
            .as_deref()
            .ok_or_else(|| "SLACK_WEBHOOK_URL is not set".to_string())?;

        let response = self
            .client
            .post(webhook_url)
            .json(&serde_json::json!({ "text": message }))
            .send()
            .await
            .map_err(|e| format!("Slack webhook request failed: {}", e))?;

        response
            .error_for_status()
            .map_err(|e| format!("Slack webhook rejected the message: {}", e))?;
        Ok(())
    }

    async fn upload(&self, file_path: &Path, title: &str) -> Result<(), String> {
        let token = self
            .config
            .slack_bot_token
            .as_deref()
            .ok_or_else(|| "SLACK_BOT_TOKEN is not set".to_string())?;
        let channel = self
            .config
            .slack_channel_id
            .as_deref()
            .ok_or_else(|| "SLACK_CHANNEL_ID is not set".to_string())?;

        let file_data = tokio::fs::read(file_path)
            .await
            .map_err(|e| format!("failed to read {}: {}", file_path.display(), e))?;
        let filename = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());

        let form = reqwest::multipart::Form::new()
            .text("channels", channel.to_string())
            .text("initial_comment", format!("{} をアップロードしました", title))
            .text("title", title.to_string())
            .part(
                "file",
                reqwest::multipart::Part::bytes(file_data).file_name(filename),
            );

        let response = self
            .client
            .post(FILES_UPLOAD_URL)
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| format!("Slack upload request failed: {}", e))?;

        let payload: UploadResponse = response
            .json()
            .await
            .map_err(|e| format!("Slack upload response was not valid JSON: {}", e))?;

        if !payload.ok {
            return Err(format!(
                "Slack file upload failed: {}",
                payload.error.unwrap_or_else(|| "unknown error".to_string())
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notify_without_webhook_fails_fast() {
        let notifier = SlackNotifier::new(AppConfig::default(), reqwest::Client::new());
        let result = notifier.notify("✅ テスト").await;
        assert!(result.unwrap_err().contains("SLACK_WEBHOOK_URL"));
    }

    #[tokio::test]
    async fn test_upload_without_token_fails_fast() {
        let notifier = SlackNotifier::new(AppConfig::default(), reqwest::Client::new());
        let result = notifier.upload(Path::new("created_registration.docx"), "登記書類").await;
        assert!(result.unwrap_err().contains("SLACK_BOT_TOKEN"));
    }

    #[test]
    fn test_upload_response_error_field() {
        let json = r#"{"ok":false,"error":"invalid_auth"}"#;
        let payload: UploadResponse = serde_json::from_str(json).unwrap();
        assert!(!payload.ok);
        assert_eq!(payload.error.as_deref(), Some("invalid_auth"));
    }
}
