use std::path::Path;

use reqwest::Client;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::WardenError;

pub const DEFAULT_CHANNEL: &str = "#it_vulnerability_reports";

/// Posts report notifications to a Slack channel via `chat.postMessage`.
pub struct SlackNotifier {
    client: Client,
    token: String,
    channel: String,
    base_url: String,
}

impl SlackNotifier {
    pub fn new(token: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token: token.into(),
            channel: channel.into(),
            base_url: "https://slack.com".to_string(),
        }
    }

    /// Builds a notifier from `SLACK_BOT_TOKEN` / `SLACK_CHANNEL`. A missing
    /// token fails before any network call is attempted.
    pub fn from_env() -> Result<Self, WardenError> {
        let token = std::env::var("SLACK_BOT_TOKEN").map_err(|_| {
            WardenError::Notification(
                "SLACK_BOT_TOKEN not set; export a bot token to send notifications".into(),
            )
        })?;
        let channel =
            std::env::var("SLACK_CHANNEL").unwrap_or_else(|_| DEFAULT_CHANNEL.to_string());
        Ok(Self::new(token, channel))
    }

    /// Overrides the Slack API endpoint; used to point tests at a stub server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Announces a freshly generated report to the configured channel.
    pub async fn post_report(&self, report_path: &Path) -> Result<(), WardenError> {
        let text = format!(
            "A new container vulnerability report is available:\n`{}`\nPlease open it locally or from repo artifacts.",
            report_path.display()
        );
        self.post_message(&text).await
    }

    async fn post_message(&self, text: &str) -> Result<(), WardenError> {
        let resp = self
            .client
            .post(format!("{}/api/chat.postMessage", self.base_url))
            .bearer_auth(&self.token)
            .json(&json!({
                "channel": self.channel,
                "text": text,
            }))
            .send()
            .await
            .map_err(|e| WardenError::Network(format!("Slack request failed: {e}")))?;

        let status = resp.status();
        let body: Value = resp
            .json()
            .await
            .map_err(|e| WardenError::Notification(format!("Unreadable Slack response: {e}")))?;

        if !status.is_success() || !body["ok"].as_bool().unwrap_or(false) {
            let reason = body["error"].as_str().unwrap_or("unknown error");
            return Err(WardenError::Notification(format!(
                "Slack rejected the message ({status}): {reason}"
            )));
        }

        info!(channel = %self.channel, "Slack notification sent");
        Ok(())
    }
}
