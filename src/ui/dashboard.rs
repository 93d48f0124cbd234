use std::sync::Arc;

use tracing::{debug, error};

use crate::client::ChatBotGateway;
use crate::db::models::ChatBot;
use crate::ui::form::ChatBotForm;
use crate::ui::list::{delete_chatbot, ChatBotList, DeleteOutcome};
use crate::ui::Prompt;

/// Page-level container: owns the fetched records and the platform filter,
/// and refreshes after the form or the list change data.
pub struct ChatBotDashboard {
    api: Arc<dyn ChatBotGateway>,
    chatbots: Vec<ChatBot>,
    platform_filter: String,
    pub form: ChatBotForm,
}

impl ChatBotDashboard {
    pub fn new(api: Arc<dyn ChatBotGateway>) -> Self {
        Self {
            api,
            chatbots: Vec::new(),
            platform_filter: String::new(),
            form: ChatBotForm::new(),
        }
    }

    pub fn chatbots(&self) -> &[ChatBot] {
        &self.chatbots
    }

    pub fn platform_filter(&self) -> &str {
        &self.platform_filter
    }

    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Changes the filter and re-fetches if it differs from the current one.
    pub async fn set_platform_filter(&mut self, platform: impl Into<String>) {
        let platform = platform.into();
        if platform == self.platform_filter {
            return;
        }
        self.platform_filter = platform;
        self.refresh().await;
    }

    /// Re-fetches the list. A failed fetch is logged and the last known list
    /// stays in place.
    pub async fn refresh(&mut self) {
        let result = if self.platform_filter.is_empty() {
            self.api.get_chat_bots().await
        } else {
            self.api.get_integration_status(&self.platform_filter).await
        };
        match result {
            Ok(chatbots) => {
                debug!(count = chatbots.len(), filter = %self.platform_filter, "Chatbot list refreshed.");
                self.chatbots = chatbots;
            }
            Err(e) => error!(error = %e, "Failed to fetch chatbots"),
        }
    }

    /// Called after a record was added elsewhere: drop the filter and reload.
    pub async fn on_added(&mut self) {
        self.platform_filter.clear();
        self.refresh().await;
    }

    /// Submits the embedded form and refreshes on success.
    pub async fn submit_form(&mut self, prompt: &dyn Prompt) -> Option<ChatBot> {
        let created = self.form.submit(self.api.as_ref(), prompt).await?;
        self.on_added().await;
        Some(created)
    }

    /// Runs the list's delete action and refreshes once it went through.
    pub async fn delete(&mut self, id: &str, prompt: &dyn Prompt) -> DeleteOutcome {
        let outcome = delete_chatbot(self.api.as_ref(), id, prompt).await;
        if outcome == DeleteOutcome::Deleted {
            self.refresh().await;
        }
        outcome
    }

    pub fn render(&self) -> String {
        let filter = if self.platform_filter.is_empty() {
            "All platforms"
        } else {
            self.platform_filter.as_str()
        };
        format!(
            "ChatBots ({filter})\n{}",
            ChatBotList::new(&self.chatbots).render()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::{FakeGateway, ScriptedPrompt};

    fn dashboard(gateway: &Arc<FakeGateway>) -> ChatBotDashboard {
        ChatBotDashboard::new(gateway.clone())
    }

    fn names(dashboard: &ChatBotDashboard) -> Vec<String> {
        dashboard.chatbots().iter().map(|c| c.bot_name.clone()).collect()
    }

    #[tokio::test]
    async fn test_mount_fetches_everything() {
        let gateway = Arc::new(FakeGateway::with(&[("Bot1", "Slack"), ("Bot2", "Teams")]));
        let mut dashboard = dashboard(&gateway);
        dashboard.mount().await;

        assert_eq!(names(&dashboard), vec!["Bot1", "Bot2"]);
        assert_eq!(gateway.calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn test_filter_change_uses_integration_endpoint() {
        let gateway = Arc::new(FakeGateway::with(&[("Bot1", "Slack"), ("Bot2", "Teams")]));
        let mut dashboard = dashboard(&gateway);
        dashboard.mount().await;

        dashboard.set_platform_filter("slack").await;
        assert_eq!(names(&dashboard), vec!["Bot1"]);

        // Same value again does not re-fetch.
        dashboard.set_platform_filter("slack").await;

        dashboard.set_platform_filter("").await;
        assert_eq!(names(&dashboard), vec!["Bot1", "Bot2"]);
        assert_eq!(gateway.calls(), vec!["list", "integration slack", "list"]);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_last_list() {
        let gateway = Arc::new(FakeGateway::with(&[("Bot1", "Slack")]));
        let mut dashboard = dashboard(&gateway);
        dashboard.mount().await;

        gateway.set_failing(true);
        dashboard.set_platform_filter("Teams").await;
        assert_eq!(names(&dashboard), vec!["Bot1"]);
        assert_eq!(dashboard.platform_filter(), "Teams");
    }

    #[tokio::test]
    async fn test_successful_add_clears_filter_and_refreshes() {
        let gateway = Arc::new(FakeGateway::with(&[("Bot1", "Slack")]));
        let mut dashboard = dashboard(&gateway);
        dashboard.mount().await;
        dashboard.set_platform_filter("Teams").await;
        assert!(dashboard.chatbots().is_empty());

        dashboard.form.bot_name = "Bot2".to_string();
        dashboard.form.platform = "Telegram".to_string();
        dashboard.form.intent = "Help".to_string();
        dashboard.form.response = "How can I help?".to_string();

        let prompt = ScriptedPrompt::answering(true);
        let created = dashboard.submit_form(&prompt).await.unwrap();
        assert_eq!(created.platform, "Telegram");
        assert_eq!(dashboard.platform_filter(), "");
        assert_eq!(names(&dashboard), vec!["Bot1", "Bot2"]);
        assert_eq!(dashboard.form, ChatBotForm::new());
    }

    #[tokio::test]
    async fn test_failed_add_leaves_filter_and_list() {
        let gateway = Arc::new(FakeGateway::with(&[("Bot1", "Slack")]));
        let mut dashboard = dashboard(&gateway);
        dashboard.mount().await;
        dashboard.set_platform_filter("Slack").await;

        gateway.set_failing(true);
        dashboard.form.bot_name = "Bot2".to_string();
        let prompt = ScriptedPrompt::answering(true);
        assert!(dashboard.submit_form(&prompt).await.is_none());
        assert_eq!(dashboard.platform_filter(), "Slack");
        assert_eq!(dashboard.form.bot_name, "Bot2");
        assert_eq!(prompt.alerts().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_refreshes_only_when_confirmed() {
        let gateway = Arc::new(FakeGateway::with(&[("Bot1", "Slack"), ("Bot2", "Teams")]));
        let mut dashboard = dashboard(&gateway);
        dashboard.mount().await;

        let decline = ScriptedPrompt::answering(false);
        assert_eq!(dashboard.delete("1", &decline).await, DeleteOutcome::Cancelled);
        assert_eq!(names(&dashboard), vec!["Bot1", "Bot2"]);

        let accept = ScriptedPrompt::answering(true);
        assert_eq!(dashboard.delete("1", &accept).await, DeleteOutcome::Deleted);
        assert_eq!(names(&dashboard), vec!["Bot2"]);
        assert_eq!(gateway.calls(), vec!["list", "delete 1", "list"]);
    }

    #[tokio::test]
    async fn test_render_shows_filter_and_placeholder() {
        let gateway = Arc::new(FakeGateway::default());
        let mut dashboard = dashboard(&gateway);
        dashboard.mount().await;
        let rendered = dashboard.render();
        assert!(rendered.starts_with("ChatBots (All platforms)"));
        assert!(rendered.ends_with("No chatbots found."));
    }
}
