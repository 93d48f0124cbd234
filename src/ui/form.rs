use tracing::error;

use crate::client::{ChatBotGateway, ClientError};
use crate::db::models::{ChatBot, NewChatBot};
use crate::ui::Prompt;

/// Platforms offered by the form. The API itself accepts any string.
pub const PLATFORM_OPTIONS: [&str; 4] = ["Website", "WhatsApp", "Slack", "Telegram"];
pub const DEFAULT_PLATFORM: &str = PLATFORM_OPTIONS[0];

pub const ADD_FAILED_ALERT: &str = "Failed to add chatbot. Check console for details.";

/// "Add ChatBot" form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatBotForm {
    pub bot_name: String,
    pub platform: String,
    pub intent: String,
    pub response: String,
    loading: bool,
}

impl Default for ChatBotForm {
    fn default() -> Self {
        Self {
            bot_name: String::new(),
            platform: DEFAULT_PLATFORM.to_string(),
            intent: String::new(),
            response: String::new(),
            loading: false,
        }
    }
}

impl ChatBotForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a submit is waiting for the server.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading { "Adding..." } else { "Add ChatBot" }
    }

    pub fn payload(&self) -> NewChatBot {
        NewChatBot::new(&self.bot_name, &self.platform, &self.intent, &self.response)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Marks a submit as started and returns the document to send. `None`
    /// while another submit is still pending.
    pub fn begin_submit(&mut self) -> Option<NewChatBot> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(self.payload())
    }

    /// Applies the outcome of a submit started with [`Self::begin_submit`].
    /// On success the form is cleared and the created record returned; on
    /// failure the user is alerted and the fields are kept.
    pub fn finish_submit(&mut self, result: Result<ChatBot, ClientError>, prompt: &dyn Prompt) -> Option<ChatBot> {
        self.loading = false;
        match result {
            Ok(chatbot) => {
                self.reset();
                Some(chatbot)
            }
            Err(e) => {
                error!(error = %e, "Failed to add chatbot");
                prompt.alert(ADD_FAILED_ALERT);
                None
            }
        }
    }

    /// Sends the form and applies the outcome.
    pub async fn submit(&mut self, api: &dyn ChatBotGateway, prompt: &dyn Prompt) -> Option<ChatBot> {
        let payload = self.begin_submit()?;
        let result = api.add_chat_bot(&payload).await;
        self.finish_submit(result, prompt)
    }
}
