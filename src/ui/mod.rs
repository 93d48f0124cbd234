//! Headless UI components for managing chatbots.
//!
//! The container ([`dashboard::ChatBotDashboard`]) owns the record list and
//! the platform filter, and composes the form and list components. Rendering
//! produces plain text so the same components back the console front end
//! and the tests.

pub mod dashboard;
pub mod form;
pub mod list;

use std::io::{self, BufRead, Write};

/// User interaction the components cannot decide on their own.
pub trait Prompt: Send + Sync {
    /// Asks a yes/no question. `false` cancels the action.
    fn confirm(&self, message: &str) -> bool;
    /// Shows a message the user has to see.
    fn alert(&self, message: &str);
}

/// Prompt on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt {
    /// Answer every confirmation with yes.
    pub assume_yes: bool,
}

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{message} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use reqwest::StatusCode;

    use super::Prompt;
    use crate::client::{ChatBotGateway, ClientError};
    use crate::db::models::{ChatBot, NewChatBot};

    #[derive(Debug, Default)]
    pub struct FakeGatewayState {
        pub chatbots: Vec<ChatBot>,
        pub next_id: u32,
        pub fail: bool,
        pub calls: Vec<String>,
    }

    /// In-memory gateway that records every call.
    #[derive(Debug, Default)]
    pub struct FakeGateway {
        pub state: Mutex<FakeGatewayState>,
    }

    impl FakeGateway {
        pub fn with(chatbots: &[(&str, &str)]) -> Self {
            let gateway = FakeGateway::default();
            {
                let mut state = gateway.state.lock().unwrap();
                for (name, platform) in chatbots {
                    state.next_id += 1;
                    let id = state.next_id.to_string();
                    state.chatbots.push(NewChatBot::new(*name, *platform, "Greet", "Hi").into_chatbot(id));
                }
            }
            gateway
        }

        pub fn set_failing(&self, fail: bool) {
            self.state.lock().unwrap().fail = fail;
        }

        pub fn calls(&self) -> Vec<String> {
            self.state.lock().unwrap().calls.clone()
        }

        fn begin(&self, call: String) -> Result<std::sync::MutexGuard<'_, FakeGatewayState>, ClientError> {
            let mut state = self.state.lock().unwrap();
            state.calls.push(call);
            if state.fail {
                return Err(ClientError::Api {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "DB error".to_string(),
                });
            }
            Ok(state)
        }
    }

    #[async_trait]
    impl ChatBotGateway for FakeGateway {
        async fn add_chat_bot(&self, chatbot: &NewChatBot) -> Result<ChatBot, ClientError> {
            let mut state = self.begin(format!("add {}", chatbot.bot_name))?;
            state.next_id += 1;
            let created = chatbot.clone().into_chatbot(state.next_id.to_string());
            state.chatbots.push(created.clone());
            Ok(created)
        }

        async fn get_chat_bots(&self) -> Result<Vec<ChatBot>, ClientError> {
            let state = self.begin("list".to_string())?;
            Ok(state.chatbots.clone())
        }

        async fn get_integration_status(&self, platform: &str) -> Result<Vec<ChatBot>, ClientError> {
            let state = self.begin(format!("integration {platform}"))?;
            let wanted = platform.to_lowercase();
            Ok(state
                .chatbots
                .iter()
                .filter(|c| platform.is_empty() || c.platform.to_lowercase() == wanted)
                .cloned()
                .collect())
        }

        async fn delete_chat_bot(&self, id: &str) -> Result<(), ClientError> {
            let mut state = self.begin(format!("delete {id}"))?;
            state.chatbots.retain(|c| c.id != id);
            Ok(())
        }
    }

    /// Prompt with a canned confirmation answer that records alerts.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompt {
        pub answer: bool,
        pub confirmations: Mutex<Vec<String>>,
        pub alerts: Mutex<Vec<String>>,
    }

    impl ScriptedPrompt {
        pub fn answering(answer: bool) -> Self {
            Self { answer, ..Default::default() }
        }

        pub fn alerts(&self) -> Vec<String> {
            self.alerts.lock().unwrap().clone()
        }

        pub fn confirmations(&self) -> Vec<String> {
            self.confirmations.lock().unwrap().clone()
        }
    }

    impl Prompt for ScriptedPrompt {
        fn confirm(&self, message: &str) -> bool {
            self.confirmations.lock().unwrap().push(message.to_string());
            self.answer
        }

        fn alert(&self, message: &str) {
            self.alerts.lock().unwrap().push(message.to_string());
        }
    }
}
