use tracing::error;

use crate::client::ChatBotGateway;
use crate::db::models::ChatBot;
use crate::ui::Prompt;

pub const DELETE_CONFIRMATION: &str = "Delete this chatbot?";
pub const DELETE_FAILED_ALERT: &str = "Failed to delete. See console for details.";
pub const EMPTY_PLACEHOLDER: &str = "No chatbots found.";

const HEADERS: [&str; 5] = ["Bot Name", "Platform", "Intent", "Response", "Actions"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; nothing was sent.
    Cancelled,
    Deleted,
    Failed,
}

/// Table of chatbots with a delete action per row.
#[derive(Debug, Clone, Copy)]
pub struct ChatBotList<'a> {
    chatbots: &'a [ChatBot],
}

impl<'a> ChatBotList<'a> {
    pub fn new(chatbots: &'a [ChatBot]) -> Self {
        Self { chatbots }
    }

    fn rows(&self) -> Vec<[String; 5]> {
        self.chatbots
            .iter()
            .map(|bot| {
                [
                    bot.bot_name.clone(),
                    bot.platform.clone(),
                    bot.intent.clone(),
                    bot.response.clone(),
                    format!("delete {}", bot.id),
                ]
            })
            .collect()
    }

    /// Renders a plain-text table. An empty list gets a single placeholder row.
    pub fn render(&self) -> String {
        let rows = self.rows();
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let format_row = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

        let mut lines = vec![format_row(&header), format_row(&separator)];
        if rows.is_empty() {
            lines.push(EMPTY_PLACEHOLDER.to_string());
        } else {
            lines.extend(rows.iter().map(|row| format_row(&row[..])));
        }
        lines.join("\n")
    }
}

/// Deletes `id` after the user confirms.
pub async fn delete_chatbot(api: &dyn ChatBotGateway, id: &str, prompt: &dyn Prompt) -> DeleteOutcome {
    if !prompt.confirm(DELETE_CONFIRMATION) {
        return DeleteOutcome::Cancelled;
    }
    match api.delete_chat_bot(id).await {
        Ok(()) => DeleteOutcome::Deleted,
        Err(e) => {
            error!(error = %e, id, "Delete failed");
            prompt.alert(DELETE_FAILED_ALERT);
            DeleteOutcome::Failed
        }
    }
}
