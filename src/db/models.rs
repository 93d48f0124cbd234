use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::db::entities::chatbot;

/// A chatbot configuration entry as exposed over HTTP.
/// Corresponds to the `chatbots` table, minus bookkeeping columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatBot {
    #[serde(alias = "_id")]
    pub id: String,
    pub bot_name: String,
    pub platform: String,
    pub intent: String,
    pub response: String,
}

impl From<chatbot::Model> for ChatBot {
    fn from(model: chatbot::Model) -> Self {
        ChatBot {
            id: model.id,
            bot_name: model.bot_name,
            platform: model.platform,
            intent: model.intent,
            response: model.response,
        }
    }
}

/// Input document for a new chatbot.
///
/// Missing or null fields deserialize as empty strings so that the store's
/// schema check, not the JSON layer, reports which fields are absent.
/// Numbers and booleans are stored as their text form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewChatBot {
    #[serde(deserialize_with = "scalar_as_string")]
    pub bot_name: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub platform: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub intent: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub response: String,
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Array(_) => Err(de::Error::invalid_type(de::Unexpected::Seq, &"a string")),
        Value::Object(_) => Err(de::Error::invalid_type(de::Unexpected::Map, &"a string")),
    }
}

impl NewChatBot {
    pub fn new(
        bot_name: impl Into<String>,
        platform: impl Into<String>,
        intent: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            bot_name: bot_name.into(),
            platform: platform.into(),
            intent: intent.into(),
            response: response.into(),
        }
    }

    /// Names of required fields that are empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("botName", &self.bot_name),
            ("platform", &self.platform),
            ("intent", &self.intent),
            ("response", &self.response),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Schema check shared by every store implementation.
    pub fn validation_message(&self) -> Option<String> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            return None;
        }
        let clauses: Vec<String> = missing
            .iter()
            .map(|field| format!("{field}: Path `{field}` is required."))
            .collect();
        Some(format!("ChatBot validation failed: {}", clauses.join(", ")))
    }

    pub fn into_chatbot(self, id: String) -> ChatBot {
        ChatBot {
            id,
            bot_name: self.bot_name,
            platform: self.platform,
            intent: self.intent,
            response: self.response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_document_passes_schema_check() {
        let new = NewChatBot::new("TestBot", "Slack", "Greet", "Hello!");
        assert!(new.missing_fields().is_empty());
        assert_eq!(new.validation_message(), None);
    }

    #[test]
    fn test_missing_fields_are_listed_in_order() {
        let new = NewChatBot::new("", "Slack", "", "Hello!");
        assert_eq!(new.missing_fields(), vec!["botName", "intent"]);
        assert_eq!(
            new.validation_message().unwrap(),
            "ChatBot validation failed: botName: Path `botName` is required., intent: Path `intent` is required."
        );
    }

    #[test]
    fn test_absent_json_fields_default_to_empty() {
        let new: NewChatBot = serde_json::from_str(r#"{"botName":"Bot1"}"#).unwrap();
        assert_eq!(new.bot_name, "Bot1");
        assert_eq!(new.missing_fields(), vec!["platform", "intent", "response"]);
    }

    #[test]
    fn test_scalar_fields_are_stored_as_text() {
        let new: NewChatBot = serde_json::from_str(
            r#"{"botName":42,"platform":"Slack","intent":true,"response":1.5}"#,
        )
        .unwrap();
        assert_eq!(new, NewChatBot::new("42", "Slack", "true", "1.5"));

        let new: NewChatBot = serde_json::from_str(r#"{"botName":null,"platform":"Slack"}"#).unwrap();
        assert_eq!(new.missing_fields(), vec!["botName", "intent", "response"]);

        assert!(serde_json::from_str::<NewChatBot>(r#"{"botName":["a"]}"#).is_err());
        assert!(serde_json::from_str::<NewChatBot>(r#"{"botName":{"a":1}}"#).is_err());
    }

    #[test]
    fn test_chatbot_accepts_underscore_id() {
        let bot: ChatBot = serde_json::from_str(
            r#"{"_id":"abc","botName":"Bot1","platform":"Slack","intent":"Greet","response":"Hi"}"#,
        )
        .unwrap();
        assert_eq!(bot.id, "abc");

        let json = serde_json::to_value(&bot).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["botName"], "Bot1");
    }
}
