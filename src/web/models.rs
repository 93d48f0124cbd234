use serde::{Deserialize, Serialize};

/// Query string of `GET /api/chatbots/integration`.
#[derive(Debug, Default, Deserialize)]
pub struct IntegrationQuery {
    pub platform: Option<String>,
}

impl IntegrationQuery {
    /// The platform to filter by, or `None` when absent or blank.
    pub fn platform_filter(&self) -> Option<&str> {
        self.platform
            .as_deref()
            .filter(|platform| !platform.trim().is_empty())
    }
}

/// Body of every failed API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
