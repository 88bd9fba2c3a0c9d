use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    pub category: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ContentRequest {
    #[serde(default)]
    pub url: String,
    pub section: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IntentRequest {
    #[serde(default)]
    pub query: String,
}

/// Every operation answers with a single block of text.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextResponse {
    pub text: String,
}

impl TextResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
