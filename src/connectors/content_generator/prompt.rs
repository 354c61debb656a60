//! Prompt sent to the provider for every generation request.

use serde::{Deserialize, Serialize};

pub const SYSTEM_INSTRUCTION: &str = "You are an expert marketing copywriter. \
Your task is to generate compelling marketing text for a product.
The output should be a single block of text, structured as follows:
A catchy and attractive headline.
A short, engaging paragraph (2-3 sentences) describing the product's main benefit.
A bulleted list of 3 key features, starting each with a relevant emoji.
A strong call-to-action at the end. Do not use JSON or markdown formatting. Just provide the raw text.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Both fields are passed through verbatim
pub fn user_message(product_name: &str, product_description: &str) -> String {
    format!(
        "Product Name: {}\nProduct Description: {}",
        product_name, product_description
    )
}

pub fn build_messages(product_name: &str, product_description: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_INSTRUCTION),
        ChatMessage::user(user_message(product_name, product_description)),
    ]
}
