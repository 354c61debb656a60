use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

/// Persisted generation request together with the copy the provider wrote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct History {
    pub id: i64,
    pub product_name: String,
    pub product_description: String,
    pub generated_content: String,
    pub created_at: DateTime<Utc>,
}

/// Row about to be inserted; `id` and `created_at` are assigned by the database
#[derive(Debug, Clone, PartialEq)]
pub struct NewHistory {
    pub product_name: String,
    pub product_description: String,
    pub generated_content: String,
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "history #{} \"{}\" ({} chars of copy) at {}",
            self.id,
            self.product_name,
            self.generated_content.chars().count(),
            self.created_at.to_rfc3339()
        )
    }
}
