//! Memory struct -- a saved note in the shared memory log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A piece of knowledge written down by the owner or an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Memory {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Name of the agent that recorded the memory, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Memory {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            category: None,
            agent_id: None,
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive match against title and content, for search.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q) || self.content.to_lowercase().contains(&q)
    }
}
