//! ContentItem struct -- a piece of content moving through the pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::ContentStage;

/// A content item (video, post, ...) progressing from idea to published.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Draft script text, filled in once the item reaches the script stage.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub script: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    #[serde(default, skip_serializing_if = "ContentStage::is_default")]
    pub stage: ContentStage,

    /// Name of the agent responsible for the item.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub agent: String,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Default for ContentItem {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            script: String::new(),
            thumbnail_url: None,
            stage: ContentStage::default(),
            agent: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl ContentItem {
    /// Creates a content item in the ideas stage.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Returns `true` once the item has shipped.
    pub fn is_published(&self) -> bool {
        self.stage == ContentStage::Published
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_item_starts_in_ideas() {
        let c = ContentItem::new("c1", "AI Workflow Tutorial");
        assert_eq!(c.stage, ContentStage::Ideas);
        assert!(!c.is_published());
    }

    #[test]
    fn serde_roundtrip_with_script() {
        let mut c = ContentItem::new("c2", "Setup Guide");
        c.stage = ContentStage::Script;
        c.script = "In this video...".into();

        let json = serde_json::to_string(&c).unwrap();
        let back: ContentItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.stage, ContentStage::Script);
        assert_eq!(back.script, "In this video...");
        assert!(back.thumbnail_url.is_none());
    }
}
