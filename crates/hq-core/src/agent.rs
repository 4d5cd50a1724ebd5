//! Agent struct -- a member of the software-agent team roster.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::AgentStatus;

/// A named agent with a role and an optional task it is busy with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub role: String,

    /// Single-character avatar shown on the roster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "AgentStatus::is_default")]
    pub status: AgentStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_task: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Accent color hex string (e.g. `"#E07A5F"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Agent {
    /// Creates an idle agent. The avatar defaults to the first character of
    /// the name, matching how the roster creates agents.
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        let name = name.into();
        let avatar = name.chars().next().map(|c| c.to_string());
        Self {
            id: id.into(),
            name,
            role: role.into(),
            avatar,
            status: AgentStatus::Idle,
            current_task: None,
            description: String::new(),
            color: None,
            created_at: Utc::now(),
        }
    }

    /// Returns `true` while the agent reports active work.
    pub fn is_working(&self) -> bool {
        self.status == AgentStatus::Working
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn avatar_defaults_to_first_char() {
        let a = Agent::new("1", "Yuki", "Chief Assistant");
        assert_eq!(a.avatar.as_deref(), Some("Y"));
        assert_eq!(a.status, AgentStatus::Idle);
        assert!(!a.is_working());
    }

    #[test]
    fn empty_name_has_no_avatar() {
        let a = Agent::new("2", "", "Developer");
        assert!(a.avatar.is_none());
    }
}
