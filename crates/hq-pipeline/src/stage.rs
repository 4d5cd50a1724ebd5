//! Stage definitions and the validated ordered stage sequence.

use serde::{Deserialize, Serialize};

/// A single named stage (board column).
///
/// Order is implicit: a stage's position in its [`StageSet`] is its order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: String,
    pub label: String,
    /// Display color hex string (e.g. `"#E07A5F"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Stage {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Errors raised when constructing a [`StageSet`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StageSetError {
    #[error("a stage sequence must have at least one stage")]
    Empty,

    #[error("stage at position {0} has an empty id")]
    BlankStageId(usize),

    #[error("duplicate stage id: {0}")]
    DuplicateStageId(String),
}

/// A fixed, ordered sequence of stages with unique ids.
///
/// The sequence is validated once at construction (configuration load) and
/// never reordered at runtime, so downstream code can index into it freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageSet {
    stages: Vec<Stage>,
}

impl StageSet {
    /// Validates and wraps a stage sequence.
    pub fn new(stages: Vec<Stage>) -> Result<Self, StageSetError> {
        if stages.is_empty() {
            return Err(StageSetError::Empty);
        }
        for (i, stage) in stages.iter().enumerate() {
            if stage.id.is_empty() {
                return Err(StageSetError::BlankStageId(i));
            }
            if stages[..i].iter().any(|s| s.id == stage.id) {
                return Err(StageSetError::DuplicateStageId(stage.id.clone()));
            }
        }
        Ok(Self { stages })
    }

    /// Zero-based position of a stage id, or `None` if unknown.
    pub fn index_of(&self, stage_id: &str) -> Option<usize> {
        self.stages.iter().position(|s| s.id == stage_id)
    }

    pub fn contains(&self, stage_id: &str) -> bool {
        self.index_of(stage_id).is_some()
    }

    pub fn get(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        // Always false by construction; kept for the len/is_empty pairing.
        self.stages.is_empty()
    }

    pub fn first(&self) -> &Stage {
        &self.stages[0]
    }

    pub fn last(&self) -> &Stage {
        &self.stages[self.stages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn three_stages() -> Vec<Stage> {
        vec![
            Stage::new("todo", "To Do"),
            Stage::new("in-progress", "In Progress"),
            Stage::new("done", "Done"),
        ]
    }

    #[test]
    fn valid_sequence_constructs() {
        let set = StageSet::new(three_stages()).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.first().id, "todo");
        assert_eq!(set.last().id, "done");
    }

    #[test]
    fn empty_sequence_rejected() {
        assert_eq!(StageSet::new(vec![]), Err(StageSetError::Empty));
    }

    #[test]
    fn blank_id_rejected() {
        let stages = vec![Stage::new("todo", "To Do"), Stage::new("", "Nameless")];
        assert_eq!(StageSet::new(stages), Err(StageSetError::BlankStageId(1)));
    }

    #[test]
    fn duplicate_id_rejected() {
        let stages = vec![Stage::new("todo", "To Do"), Stage::new("todo", "Again")];
        assert_eq!(
            StageSet::new(stages),
            Err(StageSetError::DuplicateStageId("todo".into()))
        );
    }

    #[test]
    fn index_of_unknown_is_none() {
        let set = StageSet::new(three_stages()).unwrap();
        assert_eq!(set.index_of("in-progress"), Some(1));
        assert_eq!(set.index_of("review"), None);
        assert!(!set.contains("review"));
    }
}
