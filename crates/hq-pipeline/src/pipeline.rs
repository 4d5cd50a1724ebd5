//! Grouping and stage-move operations over item snapshots.
//!
//! Everything here is a pure function: inputs are borrowed, outputs are new
//! values, and nothing is mutated in place. The caller (a UI event handler,
//! a CLI command) applies the returned collection atomically as its next
//! snapshot.

use std::str::FromStr;

use hq_core::content::ContentItem;
use hq_core::enums::{ContentStage, TaskStatus};
use hq_core::task::Task;

use crate::stage::{Stage, StageSet};

/// The seam between the pipeline and concrete item types.
///
/// Anything with an id and a current stage id can ride the pipeline; tasks
/// move along their status columns, content items along production stages.
pub trait Staged {
    fn item_id(&self) -> &str;
    fn stage_id(&self) -> &str;
    fn set_stage_id(&mut self, stage_id: &str);
}

impl Staged for Task {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn stage_id(&self) -> &str {
        self.status.as_str()
    }

    fn set_stage_id(&mut self, stage_id: &str) {
        self.status = TaskStatus::from(stage_id);
    }
}

impl Staged for ContentItem {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn stage_id(&self) -> &str {
        self.stage.as_str()
    }

    fn set_stage_id(&mut self, stage_id: &str) {
        self.stage = ContentStage::from(stage_id);
    }
}

/// One-step move direction along the stage sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prev => "prev",
            Self::Next => "next",
        }
    }

    /// The offset applied to a stage index.
    fn delta(self) -> isize {
        match self {
            Self::Prev => -1,
            Self::Next => 1,
        }
    }

    /// The opposite direction.
    pub fn inverse(self) -> Self {
        match self {
            Self::Prev => Self::Next,
            Self::Next => Self::Prev,
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prev" => Ok(Self::Prev),
            "next" => Ok(Self::Next),
            other => Err(format!("unknown direction '{other}' (expected prev|next)")),
        }
    }
}

/// Errors for the strict-mode move variant.
///
/// The lenient [`move_item`] never raises these; it is the default because
/// the intended caller is interactive and a refused transition should be a
/// silent no-op, not a dialog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("no item with id '{0}'")]
    UnknownItem(String),

    #[error("item '{item}' references unknown stage '{stage}'")]
    UnknownStage { item: String, stage: String },
}

/// All items of one stage, in input order.
#[derive(Debug)]
pub struct StageGroup<'a, T> {
    pub stage: &'a Stage,
    pub items: Vec<&'a T>,
}

impl<T> StageGroup<'_, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Partitions `items` by stage, one group per configured stage in order.
///
/// Stages with no matching items get an empty group. Items whose stage id
/// is not in `stages` appear in no group at all -- they are silently
/// omitted, matching how the boards have always handled stray records.
pub fn group_by_stage<'a, T: Staged>(items: &'a [T], stages: &'a StageSet) -> Vec<StageGroup<'a, T>> {
    stages
        .iter()
        .map(|stage| StageGroup {
            stage,
            items: items.iter().filter(|i| i.stage_id() == stage.id).collect(),
        })
        .collect()
}

/// Moves the item with `item_id` one stage in `direction`, returning the
/// new collection.
///
/// No-op cases (the input is returned as an unchanged clone):
/// - `item_id` matches no item,
/// - the item's current stage is not in `stages`,
/// - the move would land outside the sequence (clamped at the boundary).
pub fn move_item<T: Staged + Clone>(
    items: &[T],
    item_id: &str,
    direction: Direction,
    stages: &StageSet,
) -> Vec<T> {
    let mut next: Vec<T> = items.to_vec();
    if let Some(target) = target_stage(items, item_id, direction, stages) {
        for item in &mut next {
            if item.item_id() == item_id {
                item.set_stage_id(&target);
            }
        }
    }
    next
}

/// Strict-mode variant of [`move_item`]: unknown ids are errors.
///
/// Boundary clamping is still a no-op, not an error -- only *invalid
/// references* are reported, for programmatic callers that want to know
/// about dangling ids instead of silently keeping the snapshot.
pub fn try_move_item<T: Staged + Clone>(
    items: &[T],
    item_id: &str,
    direction: Direction,
    stages: &StageSet,
) -> Result<Vec<T>, PipelineError> {
    let item = items
        .iter()
        .find(|i| i.item_id() == item_id)
        .ok_or_else(|| PipelineError::UnknownItem(item_id.to_owned()))?;

    if !stages.contains(item.stage_id()) {
        return Err(PipelineError::UnknownStage {
            item: item_id.to_owned(),
            stage: item.stage_id().to_owned(),
        });
    }

    Ok(move_item(items, item_id, direction, stages))
}

/// Computes the stage id the item would move to, or `None` for any no-op.
fn target_stage<T: Staged>(
    items: &[T],
    item_id: &str,
    direction: Direction,
    stages: &StageSet,
) -> Option<String> {
    let item = items.iter().find(|i| i.item_id() == item_id)?;
    let current = stages.index_of(item.stage_id())?;
    let target = current as isize + direction.delta();
    if target < 0 || target as usize >= stages.len() {
        return None;
    }
    stages.get(target as usize).map(|s| s.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Stage;
    use hq_core::enums::TaskStatus;
    use pretty_assertions::assert_eq;

    /// Minimal item for exercising the pipeline without domain baggage.
    #[derive(Debug, Clone, PartialEq)]
    struct Card {
        id: String,
        stage: String,
    }

    impl Card {
        fn new(id: &str, stage: &str) -> Self {
            Self {
                id: id.into(),
                stage: stage.into(),
            }
        }
    }

    impl Staged for Card {
        fn item_id(&self) -> &str {
            &self.id
        }

        fn stage_id(&self) -> &str {
            &self.stage
        }

        fn set_stage_id(&mut self, stage_id: &str) {
            self.stage = stage_id.to_owned();
        }
    }

    fn stages() -> StageSet {
        StageSet::new(vec![
            Stage::new("todo", "To Do"),
            Stage::new("in-progress", "In Progress"),
            Stage::new("done", "Done"),
        ])
        .unwrap()
    }

    fn stage_of<'a>(items: &'a [Card], id: &str) -> &'a str {
        &items.iter().find(|c| c.id == id).unwrap().stage
    }

    #[test]
    fn group_by_stage_partitions_in_order() {
        let items = vec![
            Card::new("a", "done"),
            Card::new("b", "todo"),
            Card::new("c", "todo"),
            Card::new("d", "in-progress"),
        ];
        let set = stages();
        let groups = group_by_stage(&items, &set);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].stage.id, "todo");
        // Input order preserved within a group.
        let todo_ids: Vec<_> = groups[0].items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(todo_ids, vec!["b", "c"]);
        assert_eq!(groups[1].len(), 1);
        assert_eq!(groups[2].items[0].id, "a");
    }

    #[test]
    fn group_by_stage_gives_empty_groups() {
        let items = vec![Card::new("a", "todo")];
        let set = stages();
        let groups = group_by_stage(&items, &set);
        assert!(groups[1].is_empty());
        assert!(groups[2].is_empty());
    }

    #[test]
    fn unknown_stage_items_appear_in_no_group() {
        // Pinning the behavior: stray records are dropped, not raised.
        let items = vec![
            Card::new("a", "todo"),
            Card::new("weird", "review"),
            Card::new("b", "done"),
        ];
        let set = stages();
        let groups = group_by_stage(&items, &set);

        let total: usize = groups.iter().map(StageGroup::len).sum();
        assert_eq!(total, 2);
        assert!(
            groups
                .iter()
                .all(|g| g.items.iter().all(|c| c.id != "weird"))
        );
    }

    #[test]
    fn partition_is_exact_for_valid_items() {
        let items = vec![
            Card::new("a", "todo"),
            Card::new("b", "in-progress"),
            Card::new("c", "done"),
            Card::new("d", "todo"),
            Card::new("x", "nowhere"),
        ];
        let set = stages();
        let groups = group_by_stage(&items, &set);

        let valid = items.iter().filter(|c| set.contains(&c.stage)).count();
        let grouped: usize = groups.iter().map(StageGroup::len).sum();
        assert_eq!(grouped, valid);

        // Every valid item lands in exactly one group.
        for card in items.iter().filter(|c| set.contains(&c.stage)) {
            let appearances: usize = groups
                .iter()
                .map(|g| g.items.iter().filter(|c| c.id == card.id).count())
                .sum();
            assert_eq!(appearances, 1, "card {} should appear once", card.id);
        }
    }

    #[test]
    fn walk_forward_through_all_stages_then_clamp() {
        let set = stages();
        let mut items = vec![Card::new("t1", "todo")];

        items = move_item(&items, "t1", Direction::Next, &set);
        assert_eq!(stage_of(&items, "t1"), "in-progress");

        items = move_item(&items, "t1", Direction::Next, &set);
        assert_eq!(stage_of(&items, "t1"), "done");

        // Further "next" is a no-op, not an error.
        items = move_item(&items, "t1", Direction::Next, &set);
        assert_eq!(stage_of(&items, "t1"), "done");
    }

    #[test]
    fn prev_clamps_at_first_stage() {
        let set = stages();
        let items = vec![Card::new("t1", "todo")];
        let moved = move_item(&items, "t1", Direction::Prev, &set);
        assert_eq!(stage_of(&moved, "t1"), "todo");
    }

    #[test]
    fn move_then_inverse_round_trips() {
        let set = stages();
        let items = vec![Card::new("t1", "in-progress")];
        let there = move_item(&items, "t1", Direction::Next, &set);
        let back = move_item(&there, "t1", Direction::Next.inverse(), &set);
        assert_eq!(stage_of(&back, "t1"), "in-progress");
    }

    #[test]
    fn unknown_item_id_is_a_no_op() {
        let set = stages();
        let items = vec![Card::new("t1", "todo")];
        let moved = move_item(&items, "ghost", Direction::Next, &set);
        assert_eq!(moved, items);
    }

    #[test]
    fn unknown_current_stage_is_a_no_op() {
        let set = stages();
        let items = vec![Card::new("t1", "review")];
        let moved = move_item(&items, "t1", Direction::Next, &set);
        assert_eq!(stage_of(&moved, "t1"), "review");
    }

    #[test]
    fn move_does_not_mutate_input() {
        let set = stages();
        let items = vec![Card::new("t1", "todo"), Card::new("t2", "done")];
        let moved = move_item(&items, "t1", Direction::Next, &set);

        assert_eq!(stage_of(&items, "t1"), "todo");
        assert_eq!(stage_of(&moved, "t1"), "in-progress");
        // Unrelated items come through untouched.
        assert_eq!(stage_of(&moved, "t2"), "done");
    }

    #[test]
    fn strict_mode_reports_unknown_item() {
        let set = stages();
        let items = vec![Card::new("t1", "todo")];
        assert_eq!(
            try_move_item(&items, "ghost", Direction::Next, &set),
            Err(PipelineError::UnknownItem("ghost".into()))
        );
    }

    #[test]
    fn strict_mode_reports_unknown_stage() {
        let set = stages();
        let items = vec![Card::new("t1", "review")];
        assert_eq!(
            try_move_item(&items, "t1", Direction::Next, &set),
            Err(PipelineError::UnknownStage {
                item: "t1".into(),
                stage: "review".into()
            })
        );
    }

    #[test]
    fn strict_mode_still_clamps_at_boundary() {
        let set = stages();
        let items = vec![Card::new("t1", "done")];
        let moved = try_move_item(&items, "t1", Direction::Next, &set).unwrap();
        assert_eq!(stage_of(&moved, "t1"), "done");
    }

    #[test]
    fn tasks_ride_the_pipeline_by_status() {
        let set = stages();
        let mut task = hq_core::task::Task::new("t1", "Fix navigation bug");
        task.status = TaskStatus::InProgress;

        let items = vec![task];
        let moved = move_item(&items, "t1", Direction::Next, &set);
        assert_eq!(moved[0].status, TaskStatus::Done);

        let back = move_item(&moved, "t1", Direction::Prev, &set);
        assert_eq!(back[0].status, TaskStatus::InProgress);
    }

    #[test]
    fn content_items_ride_the_pipeline_by_stage() {
        let set = StageSet::new(vec![
            Stage::new("ideas", "Ideas"),
            Stage::new("script", "Script"),
            Stage::new("thumbnail", "Thumbnail"),
            Stage::new("filming", "Filming"),
            Stage::new("published", "Published"),
        ])
        .unwrap();

        let item = hq_core::content::ContentItem::new("c1", "AI Workflow Tutorial");
        let items = vec![item];
        let moved = move_item(&items, "c1", Direction::Next, &set);
        assert_eq!(moved[0].stage, hq_core::enums::ContentStage::Script);
    }

    #[test]
    fn direction_parsing() {
        assert_eq!("next".parse::<Direction>(), Ok(Direction::Next));
        assert_eq!("prev".parse::<Direction>(), Ok(Direction::Prev));
        assert!("up".parse::<Direction>().is_err());
    }
}
