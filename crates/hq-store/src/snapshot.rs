//! Generic id-keyed collection with read-all / write-all / patch operations.

use hq_core::agent::Agent;
use hq_core::content::ContentItem;
use hq_core::event::CalendarEvent;
use hq_core::memory::Memory;
use hq_core::task::Task;

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("no entity with id '{0}'")]
    UnknownId(String),
}

/// Anything with a stable string id can live in a [`Snapshot`].
pub trait Entity {
    fn entity_id(&self) -> &str;
}

impl Entity for Task {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl Entity for ContentItem {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl Entity for CalendarEvent {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl Entity for Memory {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl Entity for Agent {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

/// An ordered, id-keyed collection of entities.
///
/// Insertion order is preserved (the boards rely on input order when
/// grouping), so this is a `Vec` with id lookups rather than a map.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    items: Vec<T>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> Snapshot<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Read-all: the current snapshot, in insertion order.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|i| i.entity_id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Inserts an entity, replacing any existing one with the same id
    /// (the replacement keeps its original position).
    pub fn insert(&mut self, item: T) {
        match self
            .items
            .iter()
            .position(|i| i.entity_id() == item.entity_id())
        {
            Some(pos) => self.items[pos] = item,
            None => self.items.push(item),
        }
    }

    /// Write-all: atomically replaces the whole snapshot. This is the seam
    /// where a pipeline result becomes the new state.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Applies a mutation to the entity with `id`.
    pub fn patch<F>(&mut self, id: &str, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut T),
    {
        match self.items.iter_mut().find(|i| i.entity_id() == id) {
            Some(item) => {
                f(item);
                Ok(())
            }
            None => Err(StoreError::UnknownId(id.to_owned())),
        }
    }

    /// Removes and returns the entity with `id`.
    pub fn remove(&mut self, id: &str) -> Result<T, StoreError> {
        match self.items.iter().position(|i| i.entity_id() == id) {
            Some(pos) => Ok(self.items.remove(pos)),
            None => Err(StoreError::UnknownId(id.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hq_core::enums::TaskStatus;
    use pretty_assertions::assert_eq;

    fn tasks() -> Snapshot<Task> {
        Snapshot::new(vec![Task::new("1", "First"), Task::new("2", "Second")])
    }

    #[test]
    fn get_and_contains() {
        let snap = tasks();
        assert!(snap.contains("1"));
        assert_eq!(snap.get("2").unwrap().title, "Second");
        assert!(snap.get("3").is_none());
    }

    #[test]
    fn insert_appends_new_and_replaces_existing_in_place() {
        let mut snap = tasks();
        snap.insert(Task::new("3", "Third"));
        assert_eq!(snap.len(), 3);

        snap.insert(Task::new("1", "First, renamed"));
        assert_eq!(snap.len(), 3);
        // Replacement keeps position.
        assert_eq!(snap.all()[0].title, "First, renamed");
    }

    #[test]
    fn replace_all_swaps_the_snapshot() {
        let mut snap = tasks();
        snap.replace_all(vec![Task::new("9", "Only")]);
        assert_eq!(snap.len(), 1);
        assert!(snap.contains("9"));
    }

    #[test]
    fn patch_mutates_matching_entity() {
        let mut snap = tasks();
        snap.patch("1", |t| t.status = TaskStatus::Done).unwrap();
        assert_eq!(snap.get("1").unwrap().status, TaskStatus::Done);
    }

    #[test]
    fn patch_unknown_id_errors() {
        let mut snap = tasks();
        let err = snap.patch("ghost", |_| {}).unwrap_err();
        assert_eq!(err, StoreError::UnknownId("ghost".into()));
    }

    #[test]
    fn remove_returns_the_entity() {
        let mut snap = tasks();
        let removed = snap.remove("1").unwrap();
        assert_eq!(removed.title, "First");
        assert_eq!(snap.len(), 1);
        assert!(snap.remove("1").is_err());
    }
}
