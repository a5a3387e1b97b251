//! TodoStore - canonical cache of to-do items
//!
//! Holds every cached item once, in display order. Bucket views are derived
//! by filtering, so an item can never be visible in both buckets.

use chrono::NaiveDate;
use nexlist_core::{Bucket, TodoId, TodoItem};
use serde::Serialize;

/// A cached item plus client-only flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoEntry {
    #[serde(flatten)]
    pub item: TodoItem,
    /// Created in this session and not yet rendered. Never sent to the server.
    #[serde(rename = "isNew")]
    pub is_new: bool,
}

impl TodoEntry {
    fn loaded(item: TodoItem) -> Self {
        Self {
            item,
            is_new: false,
        }
    }

    pub fn id(&self) -> TodoId {
        self.item.id
    }

    pub fn bucket(&self) -> Bucket {
        self.item.bucket
    }
}

#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    entries: Vec<TodoEntry>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of one bucket, in order.
    pub fn view(&self, bucket: Bucket) -> Vec<TodoEntry> {
        self.entries
            .iter()
            .filter(|e| e.bucket() == bucket)
            .cloned()
            .collect()
    }

    pub fn len_in(&self, bucket: Bucket) -> usize {
        self.entries.iter().filter(|e| e.bucket() == bucket).count()
    }

    pub fn is_empty_in(&self, bucket: Bucket) -> bool {
        !self.entries.iter().any(|e| e.bucket() == bucket)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    fn get_mut(&mut self, id: TodoId) -> Option<&mut TodoEntry> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }

    /// Replace a bucket's contents with a server listing. Ids cached in the
    /// other bucket are moved rather than duplicated.
    pub fn replace_bucket(&mut self, bucket: Bucket, items: Vec<TodoItem>) {
        self.entries
            .retain(|e| e.bucket() != bucket && !items.iter().any(|i| i.id == e.id()));

        for mut item in items {
            if self.get(item.id).is_some() {
                tracing::warn!(id = %item.id, "Duplicate id in listing, keeping first");
                continue;
            }
            item.bucket = bucket;
            self.entries.push(TodoEntry::loaded(item));
        }
    }

    /// Append a freshly created item, flagged as new.
    pub fn insert_new(&mut self, item: TodoItem) {
        self.remove(item.id);
        self.entries.push(TodoEntry {
            item,
            is_new: true,
        });
    }

    pub fn set_done(&mut self, id: TodoId, is_done: bool) -> bool {
        match self.get_mut(id) {
            Some(entry) => {
                entry.item.is_done = is_done;
                true
            }
            None => false,
        }
    }

    /// Patch text fields in place. Bucket membership and position are kept.
    pub fn patch(&mut self, id: TodoId, task: &str, due_date: Option<NaiveDate>) -> bool {
        match self.get_mut(id) {
            Some(entry) => {
                entry.item.task = task.to_string();
                entry.item.due_date = due_date;
                true
            }
            None => false,
        }
    }

    /// Take the server's post-move item: it leaves its old view and is
    /// appended to the end of its new one.
    pub fn relocate(&mut self, item: TodoItem) {
        let is_new = self.remove(item.id).is_some_and(|e| e.is_new);
        self.entries.push(TodoEntry { item, is_new });
    }

    pub fn remove(&mut self, id: TodoId) -> Option<TodoEntry> {
        let index = self.entries.iter().position(|e| e.id() == id)?;
        Some(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshot of one bucket, then clear `is_new` on what was returned.
    pub fn render(&mut self, bucket: Bucket) -> Vec<TodoEntry> {
        let snapshot = self.view(bucket);
        for entry in self.entries.iter_mut().filter(|e| e.bucket() == bucket) {
            entry.is_new = false;
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, task: &str, bucket: Bucket) -> TodoItem {
        TodoItem::new(TodoId(id), task, bucket)
    }

    fn ids(entries: &[TodoEntry]) -> Vec<i64> {
        entries.iter().map(|e| e.id().0).collect()
    }

    #[test]
    fn test_views_are_disjoint() {
        let mut store = TodoStore::new();
        store.replace_bucket(Bucket::Today, vec![item(1, "a", Bucket::Today)]);
        store.replace_bucket(Bucket::Storage, vec![item(2, "b", Bucket::Storage)]);

        assert_eq!(ids(&store.view(Bucket::Today)), vec![1]);
        assert_eq!(ids(&store.view(Bucket::Storage)), vec![2]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_replace_bucket_keeps_other_bucket_and_moves_duplicates() {
        let mut store = TodoStore::new();
        store.replace_bucket(
            Bucket::Storage,
            vec![item(1, "a", Bucket::Storage), item(2, "b", Bucket::Storage)],
        );
        store.replace_bucket(Bucket::Today, vec![item(2, "b", Bucket::Today)]);

        assert_eq!(ids(&store.view(Bucket::Storage)), vec![1]);
        assert_eq!(ids(&store.view(Bucket::Today)), vec![2]);
    }

    #[test]
    fn test_replace_bucket_drops_repeated_ids() {
        let mut store = TodoStore::new();
        store.replace_bucket(
            Bucket::Today,
            vec![item(1, "first", Bucket::Today), item(1, "again", Bucket::Today)],
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(TodoId(1)).unwrap().item.task, "first");
    }

    #[test]
    fn test_insert_new_then_render_clears_flag() {
        let mut store = TodoStore::new();
        store.insert_new(item(3, "c", Bucket::Today));
        assert!(store.get(TodoId(3)).unwrap().is_new);

        let first = store.render(Bucket::Today);
        assert!(first[0].is_new);
        let second = store.render(Bucket::Today);
        assert!(!second[0].is_new);
    }

    #[test]
    fn test_render_only_touches_its_bucket() {
        let mut store = TodoStore::new();
        store.insert_new(item(1, "a", Bucket::Today));
        store.insert_new(item(2, "b", Bucket::Storage));

        store.render(Bucket::Today);
        assert!(!store.get(TodoId(1)).unwrap().is_new);
        assert!(store.get(TodoId(2)).unwrap().is_new);
    }

    #[test]
    fn test_patch_keeps_position_and_bucket() {
        let mut store = TodoStore::new();
        store.replace_bucket(
            Bucket::Today,
            vec![item(1, "a", Bucket::Today), item(2, "b", Bucket::Today)],
        );
        let due = NaiveDate::from_ymd_opt(2024, 2, 29);
        assert!(store.patch(TodoId(1), "renamed", due));

        let view = store.view(Bucket::Today);
        assert_eq!(ids(&view), vec![1, 2]);
        assert_eq!(view[0].item.task, "renamed");
        assert_eq!(view[0].item.due_date, due);
        assert!(!store.patch(TodoId(99), "x", None));
    }

    #[test]
    fn test_relocate_appends_to_destination() {
        let mut store = TodoStore::new();
        store.replace_bucket(Bucket::Today, vec![item(1, "a", Bucket::Today)]);
        store.replace_bucket(
            Bucket::Storage,
            vec![item(2, "b", Bucket::Storage), item(3, "c", Bucket::Storage)],
        );

        store.relocate(item(1, "a", Bucket::Storage));

        assert!(store.is_empty_in(Bucket::Today));
        assert_eq!(ids(&store.view(Bucket::Storage)), vec![2, 3, 1]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = TodoStore::new();
        store.replace_bucket(Bucket::Today, vec![item(1, "a", Bucket::Today)]);

        assert!(store.remove(TodoId(1)).is_some());
        assert!(store.remove(TodoId(1)).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_entry_serializes_is_new_flag() {
        let mut store = TodoStore::new();
        store.insert_new(item(4, "d", Bucket::Storage));
        let value = serde_json::to_value(store.get(TodoId(4)).unwrap()).unwrap();
        assert_eq!(value["isNew"], true);
        assert_eq!(value["today"], false);
        assert_eq!(value["task"], "d");
    }
}
