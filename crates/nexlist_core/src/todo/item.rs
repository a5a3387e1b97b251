//! TodoItem - a to-do entry as the backend returns it

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bucket::Bucket;

/// Backend-assigned identifier. Opaque to the client, never reused.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TodoId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A to-do item mirrored from the server.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,

    pub task: String,

    /// Calendar date, `YYYY-MM-DD` on the wire.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub is_done: bool,

    /// Serialized as the boolean `today` flag.
    #[serde(rename = "today", default)]
    pub bucket: Bucket,
}

impl TodoItem {
    pub fn new(id: TodoId, task: impl Into<String>, bucket: Bucket) -> Self {
        Self {
            id,
            task: task.into(),
            due_date: None,
            is_done: false,
            bucket,
        }
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Display helper: past due and not yet done. Has no effect on behavior.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_done && self.due_date.is_some_and(|due| due < today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_deserialize_backend_response() {
        let json = r#"{"id": 5, "task": "Buy milk", "due_date": "2024-01-01", "is_done": false, "today": true}"#;
        let item: TodoItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, TodoId(5));
        assert_eq!(item.due_date, Some(date("2024-01-01")));
        assert_eq!(item.bucket, Bucket::Today);
        assert!(!item.is_done);
    }

    #[test]
    fn test_null_due_date_and_missing_flags() {
        let json = r#"{"id": 7, "task": "Read", "due_date": null}"#;
        let item: TodoItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.due_date, None);
        assert!(!item.is_done);
    }

    #[test]
    fn test_serialize_uses_today_flag() {
        let item = TodoItem::new(TodoId(1), "Write", Bucket::Storage).with_due_date(date("2024-03-09"));
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["today"], false);
        assert_eq!(value["due_date"], "2024-03-09");
        assert!(value.get("bucket").is_none());
    }

    #[test]
    fn test_overdue_ignores_done_items() {
        let mut item = TodoItem::new(TodoId(1), "Pay rent", Bucket::Today).with_due_date(date("2024-01-01"));
        assert!(item.is_overdue(date("2024-01-02")));
        assert!(!item.is_overdue(date("2024-01-01")));

        item.is_done = true;
        assert!(!item.is_overdue(date("2024-01-02")));
    }
}
