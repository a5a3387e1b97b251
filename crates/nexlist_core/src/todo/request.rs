//! Request bodies for the todo endpoints

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bucket::Bucket;

/// Body of `POST /todos/` and `PUT /todos/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NewTodo {
    pub task: String,
    pub due_date: Option<NaiveDate>,
    #[serde(rename = "today", skip_serializing_if = "Option::is_none", default)]
    pub bucket: Option<Bucket>,
}

impl NewTodo {
    pub fn new(task: impl Into<String>, due_date: Option<NaiveDate>, bucket: Bucket) -> Self {
        Self {
            task: task.into(),
            due_date,
            bucket: Some(bucket),
        }
    }
}

/// Body of `PUT /todos/{id}/completed`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletedState {
    pub is_done: bool,
}

/// Body of `PUT /todos/{id}/today`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TodayState {
    pub today: bool,
}
