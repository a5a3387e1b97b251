//! Memo pad wire types. One memo per user.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `GET /memo/` and `POST /memo/` response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Memo {
    pub user_id: i64,
    pub content: String,
    #[serde(default)]
    pub saved_at: Option<NaiveDate>,
}

/// Body of `POST /memo/` and `PUT /memo/`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MemoContent {
    pub content: String,
}

/// `PUT /memo/` response.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoSaved {
    pub saved_at: NaiveDate,
}
