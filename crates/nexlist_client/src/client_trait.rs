use async_trait::async_trait;
use nexlist_core::{Bucket, Memo, MemoSaved, NewTodo, TodoId, TodoItem};

use crate::error::ApiError;

/// Todo endpoints. Each method is exactly one request.
#[async_trait]
pub trait TodoApi: Send + Sync {
    async fn list_todos(&self, bucket: Bucket) -> Result<Vec<TodoItem>, ApiError>;

    async fn create_todo(&self, todo: NewTodo) -> Result<TodoItem, ApiError>;

    async fn update_todo(&self, id: TodoId, todo: NewTodo) -> Result<TodoItem, ApiError>;

    async fn set_completed(&self, id: TodoId, is_done: bool) -> Result<(), ApiError>;

    async fn move_todo(&self, id: TodoId, bucket: Bucket) -> Result<TodoItem, ApiError>;

    async fn delete_todo(&self, id: TodoId) -> Result<(), ApiError>;

    async fn delete_all_todos(&self) -> Result<(), ApiError>;
}

/// Session endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `false` on any failure, including transport errors.
    async fn is_logged_in(&self) -> bool;

    /// Page the browser is sent to for the external login.
    fn login_url(&self) -> String;

    /// Whether the server answered 2xx.
    async fn logout(&self) -> Result<bool, ApiError>;
}

/// Memo pad endpoints.
#[async_trait]
pub trait MemoApi: Send + Sync {
    /// `None` when the user has no memo yet.
    async fn get_memo(&self) -> Result<Option<Memo>, ApiError>;

    async fn create_memo(&self, content: String) -> Result<Memo, ApiError>;

    async fn update_memo(&self, content: String) -> Result<MemoSaved, ApiError>;
}
