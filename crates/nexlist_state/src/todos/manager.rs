//! TodoManager - keeps the local todo cache in sync with the backend
//!
//! Every mutation is one request. The cache is changed only after the
//! server confirms; a failed request leaves it exactly as it was. The store
//! lock is never held across a request, so several operations may be in
//! flight at once and the last response to arrive wins.

use std::sync::Arc;

use chrono::NaiveDate;
use nexlist_client::{AuthApi, TodoApi};
use nexlist_core::{Bucket, NewTodo, TodoId, TodoItem};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::error::{validate_task, TodoError};
use super::store::{TodoEntry, TodoStore};

pub struct TodoManager {
    api: Arc<dyn TodoApi>,
    store: RwLock<TodoStore>,
}

impl TodoManager {
    pub fn new(api: Arc<dyn TodoApi>) -> Self {
        Self {
            api,
            store: RwLock::new(TodoStore::new()),
        }
    }

    /// Items of a bucket. Served from the cache when the cached view is
    /// non-empty, otherwise fetched once.
    pub async fn list(&self, bucket: Bucket) -> Result<Vec<TodoEntry>, TodoError> {
        {
            let store = self.store.read().await;
            if !store.is_empty_in(bucket) {
                debug!(%bucket, "Serving todos from cache");
                return Ok(store.view(bucket));
            }
        }
        self.refresh(bucket).await
    }

    /// Fetch a bucket regardless of what is cached.
    pub async fn refresh(&self, bucket: Bucket) -> Result<Vec<TodoEntry>, TodoError> {
        let items = self.api.list_todos(bucket).await.map_err(|e| {
            warn!(%bucket, "Failed to list todos: {e}");
            e
        })?;

        let mut store = self.store.write().await;
        store.replace_bucket(bucket, items);
        debug!(%bucket, count = store.len_in(bucket), "Loaded todos");
        Ok(store.view(bucket))
    }

    pub async fn create(
        &self,
        task: &str,
        due_date: Option<NaiveDate>,
        bucket: Bucket,
    ) -> Result<TodoItem, TodoError> {
        let task = validate_task(task)?;

        let created = self
            .api
            .create_todo(NewTodo::new(task, due_date, bucket))
            .await?;

        info!(id = %created.id, bucket = %created.bucket, "Created todo");
        self.store.write().await.insert_new(created.clone());
        Ok(created)
    }

    /// Sends the inverse of the cached `is_done` and returns the new value.
    pub async fn toggle(&self, id: TodoId) -> Result<bool, TodoError> {
        let is_done = {
            let store = self.store.read().await;
            let entry = store.get(id).ok_or(TodoError::UnknownTodo(id))?;
            !entry.item.is_done
        };

        self.api.set_completed(id, is_done).await?;

        if !self.store.write().await.set_done(id, is_done) {
            debug!(%id, "Toggled todo was removed while in flight");
        }
        Ok(is_done)
    }

    /// Change text and due date. Bucket membership is untouched, so the id
    /// must be cached.
    pub async fn update(
        &self,
        id: TodoId,
        task: &str,
        due_date: Option<NaiveDate>,
    ) -> Result<TodoItem, TodoError> {
        let task = validate_task(task)?;

        let bucket = self
            .store
            .read()
            .await
            .get(id)
            .map(TodoEntry::bucket)
            .ok_or(TodoError::UnknownTodo(id))?;
        let body = NewTodo::new(task, due_date, bucket);

        let updated = self.api.update_todo(id, body).await?;
        self.store
            .write()
            .await
            .patch(id, &updated.task, updated.due_date);
        Ok(updated)
    }

    /// Reassign the bucket. The cache only changes once the server confirms.
    pub async fn move_to(&self, id: TodoId, bucket: Bucket) -> Result<TodoItem, TodoError> {
        let moved = self.api.move_todo(id, bucket).await?;
        if moved.bucket != bucket {
            warn!(%id, requested = %bucket, actual = %moved.bucket, "Server placed todo elsewhere");
        }

        info!(%id, bucket = %moved.bucket, "Moved todo");
        self.store.write().await.relocate(moved.clone());
        Ok(moved)
    }

    /// Removing an id that is not cached is not an error.
    pub async fn delete(&self, id: TodoId) -> Result<(), TodoError> {
        self.api.delete_todo(id).await?;
        if self.store.write().await.remove(id).is_none() {
            debug!(%id, "Deleted todo was not cached");
        }
        Ok(())
    }

    pub async fn delete_all(&self) -> Result<(), TodoError> {
        self.api.delete_all_todos().await?;
        self.store.write().await.clear();
        Ok(())
    }

    pub async fn view(&self, bucket: Bucket) -> Vec<TodoEntry> {
        self.store.read().await.view(bucket)
    }

    /// Snapshot for display; entries returned here are no longer new.
    pub async fn render(&self, bucket: Bucket) -> Vec<TodoEntry> {
        self.store.write().await.render(bucket)
    }

    pub async fn get(&self, id: TodoId) -> Option<TodoEntry> {
        self.store.read().await.get(id).cloned()
    }

    /// Initial load: both buckets when logged in, an empty cache otherwise.
    pub async fn bootstrap(&self, auth: &dyn AuthApi) -> Result<bool, TodoError> {
        if !auth.is_logged_in().await {
            info!("Not logged in");
            self.clear().await;
            return Ok(false);
        }

        for bucket in Bucket::ALL {
            self.refresh(bucket).await?;
        }
        Ok(true)
    }

    pub async fn logout(&self, auth: &dyn AuthApi) -> Result<bool, TodoError> {
        let ok = auth.logout().await?;
        self.clear().await;
        Ok(ok)
    }

    pub async fn clear(&self) {
        self.store.write().await.clear();
    }
}
