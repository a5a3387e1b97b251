use std::sync::Arc;

use log::debug;
use nexlist_core::{Bucket, CompletedState, NewTodo, TodayState, TodoId, TodoItem};
use reqwest::{Client, Method};

use crate::api::client::Endpoints;
use crate::error::ApiError;
use crate::utils::http_utils::{decode_json, execute_empty, execute_request};

// Struct for handling the /todos routes
#[derive(Debug, Clone)]
pub(crate) struct TodosHandler {
    client: Arc<Client>,
    endpoints: Endpoints,
}

impl TodosHandler {
    pub(crate) fn new(client: Arc<Client>, endpoints: Endpoints) -> Self {
        TodosHandler { client, endpoints }
    }

    pub(crate) async fn list(&self, bucket: Bucket) -> Result<Vec<TodoItem>, ApiError> {
        let url = self.endpoints.todos_in(bucket);
        let response = execute_empty(&self.client, Method::GET, &url).await?;
        let todos: Vec<TodoItem> = decode_json(response).await?;
        debug!("Fetched {} {} todos", todos.len(), bucket);
        Ok(todos)
    }

    pub(crate) async fn create(&self, todo: &NewTodo) -> Result<TodoItem, ApiError> {
        let url = self.endpoints.todos();
        let response = execute_request(&self.client, Method::POST, &url, Some(todo)).await?;
        decode_json(response).await
    }

    pub(crate) async fn update(&self, id: TodoId, todo: &NewTodo) -> Result<TodoItem, ApiError> {
        let url = self.endpoints.todo(id);
        let response = execute_request(&self.client, Method::PUT, &url, Some(todo)).await?;
        decode_json(response).await
    }

    /// The response body differs between backend versions, so it is ignored.
    pub(crate) async fn set_completed(&self, id: TodoId, is_done: bool) -> Result<(), ApiError> {
        let url = self.endpoints.todo_completed(id);
        let body = CompletedState { is_done };
        execute_request(&self.client, Method::PUT, &url, Some(&body)).await?;
        Ok(())
    }

    pub(crate) async fn set_bucket(&self, id: TodoId, bucket: Bucket) -> Result<TodoItem, ApiError> {
        let url = self.endpoints.todo_today(id);
        let body = TodayState {
            today: bucket.is_today(),
        };
        let response = execute_request(&self.client, Method::PUT, &url, Some(&body)).await?;
        decode_json(response).await
    }

    pub(crate) async fn delete(&self, id: TodoId) -> Result<(), ApiError> {
        let url = self.endpoints.todo(id);
        execute_empty(&self.client, Method::DELETE, &url).await?;
        Ok(())
    }

    pub(crate) async fn delete_all(&self) -> Result<(), ApiError> {
        let url = self.endpoints.todos();
        execute_empty(&self.client, Method::DELETE, &url).await?;
        Ok(())
    }
}
