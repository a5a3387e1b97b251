use std::sync::Arc;

use nexlist_core::{Memo, MemoContent, MemoSaved};
use reqwest::{Client, Method};

use crate::api::client::Endpoints;
use crate::error::ApiError;
use crate::utils::http_utils::{decode_json, execute_empty, execute_request};

#[derive(Debug, Clone)]
pub(crate) struct MemoHandler {
    client: Arc<Client>,
    endpoints: Endpoints,
}

impl MemoHandler {
    pub(crate) fn new(client: Arc<Client>, endpoints: Endpoints) -> Self {
        MemoHandler { client, endpoints }
    }

    pub(crate) async fn get(&self) -> Result<Option<Memo>, ApiError> {
        let url = self.endpoints.memo();
        match execute_empty(&self.client, Method::GET, &url).await {
            Ok(response) => decode_json(response).await.map(Some),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub(crate) async fn create(&self, content: String) -> Result<Memo, ApiError> {
        let url = self.endpoints.memo();
        let body = MemoContent { content };
        let response = execute_request(&self.client, Method::POST, &url, Some(&body)).await?;
        decode_json(response).await
    }

    pub(crate) async fn update(&self, content: String) -> Result<MemoSaved, ApiError> {
        let url = self.endpoints.memo();
        let body = MemoContent { content };
        let response = execute_request(&self.client, Method::PUT, &url, Some(&body)).await?;
        decode_json(response).await
    }
}
