use std::sync::Arc;

use async_trait::async_trait;
use log::info;
use nexlist_core::{Bucket, Config, Memo, MemoSaved, NewTodo, TodoId, TodoItem};
use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Proxy};
use url::Url;

use crate::api::{MemoHandler, TodosHandler};
use crate::auth::AuthHandler;
use crate::client_trait::{AuthApi, MemoApi, TodoApi};
use crate::error::ApiError;

pub(crate) const SESSION_COOKIE: &str = "access_token";

/// URLs of every backend route, derived from `api_base`.
#[derive(Debug, Clone)]
pub(crate) struct Endpoints {
    base: String,
}

impl Endpoints {
    pub(crate) fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn todos(&self) -> String {
        format!("{}/todos/", self.base)
    }

    pub(crate) fn todos_in(&self, bucket: Bucket) -> String {
        format!("{}/todos/?today={}", self.base, bucket.is_today())
    }

    pub(crate) fn todo(&self, id: TodoId) -> String {
        format!("{}/todos/{}", self.base, id)
    }

    pub(crate) fn todo_completed(&self, id: TodoId) -> String {
        format!("{}/todos/{}/completed", self.base, id)
    }

    pub(crate) fn todo_today(&self, id: TodoId) -> String {
        format!("{}/todos/{}/today", self.base, id)
    }

    pub(crate) fn auth_me(&self) -> String {
        format!("{}/auth/me", self.base)
    }

    pub(crate) fn auth_login(&self) -> String {
        format!("{}/auth/login/google", self.base)
    }

    pub(crate) fn auth_logout(&self) -> String {
        format!("{}/auth/logout", self.base)
    }

    pub(crate) fn memo(&self) -> String {
        format!("{}/memo/", self.base)
    }
}

/// Client for the NexList backend. Holds the cookie session shared by all
/// handlers.
#[derive(Debug, Clone)]
pub struct NexListClient {
    todos_handler: TodosHandler,
    auth_handler: AuthHandler,
    memo_handler: MemoHandler,
    jar: Arc<Jar>,
    base_url: Url,
}

impl NexListClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let base_url = Url::parse(config.base_url())?;
        let jar = Arc::new(Jar::default());

        let client = Arc::new(Self::build_http_client(config, Arc::clone(&jar))?);
        let endpoints = Endpoints::new(config.base_url());

        let this = NexListClient {
            todos_handler: TodosHandler::new(Arc::clone(&client), endpoints.clone()),
            auth_handler: AuthHandler::new(Arc::clone(&client), endpoints.clone()),
            memo_handler: MemoHandler::new(client, endpoints),
            jar,
            base_url,
        };

        if let Some(token) = config.access_token.as_deref() {
            this.set_session_token(token);
        }
        info!("NexList client ready for {}", this.base_url);
        Ok(this)
    }

    fn build_http_client(config: &Config, jar: Arc<Jar>) -> Result<Client, ApiError> {
        let mut builder = Client::builder()
            .default_headers(Self::get_default_headers())
            .cookie_provider(jar);
        if !config.http_proxy.is_empty() {
            builder = builder.proxy(Proxy::http(&config.http_proxy)?);
        }
        if !config.https_proxy.is_empty() {
            builder = builder.proxy(Proxy::https(&config.https_proxy)?);
        }
        Ok(builder.build()?)
    }

    pub fn get_default_headers() -> HeaderMap {
        let mut header = HeaderMap::new();
        header.insert(ACCEPT, HeaderValue::from_static("application/json"));
        header
    }

    /// Seeds the session cookie, as a browser would hold it after login.
    pub fn set_session_token(&self, token: &str) {
        let cookie = format!("{}={}; Path=/", SESSION_COOKIE, token.trim());
        self.jar.add_cookie_str(&cookie, &self.base_url);
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl TodoApi for NexListClient {
    async fn list_todos(&self, bucket: Bucket) -> Result<Vec<TodoItem>, ApiError> {
        self.todos_handler.list(bucket).await
    }

    async fn create_todo(&self, todo: NewTodo) -> Result<TodoItem, ApiError> {
        self.todos_handler.create(&todo).await
    }

    async fn update_todo(&self, id: TodoId, todo: NewTodo) -> Result<TodoItem, ApiError> {
        self.todos_handler.update(id, &todo).await
    }

    async fn set_completed(&self, id: TodoId, is_done: bool) -> Result<(), ApiError> {
        self.todos_handler.set_completed(id, is_done).await
    }

    async fn move_todo(&self, id: TodoId, bucket: Bucket) -> Result<TodoItem, ApiError> {
        self.todos_handler.set_bucket(id, bucket).await
    }

    async fn delete_todo(&self, id: TodoId) -> Result<(), ApiError> {
        self.todos_handler.delete(id).await
    }

    async fn delete_all_todos(&self) -> Result<(), ApiError> {
        self.todos_handler.delete_all().await
    }
}

#[async_trait]
impl AuthApi for NexListClient {
    async fn is_logged_in(&self) -> bool {
        self.auth_handler.is_logged_in().await
    }

    fn login_url(&self) -> String {
        self.auth_handler.login_url()
    }

    async fn logout(&self) -> Result<bool, ApiError> {
        self.auth_handler.logout().await
    }
}

#[async_trait]
impl MemoApi for NexListClient {
    async fn get_memo(&self) -> Result<Option<Memo>, ApiError> {
        self.memo_handler.get().await
    }

    async fn create_memo(&self, content: String) -> Result<Memo, ApiError> {
        self.memo_handler.create(content).await
    }

    async fn update_memo(&self, content: String) -> Result<MemoSaved, ApiError> {
        self.memo_handler.update(content).await
    }
}
