//! Test utilities shared by the client integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use nexlist_client::{Config, NexListClient};

/// Creates a client pointed at a mock server, optionally with a session token.
pub fn create_test_client(base: &str, token: Option<&str>) -> NexListClient {
    let config = Config {
        api_base: base.to_string(),
        access_token: token.map(str::to_string),
        ..Config::default()
    };
    NexListClient::new(&config).expect("Failed to build NexList client")
}

/// Base URL of a local port with nothing listening on it.
pub fn unreachable_base_url() -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind a local port");
    let port = listener.local_addr().expect("No local address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Counter for tracking request attempts in tests
#[derive(Debug, Clone)]
pub struct RequestCounter {
    count: Arc<AtomicUsize>,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn increment(&self) -> usize {
        self.count.fetch_add(1, Ordering::SeqCst)
    }

    pub fn get(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Default for RequestCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Mock response builder for tests
pub struct MockResponseBuilder;

impl MockResponseBuilder {
    /// A todo as the backend serializes it
    pub fn todo(id: i64, task: &str, due_date: Option<&str>, today: bool) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "task": task,
            "due_date": due_date,
            "is_done": false,
            "today": today
        })
    }

    pub fn memo(content: &str) -> serde_json::Value {
        serde_json::json!({
            "user_id": 1,
            "content": content,
            "saved_at": "2024-05-01"
        })
    }

    pub fn not_found() -> serde_json::Value {
        serde_json::json!({ "detail": "Todo Not Found" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_counter() {
        let counter = RequestCounter::new();
        assert_eq!(counter.get(), 0);

        counter.increment();
        counter.increment();
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_mock_response_builder() {
        let todo = MockResponseBuilder::todo(3, "Write report", None, false);
        assert_eq!(todo["id"], 3);
        assert_eq!(todo["today"], false);
        assert!(todo["due_date"].is_null());

        let memo = MockResponseBuilder::memo("hello");
        assert_eq!(memo["content"], "hello");
    }
}
