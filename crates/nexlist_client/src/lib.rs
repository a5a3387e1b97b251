pub mod api;
pub mod auth;
pub mod client_trait;
pub mod error;
pub mod utils;

pub use api::client::NexListClient;
pub use client_trait::{AuthApi, MemoApi, TodoApi};
pub use error::ApiError;
pub use nexlist_core::Config;
