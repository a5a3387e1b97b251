use log::{debug, error, info, warn};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;

use crate::error::ApiError;

/// Sends one request and turns any non-2xx status into `ApiError::Http`.
/// Session cookies are attached by the client's cookie store.
pub async fn execute_request<T: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: &str,
    json_body: Option<&T>,
) -> Result<Response, ApiError> {
    let mut request_builder = client.request(method.clone(), url);
    if let Some(body) = json_body {
        request_builder = request_builder.json(body);
    }

    debug!("Sending {} request to {}", method, url);
    let start_time = std::time::Instant::now();

    let response = match request_builder.send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Failed HTTP request to {}: {}", url, e);
            if let Some(source) = e.source() {
                error!("Error source: {:?}", source);
            }
            if e.is_connect() {
                error!("Connection error");
            }
            return Err(ApiError::Transport(e));
        }
    };

    let status = response.status();
    info!(
        "{} {} -> {} in {:?}",
        method,
        url,
        status,
        start_time.elapsed()
    );

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("{} {} failed with status {}: {}", method, url, status, body);
        return Err(ApiError::Http {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response)
}

/// Request without a body.
pub async fn execute_empty(
    client: &Client,
    method: Method,
    url: &str,
) -> Result<Response, ApiError> {
    execute_request::<()>(client, method, url, None).await
}

/// Reads the body as text first so a bad payload can be reported verbatim.
pub async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        error!("Failed to parse response: {}, data: {}", e, text);
        ApiError::Decode(format!("{e}: {text}"))
    })
}
