use std::sync::Arc;

use log::{debug, info, warn};
use reqwest::{Client, Method};

use crate::api::client::Endpoints;
use crate::error::ApiError;
use crate::utils::http_utils::execute_empty;

// Struct for handling the cookie session. The login itself happens in the
// browser against the external provider.
#[derive(Debug, Clone)]
pub(crate) struct AuthHandler {
    client: Arc<Client>,
    endpoints: Endpoints,
}

impl AuthHandler {
    pub(crate) fn new(client: Arc<Client>, endpoints: Endpoints) -> Self {
        AuthHandler { client, endpoints }
    }

    /// Any failure counts as logged out.
    pub(crate) async fn is_logged_in(&self) -> bool {
        let url = self.endpoints.auth_me();
        match execute_empty(&self.client, Method::GET, &url).await {
            Ok(_) => true,
            Err(ApiError::Http { status, .. }) => {
                debug!("Auth check answered {status}, treating as logged out");
                false
            }
            Err(e) => {
                warn!("Auth check failed, treating as logged out: {e}");
                false
            }
        }
    }

    pub(crate) fn login_url(&self) -> String {
        self.endpoints.auth_login()
    }

    pub(crate) async fn logout(&self) -> Result<bool, ApiError> {
        let url = self.endpoints.auth_logout();
        match execute_empty(&self.client, Method::POST, &url).await {
            Ok(_) => {
                info!("Logged out");
                Ok(true)
            }
            Err(ApiError::Http { status, .. }) => {
                warn!("Logout answered {status}");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
