//! REST API Client
//!
//! Browser bindings to the inventory backend, organized by domain.
//! `HttpApi` implements [`InventoryApi`] over `reqwest` (fetch on wasm32).

mod containers;
mod csrf;
mod items;

use async_trait::async_trait;
use inventory_core::{
    ApiError, ContainerContents, ContainerId, ContainerSummary, CsrfToken, InventoryApi, NewItem,
    SearchResult,
};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;

use csrf::CSRF_HEADER;

/// HTTP implementation of the backend seam
#[derive(Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    config: AppConfig,
}

impl HttpApi {
    pub fn new(config: AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

#[async_trait(?Send)]
impl InventoryApi for HttpApi {
    async fn search_containers(&self, query: &str) -> Result<Vec<SearchResult>, ApiError> {
        containers::search_containers(self, query).await
    }

    async fn acquire_csrf_token(&self) -> Result<CsrfToken, ApiError> {
        csrf::acquire_csrf_token(self).await
    }

    async fn create_item(&self, token: &CsrfToken, item: &NewItem) -> Result<(), ApiError> {
        items::create_item(self, token, item).await
    }

    async fn get_container(&self, id: ContainerId) -> Result<ContainerSummary, ApiError> {
        containers::get_container(self, id).await
    }

    async fn get_contents(&self, parent: Option<ContainerId>) -> Result<ContainerContents, ApiError> {
        containers::get_contents(self, parent).await
    }
}

// ========================
// Response helpers
// ========================

fn network_error(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Turn a non-2xx response into [`ApiError::Rejected`] carrying the body text
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Rejected {
        status: status.as_u16(),
        body,
    })
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
