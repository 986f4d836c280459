use gloo_net::http::Request;
use rivet_core::definition::{ComponentDefinition, ComponentSummary};
use rivet_core::{ApiError, ApiSuccess, HealthStatus};
use serde::de::DeserializeOwned;

const API_BASE: &str = "/api";

/// Client for the docs server's JSON API.
pub struct DocsClient;

impl DocsClient {
    async fn get<T: DeserializeOwned>(path: &str) -> Result<T, String> {
        let url = format!("{}{}", API_BASE, path);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if response.ok() {
            let result: ApiSuccess<T> = response.json().await.map_err(|e| e.to_string())?;
            Ok(result.data)
        } else {
            let error: ApiError = response
                .json()
                .await
                .unwrap_or_else(|_| ApiError::new("unknown", "An unknown error occurred"));
            Err(error.message)
        }
    }

    pub async fn list_components() -> Result<Vec<ComponentSummary>, String> {
        Self::get("/components").await
    }

    pub async fn get_component(key: &str) -> Result<ComponentDefinition, String> {
        Self::get(&format!("/components/{}", key)).await
    }

    pub async fn health() -> Result<HealthStatus, String> {
        Self::get("/health").await
    }
}
