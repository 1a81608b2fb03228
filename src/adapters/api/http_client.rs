//! HTTP client for the profile API and suggestion endpoint.
//!
//! Non-success statuses become `ApiError::Status` / `SuggestionError::Status`
//! with whatever detail the server put in the body. No client-side timeout
//! is configured; a request that never resolves keeps its caller waiting.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::domain::foundation::ProfileId;
use crate::domain::profile::Profile;
use crate::domain::role::MasterKra;
use crate::ports::{
    ApiError, ObjectiveSuggester, ProfileApi, ProfileSummary, SaveReceipt, SuggestionError,
};

const PROFILES_PATH: &str = "/api/profiles";
const MASTER_KRAS_PATH: &str = "/api/kras_master";
const GENERATE_OBJECTIVE_PATH: &str = "/api/generate-objective";

#[derive(Debug, Serialize)]
struct GenerateObjectiveRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateObjectiveResponse {
    #[serde(default)]
    text: Option<String>,
}

/// reqwest-backed implementation of [`ProfileApi`] and [`ObjectiveSuggester`].
#[derive(Debug, Clone)]
pub struct HttpPrismClient {
    config: ApiConfig,
    client: Client,
}

impl HttpPrismClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("prism-profiler/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::with_client(config, client))
    }

    /// Uses an existing reqwest client.
    pub fn with_client(config: ApiConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    async fn get(&self, url: String) -> Result<Response, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        check_status(response).await
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_connect() {
        ApiError::Transport(format!("Connection failed: {}", e))
    } else {
        ApiError::Transport(e.to_string())
    }
}

/// Passes successful responses through; turns anything else into
/// `ApiError::Status` carrying the body's `detail`/`error` field or raw text.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = error_detail(&body);
    tracing::warn!(status = status.as_u16(), %message, "profile API returned an error");
    Err(ApiError::status_code(status.as_u16(), message))
}

fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["detail", "message", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl ProfileApi for HttpPrismClient {
    async fn list_profiles(&self) -> Result<Vec<ProfileSummary>, ApiError> {
        let response = self.get(self.url(PROFILES_PATH)).await?;
        let summaries: Vec<ProfileSummary> = Self::read_json(response).await?;
        tracing::debug!(count = summaries.len(), "listed profiles");
        Ok(summaries)
    }

    async fn load_profile(&self, id: ProfileId) -> Result<Profile, ApiError> {
        let url = self.url(&format!("{}/{}", PROFILES_PATH, id));
        let response = self.get(url).await?;
        // Profile deserialization fills any missing section from defaults
        let profile: Profile = Self::read_json(response).await?;
        tracing::debug!(%id, "loaded profile");
        Ok(profile)
    }

    async fn save_profile(&self, profile: &Profile) -> Result<SaveReceipt, ApiError> {
        let url = self.url(PROFILES_PATH);
        tracing::debug!(%url, id = ?profile.id(), "POST profile");
        let response = self
            .client
            .post(&url)
            .json(profile)
            .send()
            .await
            .map_err(transport_error)?;
        let response = check_status(response).await?;
        let receipt: SaveReceipt = Self::read_json(response).await?;
        tracing::info!(id = %receipt.id, message = %receipt.message, "profile saved");
        Ok(receipt)
    }

    async fn list_master_kras(&self) -> Result<Vec<MasterKra>, ApiError> {
        let response = self.get(self.url(MASTER_KRAS_PATH)).await?;
        Self::read_json(response).await
    }
}

#[async_trait]
impl ObjectiveSuggester for HttpPrismClient {
    async fn suggest(&self, prompt: &str) -> Result<String, SuggestionError> {
        let url = self.url(GENERATE_OBJECTIVE_PATH);
        tracing::debug!(%url, prompt_len = prompt.len(), "requesting objective suggestion");
        let response = self
            .client
            .post(&url)
            .json(&GenerateObjectiveRequest { prompt })
            .send()
            .await
            .map_err(|e| SuggestionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "suggestion endpoint returned an error");
            return Err(SuggestionError::Status {
                status: status.as_u16(),
            });
        }

        let body: GenerateObjectiveResponse = response
            .json()
            .await
            .map_err(|e| SuggestionError::Malformed(e.to_string()))?;
        match body.text {
            Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            _ => Err(SuggestionError::Malformed("response has no text".to_string())),
        }
    }
}
