use std::time::Duration;

use reqwest::{
    header::{
        ACCEPT,
        USER_AGENT,
    },
    Client,
    RequestBuilder,
};

use super::{
    models::{
        ApiResponse,
        BackendErrorPayload,
        CropData,
    },
    AgriError,
};
use crate::config::AppConfig;

pub const ANALYZE_PATH: &str = "/api/analyze";
pub const RETRAIN_PATH: &str = "/api/retrain";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Analyze,
    Retrain,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Analyze => "analyze",
            Action::Retrain => "retrain",
        }
    }

    fn unknown_error_message(&self) -> &'static str {
        match self {
            Action::Analyze => "An unexpected error occurred.",
            Action::Retrain => "An unexpected error occurred while retraining.",
        }
    }
}

/// What an action left behind for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub response: ApiResponse,
    pub is_error: bool,
}

impl Completion {
    pub fn success(response: ApiResponse) -> Self {
        Self { response, is_error: false }
    }

    pub fn failure(response: ApiResponse) -> Self {
        Self { response, is_error: true }
    }

    /// Turns a finished request into something displayable.
    ///
    /// A non-2xx status with a body shows that body; one without a body, or a
    /// transport failure, becomes a generic `NetworkError` payload.
    pub fn from_result(result: Result<ApiResponse, AgriError>, action: Action) -> Self {
        let error = match result {
            Ok(response) => return Self::success(response),
            Err(error) => error,
        };

        let payload = match &error {
            AgriError::HttpStatus { body, .. } if !body.trim().is_empty() => {
                return Self::failure(ApiResponse::from_body(body));
            }
            AgriError::HttpStatus { .. } | AgriError::Reqwest(_) => {
                BackendErrorPayload::new(500, "NetworkError", error.to_string())
            }
            _ => BackendErrorPayload::new(500, "UnknownError", action.unknown_error_message()),
        };

        Self::failure(ApiResponse::Error(payload))
    }
}

pub fn http_client(timeout: Duration) -> Result<Client, AgriError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AgriError::Custom(format!("HTTP client build failed: {e}")))
}

/// Talks to the prediction service behind the `/api` proxy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AgriError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client: http_client(timeout)?, base_url })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AgriError> {
        Self::new(&config.api_base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn analyze(&self, data: &CropData) -> Result<ApiResponse, AgriError> {
        let url = self.url(ANALYZE_PATH);
        tracing::info!(crop = %data.crop_type, %url, "Sending analyze request");
        self.send(self.client.post(url).json(data)).await
    }

    pub async fn retrain(&self) -> Result<ApiResponse, AgriError> {
        let url = self.url(RETRAIN_PATH);
        tracing::info!(%url, "Sending retrain request");
        self.send(self.client.get(url)).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<ApiResponse, AgriError> {
        let response = request
            .header(USER_AGENT, "agri-yield/0.1 (+reqwest)")
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AgriError::HttpStatus { status: status.as_u16(), body });
        }

        Ok(ApiResponse::from_body(&body))
    }
}
