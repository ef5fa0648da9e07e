//! HTTP client for the external description service.
//!
//! Wire contract: `POST {base_url}/generate_description` with
//! `{"host_input_facts": {...}}`, answered by `{"description": "..."}`.

use super::{DescriptionGenerator, GeneratorError};
use crate::config::GeneratorConfig;
use crate::models::Facts;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use service_core::observability::TracedClientExt;

#[derive(Debug, Serialize)]
struct GenerateDescriptionRequest<'a> {
    host_input_facts: &'a Facts,
}

#[derive(Debug, Deserialize)]
struct GenerateDescriptionResponse {
    description: String,
}

#[derive(Clone)]
pub struct HttpDescriptionGenerator {
    client: Client,
    endpoint: String,
}

impl HttpDescriptionGenerator {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &GeneratorConfig) -> Self {
        Self {
            client,
            endpoint: format!(
                "{}/generate_description",
                config.base_url.trim_end_matches('/')
            ),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DescriptionGenerator for HttpDescriptionGenerator {
    async fn generate(&self, facts: &Facts) -> Result<String, GeneratorError> {
        let request = GenerateDescriptionRequest {
            host_input_facts: facts,
        };

        if tracing::enabled!(tracing::Level::DEBUG) {
            if let Ok(payload) = serde_json::to_string(&request) {
                tracing::debug!(endpoint = %self.endpoint, payload = %payload, "Sending to AI service");
            }
        }

        let response = self
            .client
            .traced_post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| GeneratorError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GeneratorError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), body = %body, "AI service error");
            return Err(GeneratorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: GenerateDescriptionResponse =
            serde_json::from_str(&body).map_err(|e| GeneratorError::Decode(e.to_string()))?;

        Ok(decoded.description)
    }
}
