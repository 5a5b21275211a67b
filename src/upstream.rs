use async_trait::async_trait;
use serde_json::{Value, json};
use thiserror::Error;

use crate::models::ToolDescriptor;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request to completion API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

// Produces a completion for (model, prompt, tools). The response body is
// opaque to the gateway and forwarded verbatim.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn complete(
        &self,
        model: &str,
        prompt: &str,
        tools: &[ToolDescriptor],
    ) -> Result<Value, GatewayError>;
}

// OpenAI Responses API client. Reads its credential from the environment
// so the key never travels through the rest of the configuration.
pub struct OpenAiGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

impl OpenAiGateway {
    pub fn from_env() -> Self {
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = std::env::var("OPENAI_API_KEY")
            .unwrap_or_else(|_| panic!("OPENAI_API_KEY must be set"));

        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl ModelGateway for OpenAiGateway {
    async fn complete(
        &self,
        model: &str,
        prompt: &str,
        tools: &[ToolDescriptor],
    ) -> Result<Value, GatewayError> {
        let response = self
            .client
            .post(format!("{}/responses", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": model,
                "input": prompt,
                "tools": tools,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}
