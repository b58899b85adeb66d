//! LLaMA oracle adapter - implementation of QuestionOracle over HTTP.
//!
//! Speaks the Ollama-style generate API and tolerates OpenAI-style
//! completion bodies, since self-hosted gateways expose either shape.
//!
//! # Configuration
//!
//! ```ignore
//! let config = LlamaConfig::new("http://localhost:11434/api/generate")
//!     .with_model("llama3:8b")
//!     .with_temperature(0.4);
//!
//! let oracle = LlamaOracle::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{OracleError, QuestionOracle};

/// Configuration for the LLaMA oracle adapter.
#[derive(Debug, Clone)]
pub struct LlamaConfig {
    /// Generate endpoint URL.
    pub endpoint: String,
    /// Model identifier passed through to the service.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
    /// Optional bearer token for authenticated gateways.
    api_key: Option<Secret<String>>,
}

impl LlamaConfig {
    /// Creates a configuration for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: "llama3:8b".to_string(),
            temperature: 0.4,
            timeout: Duration::from_secs(30),
            max_retries: 2,
            api_key: None,
        }
    }

    /// Sets the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the bearer token.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    /// Exposes the bearer token (for making requests).
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|key| key.expose_secret().as_str())
    }
}

/// HTTP oracle client.
pub struct LlamaOracle {
    config: LlamaConfig,
    client: Client,
}

impl LlamaOracle {
    /// Creates a new oracle client with the given configuration.
    pub fn new(config: LlamaConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn to_generate_request(&self, prompt: &str) -> GenerateRequest {
        GenerateRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
            options: GenerateOptions {
                temperature: self.config.temperature,
            },
        }
    }

    async fn send_request(&self, prompt: &str) -> Result<Response, OracleError> {
        let mut request = self
            .client
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .json(&self.to_generate_request(prompt));

        if let Some(api_key) = self.config.api_key() {
            request = request.header("Authorization", format!("Bearer {api_key}"));
        }

        request.send().await.map_err(|e| {
            if e.is_timeout() {
                OracleError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else if e.is_connect() {
                OracleError::network(format!("connection failed: {e}"))
            } else {
                OracleError::network(e.to_string())
            }
        })
    }

    async fn parse_response(&self, response: Response) -> Result<String, OracleError> {
        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::BadStatus {
                status: status.as_u16(),
            });
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|e| OracleError::malformed(format!("failed to decode body: {e}")))?;

        extract_text(payload)
    }
}

#[async_trait]
impl QuestionOracle for LlamaOracle {
    async fn generate(&self, prompt: &str) -> Result<String, OracleError> {
        let mut last_error = OracleError::network("no attempts made");
        let mut retry_count = 0;

        while retry_count <= self.config.max_retries {
            match self.send_request(prompt).await {
                Ok(response) => match self.parse_response(response).await {
                    Ok(text) => return Ok(text),
                    Err(err) => {
                        if !err.is_retryable() || retry_count >= self.config.max_retries {
                            return Err(err);
                        }
                        last_error = err;
                    }
                },
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.config.max_retries {
                        return Err(err);
                    }
                    last_error = err;
                }
            }

            // Exponential backoff: 1s, 2s, 4s, ...
            let delay = Duration::from_secs(1 << retry_count);
            sleep(delay).await;
            retry_count += 1;
        }

        Err(last_error)
    }
}

/// Pulls the generated text out of whichever body shape arrived.
fn extract_text(payload: GenerateResponse) -> Result<String, OracleError> {
    if let Some(response) = payload.response {
        return Ok(response.trim().to_string());
    }

    if let Some(choice) = payload.choices.and_then(|mut choices| {
        if choices.is_empty() {
            None
        } else {
            Some(choices.remove(0))
        }
    }) {
        if let Some(text) = choice.text {
            return Ok(text.trim().to_string());
        }
    }

    Err(OracleError::malformed(
        "body carries neither `response` nor `choices[0].text`",
    ))
}

// ----- Wire types -----

#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
    choices: Option<Vec<GenerateChoice>>,
}

#[derive(Debug, Deserialize)]
struct GenerateChoice {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = LlamaConfig::new("http://oracle.local/generate")
            .with_model("llama3:70b")
            .with_temperature(0.9)
            .with_timeout(Duration::from_secs(10))
            .with_max_retries(5)
            .with_api_key("token");

        assert_eq!(config.endpoint, "http://oracle.local/generate");
        assert_eq!(config.model, "llama3:70b");
        assert_eq!(config.temperature, 0.9);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.api_key(), Some("token"));
    }

    #[test]
    fn request_body_matches_generate_contract() {
        let oracle = LlamaOracle::new(LlamaConfig::new("http://localhost:11434/api/generate"));
        let body = serde_json::to_value(oracle.to_generate_request("pergunta")).unwrap();

        assert_eq!(body["model"], "llama3:8b");
        assert_eq!(body["prompt"], "pergunta");
        assert_eq!(body["stream"], false);
        assert!((body["options"]["temperature"].as_f64().unwrap() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn extract_text_reads_ollama_shape() {
        let payload: GenerateResponse =
            serde_json::from_str(r#"{"response":"  texto gerado  "}"#).unwrap();
        assert_eq!(extract_text(payload).unwrap(), "texto gerado");
    }

    #[test]
    fn extract_text_reads_openai_shape() {
        let payload: GenerateResponse =
            serde_json::from_str(r#"{"choices":[{"text":" primeira "},{"text":"segunda"}]}"#)
                .unwrap();
        assert_eq!(extract_text(payload).unwrap(), "primeira");
    }

    #[test]
    fn extract_text_prefers_response_field() {
        let payload: GenerateResponse =
            serde_json::from_str(r#"{"response":"a","choices":[{"text":"b"}]}"#).unwrap();
        assert_eq!(extract_text(payload).unwrap(), "a");
    }

    #[test]
    fn extract_text_rejects_unknown_shape() {
        let payload: GenerateResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            extract_text(payload),
            Err(OracleError::Malformed(_))
        ));
    }
}
