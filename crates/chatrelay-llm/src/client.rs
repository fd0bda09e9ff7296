use std::time::Duration;

use async_trait::async_trait;
use chatrelay_types::prelude::GenerationParams;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::errors::CompletionError;

/// Seam for the completion service so the classifier and orchestrator can be
/// exercised against fakes.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, CompletionError>;
}

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: Url,
    pub request_timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self, CompletionError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| CompletionError::decode(format!("gemini base url parse: {err}")))?;
        Ok(Self {
            api_key: api_key.into(),
            base_url,
            request_timeout: Duration::from_secs(30),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| CompletionError::transport(format!("client build failed: {err}")))?;
        Ok(Self { client, config })
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<OutboundContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct OutboundContent<'a> {
    parts: Vec<OutboundPart<'a>>,
}

#[derive(Serialize)]
struct OutboundPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<InboundPart>,
}

#[derive(Deserialize)]
struct InboundPart {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl CompletionBackend for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, CompletionError> {
        let payload = GenerateRequest {
            contents: vec![OutboundContent {
                parts: vec![OutboundPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: params.max_tokens,
                temperature: params.temperature,
            },
        };

        let response = self
            .client
            .post(self.config.base_url.clone())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .map_err(|err| CompletionError::transport(format!("gemini request error: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: GenerateResponse = response
            .json()
            .await
            .map_err(|err| CompletionError::decode(format!("gemini response decode: {err}")))?;

        let candidate = decoded
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::decode("gemini returned no candidates"))?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();
        Ok(text)
    }
}
