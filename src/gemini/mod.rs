pub mod types;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use tracing::debug;

use crate::{
    config::ModelClientConfig,
    error::{ConfigError, UpstreamError},
};
use types::{
    Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    PartRef, SystemInstruction,
};

/// Anything that turns a prompt into generated text.
///
/// The system instruction and sampling parameters belong to the implementor;
/// callers only supply the prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError>;
}

pub struct GeminiClient {
    client: Client,
    config: ModelClientConfig,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(config: ModelClientConfig) -> Result<Self, ConfigError> {
        let client = ClientBuilder::new().timeout(config.timeout).build()?;
        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            config.api_base, config.model
        );

        Ok(Self {
            client,
            config,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> GenerateContentRequest<'a> {
        let params = &self.config.generation;
        GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![PartRef { text: prompt }],
            }],
            system_instruction: SystemInstruction {
                parts: vec![PartRef {
                    text: &self.config.system_instruction,
                }],
            },
            generation_config: GenerationConfig {
                temperature: params.temperature,
                top_p: params.top_p,
                top_k: params.top_k,
                max_output_tokens: params.max_output_tokens,
            },
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| UpstreamError::Malformed(e.to_string()))?;

        let text = extract_text(parsed)?;
        debug!(
            model = self.config.model.as_str(),
            output_len = text.len(),
            "gemini generation complete"
        );
        Ok(text)
    }
}

fn status_error(status: StatusCode, body: &str) -> UpstreamError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|env| env.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                trimmed.to_string()
            }
        });

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => UpstreamError::Auth {
            status: status.as_u16(),
            message,
        },
        _ => UpstreamError::Provider {
            status: status.as_u16(),
            message,
        },
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String, UpstreamError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return match response.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => Err(UpstreamError::Blocked(reason)),
            None => Err(UpstreamError::Empty),
        };
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if !text.is_empty() {
        return Ok(text);
    }

    match candidate.finish_reason {
        Some(reason) if reason != "STOP" => Err(UpstreamError::Blocked(reason)),
        _ => Err(UpstreamError::Empty),
    }
}
