//! Gemini client
//!
//! Single-shot `generateContent` calls against the Generative Language API.
//! No streaming, no multi-turn context, no retry: one prompt in, the first
//! candidate's text out.

pub mod error;
pub mod types;

pub use error::{Error, Result};

use types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};

const GENERATIVE_LANGUAGE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model every generation request is pinned to.
const MODEL: &str = "gemini-2.0-flash";

/// Fixed sampling settings for roast generation.
const TEMPERATURE: f32 = 0.9;
const MAX_OUTPUT_TOKENS: u32 = 300;

/// Client for the Generative Language API
pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, GENERATIVE_LANGUAGE_URL)
    }

    /// Client pointed at a non-default base URL (test stubs).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Generate a completion for the prompt and return its trimmed text.
    ///
    /// Fails fast with [`Error::MissingApiKey`] when no key is configured,
    /// before any network call. A decoded response without a
    /// `candidates[0].content.parts[0].text` path fails with
    /// [`Error::EmptyResponse`].
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, MODEL, self.api_key
        );

        let response = self.http_client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status, %body, "Gemini generateContent failed");
            return Err(Error::Upstream { status, body });
        }

        let body = response.text().await?;
        let decoded: GenerateContentResponse = serde_json::from_str(&body)?;

        decoded
            .first_text()
            .map(|text| text.trim().to_string())
            .ok_or(Error::EmptyResponse)
    }
}
