//! GeminiResponder implementation using the Gemini REST API.

use reqwest::Client;
use responder_core::{
    async_trait, hash_prompt, ImageCaptioner, Prompt, Reply, Responder, ResponderError,
};
use tracing::{debug, info, warn};

use crate::api_types::{
    ApiErrorBody, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use crate::config::GeminiConfig;

/// System instruction used when captioning uploaded assignment images.
const CAPTION_INSTRUCTION: &str = "You are a professional teacher. \
Students will upload images containing exam questions, assignments, or code snippets. \
Carefully read the image, understand it, and then provide a clear, easy explanation. \
Always explain in a simple, student-friendly way, as if teaching in class. \
Support answers with reasoning, examples, and code where necessary. \
Keep explanations concise, correct, and easy to understand.";

/// A responder implementation that uses the Google Gemini API.
///
/// GeminiResponder is stateless: every call is a single `generateContent`
/// request carrying the full instruction. Conversation memory is owned by
/// the caller, not by this client.
pub struct GeminiResponder {
    client: Client,
    config: GeminiConfig,
}

impl GeminiResponder {
    /// Create a new GeminiResponder with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, ResponderError> {
        if config.api_key.trim().is_empty() {
            return Err(ResponderError::Configuration(
                "Gemini API key is empty".to_string(),
            ));
        }

        let client = Client::builder().build().map_err(|e| {
            ResponderError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        info!(
            "GeminiResponder initialized with model: {}, caption model: {}",
            config.model, config.caption_model
        );

        Ok(Self { client, config })
    }

    /// Create a GeminiResponder from environment variables.
    ///
    /// See [`GeminiConfig::from_env`] for the environment variables read.
    pub fn from_env() -> Result<Self, ResponderError> {
        let config = GeminiConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            top_k: self.config.top_k,
            max_output_tokens: self.config.max_output_tokens,
        }
    }

    /// Make a `generateContent` request against the given model.
    async fn generate(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ResponderError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.api_url.trim_end_matches('/'),
            model
        );

        debug!("Sending request to Gemini API: {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ResponderError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse the structured API error first
            if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&error_text) {
                return Err(ResponderError::Api {
                    status: status.as_u16(),
                    message: body.error.message,
                });
            }

            return Err(ResponderError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ResponderError::Network(format!("Failed to parse response: {}", e)))?;

        if let Some(ref usage) = completion.usage_metadata {
            debug!(
                "Token usage - prompt: {}, candidates: {}, total: {}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        Ok(completion)
    }
}

#[async_trait]
impl Responder for GeminiResponder {
    async fn respond(&self, prompt: Prompt) -> Result<Reply, ResponderError> {
        if let Some(ref system) = prompt.system {
            debug!("System instruction fingerprint: {}", hash_prompt(system));
        }

        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text(&prompt.text)])],
            system_instruction: prompt.system.as_deref().map(Content::bare),
            generation_config: Some(self.generation_config()),
        };

        let completion = self.generate(&self.config.model, request).await?;

        let text = completion.first_text().ok_or_else(|| {
            warn!("No candidate text in Gemini response");
            ResponderError::EmptyReply
        })?;

        info!("Generated reply: {} chars", text.len());

        Ok(Reply::new(text))
    }

    fn name(&self) -> &str {
        "GeminiResponder"
    }
}

#[async_trait]
impl ImageCaptioner for GeminiResponder {
    async fn caption(&self, image_base64: &str) -> Result<String, ResponderError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![
                Part::jpeg(image_base64),
                Part::text("Caption this image."),
            ])],
            system_instruction: Some(Content::bare(CAPTION_INSTRUCTION)),
            generation_config: None,
        };

        let completion = self.generate(&self.config.caption_model, request).await?;

        completion.first_text().ok_or_else(|| {
            warn!("No caption text in Gemini response");
            ResponderError::EmptyReply
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_api_key() {
        let config = GeminiConfig::default();
        let result = GeminiResponder::new(config);
        assert!(matches!(result, Err(ResponderError::Configuration(_))));
    }

    #[test]
    fn test_responder_name() {
        let responder = GeminiResponder::new(GeminiConfig::new("test-key")).unwrap();
        assert_eq!(responder.name(), "GeminiResponder");
    }

    #[test]
    fn test_generation_config_mirrors_settings() {
        let responder = GeminiResponder::new(
            GeminiConfig::new("test-key")
                .with_temperature(0.2)
                .with_max_output_tokens(128),
        )
        .unwrap();

        let generation = responder.generation_config();
        assert_eq!(generation.temperature, Some(0.2));
        assert_eq!(generation.max_output_tokens, Some(128));
    }
}
