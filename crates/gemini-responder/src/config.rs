//! Configuration for GeminiResponder.

use responder_core::ResponderError;
use std::env;

/// Configuration for GeminiResponder.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Gemini API base URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model name used for text prompts.
    pub model: String,

    /// Model name used for image captioning (vision model).
    pub caption_model: String,

    /// Temperature for generation (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Nucleus sampling cutoff.
    pub top_p: Option<f32>,

    /// Top-k sampling cutoff.
    pub top_k: Option<u32>,

    /// Maximum tokens for a response.
    pub max_output_tokens: Option<u32>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: String::new(),
            model: "gemini-2.0-flash".to_string(),
            caption_model: "gemini-2.5-flash".to_string(),
            temperature: Some(0.7),
            top_p: Some(1.0),
            top_k: Some(1),
            max_output_tokens: Some(2048),
        }
    }
}

impl GeminiConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `GEMINI_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `GEMINI_API_URL` - API base URL (default: https://generativelanguage.googleapis.com/v1beta)
    /// - `GEMINI_MODEL` - Model name for text (default: gemini-2.0-flash)
    /// - `GEMINI_CAPTION_MODEL` - Model name for captioning (default: gemini-2.5-flash)
    /// - `GEMINI_TEMPERATURE` - Temperature (default: 0.7)
    /// - `GEMINI_MAX_OUTPUT_TOKENS` - Max output tokens (default: 2048)
    pub fn from_env() -> Result<Self, ResponderError> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| ResponderError::Configuration("GEMINI_API_KEY not set".to_string()))?;

        let api_url = env::var("GEMINI_API_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string());

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string());

        let caption_model =
            env::var("GEMINI_CAPTION_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());

        let temperature = env::var("GEMINI_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(Some(0.7));

        let max_output_tokens = env::var("GEMINI_MAX_OUTPUT_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(Some(2048));

        Ok(Self {
            api_url,
            api_key,
            model,
            caption_model,
            temperature,
            top_p: Some(1.0),
            top_k: Some(1),
            max_output_tokens,
        })
    }

    /// Create a new configuration with the required API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Set the API URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the text model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the caption model.
    pub fn with_caption_model(mut self, model: impl Into<String>) -> Self {
        self.caption_model = model.into();
        self
    }

    /// Set the temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the max output tokens.
    pub fn with_max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = Some(tokens);
        self
    }
}
