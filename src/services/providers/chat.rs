/// Chat-completion suggestion source
///
/// Talks to the AI pass-through proxy, which forwards OpenAI-style chat requests to
/// GLM or Kimi. The model is asked for a JSON answer; whatever surrounds the JSON
/// object in the reply is ignored.
///
/// API Flow:
/// 1. POST {api_url}/{provider}/chat with system + user messages
/// 2. Read choices[0].message.content and decode the embedded JSON object
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::{
    config::{non_blank, Config},
    services::providers::{
        build_styling_prompt, parse_suggestion, ExternalSuggestion, SourceFailure,
        StylingRequest, SuggestionSource,
    },
};

const SYSTEM_PROMPT: &str = "You are a fashion stylist. Always return valid JSON only.";
const TEMPERATURE: f32 = 0.7;

/// Upstream model behind the proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatProvider {
    Glm,
    Kimi,
}

impl ChatProvider {
    pub fn name(self) -> &'static str {
        match self {
            ChatProvider::Glm => "glm",
            ChatProvider::Kimi => "kimi",
        }
    }

    pub fn model(self) -> &'static str {
        match self {
            ChatProvider::Glm => "glm-4",
            ChatProvider::Kimi => "moonshot-v1-8k",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Clone)]
pub struct ChatCompletionSource {
    http_client: HttpClient,
    provider: ChatProvider,
    api_key: String,
    api_url: String,
}

impl ChatCompletionSource {
    pub fn new(provider: ChatProvider, api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            provider,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Picks GLM when its key is set, otherwise Kimi, otherwise nothing
    pub fn from_config(config: &Config) -> Option<Self> {
        let (provider, key) = if let Some(key) = non_blank(&config.glm_api_key) {
            (ChatProvider::Glm, key)
        } else if let Some(key) = non_blank(&config.kimi_api_key) {
            (ChatProvider::Kimi, key)
        } else {
            return None;
        };

        tracing::info!(provider = provider.name(), "External suggestion source enabled");

        Some(Self::new(
            provider,
            key.to_string(),
            config.ai_api_base_url.clone(),
        ))
    }

    pub fn provider(&self) -> ChatProvider {
        self.provider
    }

    fn endpoint(&self) -> String {
        format!("{}/{}/chat", self.api_url, self.provider.name())
    }
}

#[async_trait::async_trait]
impl SuggestionSource for ChatCompletionSource {
    async fn suggest(&self, request: &StylingRequest) -> Result<ExternalSuggestion, SourceFailure> {
        let prompt = build_styling_prompt(request)?;

        let body = ChatRequest {
            model: self.provider.model(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceFailure::Status {
                provider: self.provider.name(),
                status: status.as_u16(),
                body,
            });
        }

        let response_text = response.text().await?;
        tracing::debug!(provider = self.provider.name(), response = %response_text, "Raw chat response");

        let chat: ChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                provider = self.provider.name(),
                "Failed to deserialize chat response"
            );
            SourceFailure::Json(e)
        })?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| SourceFailure::MalformedPayload("Reply has no choices".to_string()))?;

        let suggestion = parse_suggestion(&content)?;

        tracing::info!(
            provider = self.provider.name(),
            suggested_product_id = %suggestion.suggested_product_id,
            "External suggestion received"
        );

        Ok(suggestion)
    }

    fn name(&self) -> &'static str {
        self.provider.name()
    }
}
