//! External suggestion sources
//!
//! A source is an advisory generator (a language model behind a pass-through proxy)
//! that may propose one catalog product for the shopper's outfit. Sources never have
//! the final word: the stylist pipeline validates every answer against the catalog
//! and falls back to the local heuristic on any failure.
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::{CartItem, Catalog, CatalogProjection, Product, StyleTag};

pub mod chat;

pub use chat::{ChatCompletionSource, ChatProvider};

/// Everything a source gets to see about the outfit
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StylingRequest {
    pub current_product: Product,
    pub cart: Vec<CartItem>,
    pub catalog: Vec<CatalogProjection>,
}

impl StylingRequest {
    pub fn new(current_product: &Product, cart: &[CartItem], catalog: &Catalog) -> Self {
        Self {
            current_product: current_product.clone(),
            cart: cart.to_vec(),
            catalog: catalog.projection(),
        }
    }
}

/// Answer expected back from a source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSuggestion {
    pub suggested_product_id: String,
    pub reason: String,
    pub style_tags: Vec<StyleTag>,
}

/// Why an external attempt did not produce a usable suggestion
///
/// These are expected outcomes: each one routes the request to the local heuristic.
#[derive(thiserror::Error, Debug)]
pub enum SourceFailure {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{provider} returned status {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Suggested product not found in catalog: {0}")]
    UnknownProduct(String),

    #[error("No answer within {0:?}")]
    Timeout(Duration),
}

/// Trait for external suggestion sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Makes exactly one attempt; retries are not the source's business
    async fn suggest(&self, request: &StylingRequest) -> Result<ExternalSuggestion, SourceFailure>;

    /// Source name for logging and the recommendation origin
    fn name(&self) -> &'static str;
}

/// Builds the user prompt for chat-style sources
pub fn build_styling_prompt(request: &StylingRequest) -> Result<String, SourceFailure> {
    let current = serde_json::to_string(&request.current_product)?;
    let cart = serde_json::to_string(&request.cart)?;
    let catalog = serde_json::to_string(&request.catalog)?;

    Ok(format!(
        r#"You are a professional fashion stylist AI for an ecommerce website.

You are given:
1. The product the user is currently viewing: {current}
2. The products in their cart: {cart}
3. The full product catalog: {catalog}

Your task:
- Select exactly ONE product that complements the outfit
- It must complete the look (top <-> bottom)
- Avoid duplicates (don't suggest items already in cart or currently viewing)
- Explain why it matches (color, fit, style)

Return JSON only:
{{
  "suggestedProductId": "product_id",
  "reason": "detailed explanation",
  "styleTags": ["casual", "streetwear", "formal"]
}}"#
    ))
}

/// Returns the span from the first `{` to the last `}` of a model reply
///
/// Models often wrap the JSON in prose or code fences.
pub fn extract_json_object(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (end > start).then(|| &content[start..=end])
}

/// Decodes a model reply into a suggestion
pub fn parse_suggestion(content: &str) -> Result<ExternalSuggestion, SourceFailure> {
    let json = extract_json_object(content)
        .ok_or_else(|| SourceFailure::MalformedPayload("No JSON object in reply".to_string()))?;

    let suggestion: ExternalSuggestion = serde_json::from_str(json)?;

    if suggestion.style_tags.is_empty() {
        return Err(SourceFailure::MalformedPayload(
            "Suggestion carries no style tags".to_string(),
        ));
    }

    Ok(suggestion)
}
