use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the chat-completion pass-through proxy
    #[serde(default = "default_ai_api_base_url")]
    pub ai_api_base_url: String,

    /// GLM API key; preferred over Kimi when both are set
    #[serde(default)]
    pub glm_api_key: Option<String>,

    /// Kimi (Moonshot) API key
    #[serde(default)]
    pub kimi_api_key: Option<String>,

    /// Upper bound for the single external suggestion attempt, in milliseconds
    #[serde(default = "default_external_timeout_ms")]
    pub external_timeout_ms: u64,

    /// Product the shopper is currently viewing
    #[serde(default = "default_current_product_id")]
    pub current_product_id: String,

    /// Optional JSON file holding the product catalog; the seed catalog is used otherwise
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Append the suggested product to the cart after recommending it
    #[serde(default)]
    pub add_suggestion_to_cart: bool,
}

fn default_ai_api_base_url() -> String {
    "http://localhost:8000/api/ai".to_string()
}

fn default_external_timeout_ms() -> u64 {
    10_000
}

fn default_current_product_id() -> String {
    "sku789".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai_api_base_url: default_ai_api_base_url(),
            glm_api_key: None,
            kimi_api_key: None,
            external_timeout_ms: default_external_timeout_ms(),
            current_product_id: default_current_product_id(),
            catalog_path: None,
            add_suggestion_to_cart: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn external_timeout(&self) -> Duration {
        Duration::from_millis(self.external_timeout_ms)
    }
}

/// Treats blank keys the same as unset ones
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_env() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.ai_api_base_url, "http://localhost:8000/api/ai");
        assert_eq!(config.current_product_id, "sku789");
        assert_eq!(config.external_timeout(), Duration::from_secs(10));
        assert!(config.glm_api_key.is_none());
        assert!(!config.add_suggestion_to_cart);
    }

    #[test]
    fn test_overrides_from_env() {
        let vars = vec![
            ("GLM_API_KEY".to_string(), "glm-secret".to_string()),
            ("EXTERNAL_TIMEOUT_MS".to_string(), "250".to_string()),
            ("CATALOG_PATH".to_string(), "/tmp/catalog.json".to_string()),
            ("ADD_SUGGESTION_TO_CART".to_string(), "true".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.glm_api_key.as_deref(), Some("glm-secret"));
        assert_eq!(config.external_timeout(), Duration::from_millis(250));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
        assert!(config.add_suggestion_to_cart);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(&Some("  key ".to_string())), Some("key"));
        assert_eq!(non_blank(&Some("   ".to_string())), None);
        assert_eq!(non_blank(&None), None);
    }
}
