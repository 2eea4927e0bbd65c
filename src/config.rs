use std::env;
use thiserror::Error;
use url::Url;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4";
pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";
pub const DEFAULT_SERPAPI_URL: &str = "https://serpapi.com/search.json";
pub const DEFAULT_SHOPPING_SEARCH_URL: &str = "https://www.coupang.com/np/search";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {value}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Per-session inputs. Nothing here outlives the request that carries it.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub language_model_key: Option<String>,
    pub image_search_key: Option<String>,
    pub user_request: String,
}

impl SessionConfig {
    pub fn new(
        language_model_key: Option<String>,
        image_search_key: Option<String>,
        user_request: impl Into<String>,
    ) -> Self {
        Self {
            language_model_key: language_model_key.filter(|k| !k.trim().is_empty()),
            image_search_key: image_search_key.filter(|k| !k.trim().is_empty()),
            user_request: user_request.into(),
        }
    }

    /// Keys from the environment, used when none are given on the command line.
    pub fn keys_from_env() -> (Option<String>, Option<String>) {
        (env::var("OPENAI_API_KEY").ok(), env::var("SERPAPI_API_KEY").ok())
    }
}

/// Non-secret endpoint settings shared by every session.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointConfig {
    pub chat_model: String,
    pub api_base: String,
    pub temperature: f32,
    pub translate_url: String,
    pub serpapi_url: String,
    pub shopping_search_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            chat_model: DEFAULT_OPENAI_MODEL.to_string(),
            api_base: DEFAULT_OPENAI_API_BASE.to_string(),
            temperature: 0.7,
            translate_url: DEFAULT_TRANSLATE_URL.to_string(),
            serpapi_url: DEFAULT_SERPAPI_URL.to_string(),
            shopping_search_url: DEFAULT_SHOPPING_SEARCH_URL.to_string(),
        }
    }
}

impl EndpointConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let chat_model = lookup("OPENAI_CHAT_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());

        // Unparseable temperatures quietly use the default
        let temperature = lookup("OPENAI_TEMPERATURE")
            .and_then(|t| t.parse().ok())
            .unwrap_or(0.7);

        Ok(Self {
            chat_model,
            api_base: endpoint(&lookup, "OPENAI_API_BASE", DEFAULT_OPENAI_API_BASE)?,
            temperature,
            translate_url: endpoint(&lookup, "TRANSLATE_API_URL", DEFAULT_TRANSLATE_URL)?,
            serpapi_url: endpoint(&lookup, "SERPAPI_URL", DEFAULT_SERPAPI_URL)?,
            shopping_search_url: endpoint(&lookup, "SHOPPING_SEARCH_URL", DEFAULT_SHOPPING_SEARCH_URL)?,
        })
    }
}

fn endpoint<F>(lookup: &F, var: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    Url::parse(&value).map_err(|_| ConfigError::InvalidUrl {
        var,
        value: value.clone(),
    })?;
    Ok(value.trim_end_matches('/').to_string())
}
