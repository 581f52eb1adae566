use std::env;

#[cfg(feature = "anthropic")]
use crate::clients::claude::models::ClaudeModels;
use crate::clients::claude::models::BedrockModels;
use crate::error::ConfigError;

pub const DEFAULT_TABLE_NAME: &str = "quizzies";
pub const DEFAULT_BEDROCK_REGION: &str = "ap-northeast-1";
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Candidate models, most capable first.
pub const DEFAULT_MODEL_IDS: &[&str] = &[
    BedrockModels::SONNET_3_5_V2,
    BedrockModels::SONNET_3_5,
    BedrockModels::SONNET_3,
    BedrockModels::HAIKU_3,
];

/// Same fallback order, as Anthropic API model names.
#[cfg(feature = "anthropic")]
pub const DEFAULT_ANTHROPIC_MODEL_IDS: &[&str] = &[
    ClaudeModels::SONNET_3_5_V2,
    ClaudeModels::SONNET_3_5,
    ClaudeModels::SONNET_3,
    ClaudeModels::HAIKU_3,
];

/// Trait for types that can retrieve their configuration key from environment variables
pub trait KeyFromEnv {
    /// The environment variable name for this client's API key
    const KEY_NAME: &'static str;

    /// Find the API key by checking environment variables first, then .env file
    fn find_key() -> Option<String> {
        let _ = dotenvy::dotenv();
        env::var(Self::KEY_NAME).ok().filter(|k| !k.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    Bedrock,
    #[cfg(feature = "anthropic")]
    Anthropic,
}

impl Provider {
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_lowercase().as_str() {
            "bedrock" => Ok(Self::Bedrock),
            #[cfg(feature = "anthropic")]
            "anthropic" => Ok(Self::Anthropic),
            _ => Err(ConfigError::InvalidValue { name: "QUIZGEN_PROVIDER", value: s.to_string() }),
        }
    }

    pub fn default_model_ids(&self) -> Vec<String> {
        let ids = match self {
            Provider::Bedrock => DEFAULT_MODEL_IDS,
            #[cfg(feature = "anthropic")]
            Provider::Anthropic => DEFAULT_ANTHROPIC_MODEL_IDS,
        };
        ids.iter().map(|m| m.to_string()).collect()
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Bedrock => write!(f, "bedrock"),
            #[cfg(feature = "anthropic")]
            Provider::Anthropic => write!(f, "anthropic"),
        }
    }
}

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub table_name: String,
    pub bedrock_region: String,
    pub model_ids: Vec<String>,
    pub max_tokens: u32,
    pub provider: Provider,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            bedrock_region: DEFAULT_BEDROCK_REGION.to_string(),
            model_ids: Provider::default().default_model_ids(),
            max_tokens: DEFAULT_MAX_TOKENS,
            provider: Provider::default(),
        }
    }
}

impl AppConfig {
    /// Load `.env` (if any) and read `QUIZGEN_*` variables over the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(table) = get("QUIZGEN_TABLE_NAME") {
            config.table_name = table.trim().to_string();
        }
        if let Some(region) = get("QUIZGEN_BEDROCK_REGION") {
            config.bedrock_region = region.trim().to_string();
        }
        if let Some(provider) = get("QUIZGEN_PROVIDER") {
            config.provider = Provider::from_str(&provider)?;
            config.model_ids = config.provider.default_model_ids();
        }
        if let Some(ids) = get("QUIZGEN_MODEL_IDS") {
            config.model_ids = ids
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(raw) = get("QUIZGEN_MAX_TOKENS") {
            config.max_tokens = raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidValue { name: "QUIZGEN_MAX_TOKENS", value: raw.clone() })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.table_name, "quizzies");
        assert_eq!(config.bedrock_region, "ap-northeast-1");
        assert_eq!(config.max_tokens, 4096);
        assert_eq!(config.provider, Provider::Bedrock);
        assert_eq!(config.model_ids.len(), DEFAULT_MODEL_IDS.len());
        assert_eq!(config.model_ids[0], BedrockModels::SONNET_3_5_V2);
    }

    #[test]
    fn overrides_model_list_and_table() {
        let config = AppConfig::from_lookup(lookup(&[
            ("QUIZGEN_MODEL_IDS", " a , ,b "),
            ("QUIZGEN_TABLE_NAME", "quizzes-dev"),
        ]))
        .unwrap();
        assert_eq!(config.model_ids, vec!["a", "b"]);
        assert_eq!(config.table_name, "quizzes-dev");
    }

    #[test]
    fn rejects_bad_max_tokens_and_provider() {
        assert!(AppConfig::from_lookup(lookup(&[("QUIZGEN_MAX_TOKENS", "lots")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("QUIZGEN_MAX_TOKENS", "0")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("QUIZGEN_PROVIDER", "openai")])).is_err());
    }

    #[cfg(feature = "anthropic")]
    #[test]
    fn anthropic_provider_switches_default_models() {
        let config = AppConfig::from_lookup(lookup(&[("QUIZGEN_PROVIDER", "Anthropic")])).unwrap();
        assert_eq!(config.provider, Provider::Anthropic);
        assert_eq!(config.model_ids[0], ClaudeModels::SONNET_3_5_V2);
    }
}
