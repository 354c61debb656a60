pub const API_KEY_ENV: &str = "GROQ_API_KEY";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app_host: String,
    pub app_port: u16,
    pub database: DatabaseSettings,
    pub generator: GeneratorSettings,
    pub cors: CorsSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_host: "127.0.0.1".to_string(),
            app_port: 8000,
            database: DatabaseSettings::default(),
            generator: GeneratorSettings::default(),
            cors: CorsSettings::default(),
        }
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// sqlx connection string, e.g. `sqlite://history.db`
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "sqlite://history.db".to_string(),
            max_connections: 5,
            acquire_timeout_secs: 30,
        }
    }
}

/// Chat completions provider used to write the marketing copy
#[derive(Clone, serde::Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Disabled generator falls back to the mock which rejects every request
    pub enabled: bool,
    /// Base URL of an OpenAI compatible API, without the `/chat/completions` suffix
    pub base_url: String,
    pub model: String,
    /// Upper bound for a single generation call
    pub timeout_secs: u64,
    /// Loaded from `GROQ_API_KEY` when not present in the configuration file
    pub api_key: Option<String>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            timeout_secs: 60,
            api_key: None,
        }
    }
}

impl std::fmt::Debug for GeneratorSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorSettings")
            .field("enabled", &self.enabled)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "****"))
            .finish()
    }
}

impl GeneratorSettings {
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Api key with surrounding whitespace removed, `None` when blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "https://marketing-content-generator-tjuh.vercel.app".to_string(),
            ],
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // configuration.yaml is optional, every key has a default
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    Ok(config)
}

/// Collaborator settings that are conventionally passed as plain env vars
fn apply_env_overrides<F>(config: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(DATABASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
        config.database.url = url;
    }

    if let Some(key) = lookup(API_KEY_ENV).filter(|key| !key.trim().is_empty()) {
        config.generator.api_key = Some(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_point_at_groq_and_local_sqlite() {
        let settings = Settings::default();

        assert_eq!(settings.app_port, 8000);
        assert_eq!(settings.database.url, "sqlite://history.db");
        assert_eq!(settings.generator.model, "llama-3.3-70b-versatile");
        assert_eq!(
            settings.generator.completions_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
        assert_eq!(settings.cors.allowed_origins.len(), 2);
    }

    #[test]
    fn env_overrides_replace_database_url_and_api_key() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (DATABASE_URL_ENV, "sqlite://other.db"),
            (API_KEY_ENV, "gsk_test"),
        ]);
        let mut settings = Settings::default();

        apply_env_overrides(&mut settings, |key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.database.url, "sqlite://other.db");
        assert_eq!(settings.generator.api_key(), Some("gsk_test"));
    }

    #[test]
    fn blank_api_key_is_treated_as_missing() {
        let mut settings = GeneratorSettings::default();
        settings.api_key = Some("   ".to_string());

        assert_eq!(settings.api_key(), None);
    }

    #[test]
    fn debug_output_masks_api_key() {
        let mut settings = GeneratorSettings::default();
        settings.api_key = Some("gsk_secret".to_string());

        let printed = format!("{:?}", settings);
        assert!(!printed.contains("gsk_secret"));
        assert!(printed.contains("****"));
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        let mut settings = GeneratorSettings::default();
        settings.base_url = "http://127.0.0.1:9000/v1/".to_string();

        assert_eq!(settings.completions_url(), "http://127.0.0.1:9000/v1/chat/completions");
    }
}
