use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use masking::Secret;
use serde::Deserialize;

/// Application configuration, constructed once at process start and shared
/// through `AppState`. Request logic never reads the environment directly.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub server: Server,
    pub log: Log,
    pub cors: CorsSettings,
    pub connectors: Connectors,
    pub stripe: StripeSettings,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Log {
    /// Default filter directive; `RUST_LOG` overrides it.
    pub level: String,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CorsSettings {
    /// The storefront is served from arbitrary mirrors, so the browser
    /// surface is open by default.
    pub wildcard_origin: bool,
    pub origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub max_age: usize,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            wildcard_origin: true,
            origins: Vec::new(),
            allowed_methods: vec!["GET".into(), "POST".into(), "OPTIONS".into()],
            allowed_headers: vec!["Content-Type".into()],
            max_age: 3600,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Connectors {
    pub stripe: ConnectorParams,
    pub gemini: ConnectorParams,
}

impl Default for Connectors {
    fn default() -> Self {
        Self {
            stripe: ConnectorParams {
                base_url: "https://api.stripe.com/".into(),
            },
            gemini: ConnectorParams {
                base_url: "https://generativelanguage.googleapis.com/".into(),
            },
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ConnectorParams {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct StripeSettings {
    pub api_key: Option<Secret<String>>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeminiSettings {
    pub api_key: Option<Secret<String>>,
    pub model: String,
    /// Product photo edited by the `edit` preview variant.
    pub reference_image_path: PathBuf,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.0-flash-exp-image-generation".into(),
            reference_image_path: PathBuf::from("assets/product-reference.png"),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(
                Environment::with_prefix("ROUTER")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.origins")
                    .with_list_parse_key("cors.allowed_methods")
                    .with_list_parse_key("cors.allowed_headers"),
            )
            .build()?;

        let mut settings: Self = config.try_deserialize()?;

        // The hosting platform provides the upstream credentials under their
        // original names; a `ROUTER__`-prefixed variable wins when both exist.
        if settings.stripe.api_key.is_none() {
            settings.stripe.api_key = std::env::var("STRIPE_SECRET_KEY").ok().map(Secret::new);
        }
        if settings.gemini.api_key.is_none() {
            settings.gemini.api_key = std::env::var("GEMINI_API_KEY").ok().map(Secret::new);
        }

        Ok(settings)
    }
}
