//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Supabase project configuration
    pub supabase: SupabaseConfig,

    /// Application configuration
    #[serde(default)]
    pub app: AppConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseConfig {
    /// Project URL (e.g. https://xyz.supabase.co)
    pub url: String,

    /// Project anon key, sent as the apikey header
    pub anon_key: String,

    /// Optional refresh token for non-interactive session establishment
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Request timeout for both service clients
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// OAuth redirect target
    #[serde(default = "default_redirect_url")]
    pub redirect_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            request_timeout: default_timeout(),
            redirect_url: default_redirect_url(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_redirect_url() -> String {
    "http://localhost:3000/auth/callback".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // Keys and anon tokens must stay strings.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Base URL of the identity provider endpoints.
    pub fn auth_base_url(&self) -> String {
        format!("{}/auth/v1", self.supabase.url.trim_end_matches('/'))
    }

    /// Base URL of the registration edge functions.
    pub fn functions_base_url(&self) -> String {
        format!("{}/functions/v1", self.supabase.url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            supabase: SupabaseConfig {
                url: "https://xyz.supabase.co/".into(),
                anon_key: "anon".into(),
                refresh_token: None,
            },
            app: AppConfig::default(),
        }
    }

    #[test]
    fn test_base_urls_strip_trailing_slash() {
        let config = test_config();
        assert_eq!(config.auth_base_url(), "https://xyz.supabase.co/auth/v1");
        assert_eq!(
            config.functions_base_url(),
            "https://xyz.supabase.co/functions/v1"
        );
    }

    #[test]
    fn test_app_defaults() {
        let app = AppConfig::default();
        assert_eq!(app.log_level, "info");
        assert_eq!(app.request_timeout, Duration::from_secs(10));
        assert_eq!(app.redirect_url, "http://localhost:3000/auth/callback");
    }
}
