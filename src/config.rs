use std::env;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub api_base_url: String,
    pub environment: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let api_base_url = match env::var("API_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => {
                if environment == "production" {
                    tracing::warn!(
                        "API_BASE_URL is not set, falling back to {DEFAULT_API_BASE_URL}"
                    );
                }
                DEFAULT_API_BASE_URL.to_string()
            }
        };

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            api_base_url,
            environment,
        }
    }
}
