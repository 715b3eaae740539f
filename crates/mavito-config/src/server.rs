use std::env;

use serde::{Deserialize, Serialize};

fn default_bind_addr() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_api_prefix() -> String {
    "/api/v1".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Mount point of the versioned API routes
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn new() -> Self {
        let bind_addr = env::var("MAVITO_BIND_ADDR").unwrap_or_else(|_| default_bind_addr());

        let api_prefix = env::var("MAVITO_API_PREFIX")
            .map(|p| normalize_prefix(&p))
            .unwrap_or_else(|_| default_api_prefix());

        let cors_origins = env::var("MAVITO_CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        Self {
            bind_addr,
            api_prefix,
            cors_origins,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            api_prefix: default_api_prefix(),
            cors_origins: vec![],
        }
    }
}

/// Comma separated origins, blanks dropped, duplicates removed
pub fn parse_origins(raw: &str) -> Vec<String> {
    let mut origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();
    origins.sort();
    origins.dedup();
    origins
}

/// Leading slash, no trailing slash
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        default_api_prefix()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_split_and_deduplicated() {
        let raw = " http://localhost:5173, ,https://a.github.io,http://localhost:5173";
        let origins = parse_origins(raw);
        assert_eq!(origins, vec!["http://localhost:5173", "https://a.github.io"]);
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn prefixes_are_normalized() {
        assert_eq!(normalize_prefix("api/v2/"), "/api/v2");
        assert_eq!(normalize_prefix("/"), "/api/v1");
    }
}
