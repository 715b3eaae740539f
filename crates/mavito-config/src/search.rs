use std::env;

use serde::{Deserialize, Serialize};

fn default_page_size() -> usize {
    20
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// Page size used when a request does not give one
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

impl SearchConfig {
    pub fn new() -> Self {
        let default_page_size = env::var("MAVITO_DEFAULT_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|size| *size > 0)
            .unwrap_or_else(default_page_size);

        Self { default_page_size }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
        }
    }
}
