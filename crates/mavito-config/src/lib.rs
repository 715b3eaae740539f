use serde::{Deserialize, Serialize};

use self::dataset::DatasetConfig;
use self::search::SearchConfig;
use self::server::ServerConfig;

pub mod dataset;
pub mod search;
pub mod server;

/// Process configuration. Each section reads its own `MAVITO_*` variables;
/// load `.env` before calling [`Config::new`] for file based overrides.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub server: ServerConfig,
    pub search: SearchConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            dataset: DatasetConfig::new(),
            server: ServerConfig::new(),
            search: SearchConfig::new(),
        }
    }
}
