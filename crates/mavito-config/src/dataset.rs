use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("data/multilingual_statistical_terminology_clean.json")
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DatasetConfig {
    /// JSON file holding the multilingual records
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Optional `word<TAB>TAG` file extending the embedded tagger lexicon
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
}

impl DatasetConfig {
    pub fn new() -> Self {
        let path = env::var("MAVITO_DATASET_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_path());

        let lexicon_path = env::var("MAVITO_LEXICON_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Self { path, lexicon_path }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            lexicon_path: None,
        }
    }
}
