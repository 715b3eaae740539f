use std::sync::Arc;

use mavito_config::Config;
use mavito_core::{JsonFileSource, PosClassifier, SearchEngine, TermLoader, TermSource};
use mavito_lang_english::EnglishTagger;

/// Shared by every request and CLI command
pub struct AppState {
    pub config: Config,
    pub engine: SearchEngine,
}

impl AppState {
    /// State reading the dataset file named in `config`
    pub fn new(config: Config) -> Self {
        let source = JsonFileSource::new(config.dataset.path.clone());
        Self::with_source(config, Box::new(source))
    }

    pub fn with_source(config: Config, source: Box<dyn TermSource>) -> Self {
        let tagger = EnglishTagger::with_additional_lexicon(config.dataset.lexicon_path.as_deref());
        let classifier = Arc::new(PosClassifier::new(Arc::new(tagger)));
        let loader = TermLoader::new(source, classifier);

        Self {
            config,
            engine: SearchEngine::new(Arc::new(loader)),
        }
    }
}
