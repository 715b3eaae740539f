use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// Coarse grammatical category attached to every term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Unknown,
}

impl PartOfSpeech {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Universal part-of-speech tag set produced by taggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniversalTag {
    Noun,
    ProperNoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Numeral,
    Particle,
    Interjection,
    Punctuation,
    Symbol,
    Other,
}

impl UniversalTag {
    /// Parse the upper case UD abbreviation (`NOUN`, `ADJ`, ...)
    pub fn from_ud(tag: &str) -> Option<Self> {
        let tag = match tag.trim().to_uppercase().as_str() {
            "NOUN" => UniversalTag::Noun,
            "PROPN" => UniversalTag::ProperNoun,
            "VERB" => UniversalTag::Verb,
            "AUX" => UniversalTag::Auxiliary,
            "ADJ" => UniversalTag::Adjective,
            "ADV" => UniversalTag::Adverb,
            "PRON" => UniversalTag::Pronoun,
            "DET" => UniversalTag::Determiner,
            "ADP" => UniversalTag::Adposition,
            "CCONJ" | "SCONJ" => UniversalTag::Conjunction,
            "NUM" => UniversalTag::Numeral,
            "PART" => UniversalTag::Particle,
            "INTJ" => UniversalTag::Interjection,
            "PUNCT" => UniversalTag::Punctuation,
            "SYM" => UniversalTag::Symbol,
            "X" => UniversalTag::Other,
            _ => return None,
        };
        Some(tag)
    }

    /// Collapse onto the four categories terms carry
    pub fn coarse(&self) -> PartOfSpeech {
        match self {
            UniversalTag::Noun => PartOfSpeech::Noun,
            UniversalTag::Verb => PartOfSpeech::Verb,
            UniversalTag::Adjective => PartOfSpeech::Adjective,
            UniversalTag::Adverb => PartOfSpeech::Adverb,
            _ => PartOfSpeech::Unknown,
        }
    }
}

/// Single-word part-of-speech tagger
pub trait Tagger: Send + Sync {
    fn tag(&self, word: &str) -> UniversalTag;
}

/// Memoizing front for a [`Tagger`].
///
/// The cache is keyed by the literal input, so `"Run"` and `"run"` are
/// tagged and stored independently. Entries are never evicted.
pub struct PosClassifier {
    tagger: Arc<dyn Tagger>,
    cache: RwLock<HashMap<String, PartOfSpeech>>,
}

impl PosClassifier {
    pub fn new(tagger: Arc<dyn Tagger>) -> Self {
        Self {
            tagger,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn classify(&self, word: &str) -> PartOfSpeech {
        if word.is_empty() || !word.is_ascii() {
            return PartOfSpeech::Unknown;
        }

        if let Some(pos) = self.cached(word) {
            return pos;
        }

        // Tag outside the lock; racing misses write the same value.
        let pos = self.tagger.tag(word).coarse();
        match self.cache.write() {
            Ok(mut cache) => {
                cache.insert(word.to_string(), pos);
            }
            Err(poisoned) => {
                poisoned.into_inner().insert(word.to_string(), pos);
            }
        }

        tracing::trace!("classified {word:?} as {pos}");
        pos
    }

    /// Number of cached lemmas
    pub fn cache_len(&self) -> usize {
        match self.cache.read() {
            Ok(cache) => cache.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    fn cached(&self, word: &str) -> Option<PartOfSpeech> {
        match self.cache.read() {
            Ok(cache) => cache.get(word).copied(),
            Err(poisoned) => poisoned.into_inner().get(word).copied(),
        }
    }
}
