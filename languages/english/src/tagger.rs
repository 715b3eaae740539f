use std::path::Path;

use mavito_core::pos::{Tagger, UniversalTag};

use crate::lexicon::Lexicon;
use crate::suffix;

/// Rule based English tagger.
///
/// Multi-word input is tagged by its last token, the head of an English
/// compound ("agricultural holding" tags as a noun). Resolution order:
/// numerals and punctuation, the lexicon, inflected forms of lexicon words,
/// derivational suffixes, then NOUN for anything alphabetic.
pub struct EnglishTagger {
    lexicon: Lexicon,
}

impl EnglishTagger {
    /// Tagger backed by the embedded lexicon
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::with_defaults())
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Embedded lexicon extended by an optional TSV file.
    /// A file that cannot be read is logged and skipped.
    pub fn with_additional_lexicon(path: Option<&Path>) -> Self {
        let mut lexicon = Lexicon::with_defaults();

        if let Some(path) = path {
            match Lexicon::load_from_file(path) {
                Ok(additional) => {
                    tracing::info!("Merging additional lexicon from: {}", path.display());
                    lexicon = lexicon.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load lexicon from {}: {}", path.display(), e);
                }
            }
        }

        Self::with_lexicon(lexicon)
    }

    fn tag_token(&self, token: &str) -> UniversalTag {
        let word = token.trim_matches(|c: char| c.is_ascii_punctuation() && c != '\'');

        if word.is_empty() {
            return if token.chars().any(|c| c.is_ascii_punctuation()) {
                UniversalTag::Punctuation
            } else {
                UniversalTag::Other
            };
        }

        if is_numeral(word) {
            return UniversalTag::Numeral;
        }

        let word = word.to_lowercase();

        if let Some(tag) = self.lexicon.get(&word) {
            return tag;
        }

        if let Some(tag) = self.inflected(&word) {
            return tag;
        }

        if let Some(tag) = suffix::guess(&word) {
            return tag;
        }

        if word.chars().all(|c| c.is_ascii_alphabetic() || c == '-' || c == '\'') {
            UniversalTag::Noun
        } else if word.chars().all(|c| !c.is_alphanumeric()) {
            UniversalTag::Symbol
        } else {
            UniversalTag::Other
        }
    }

    /// Plural, third person, past and progressive forms of lexicon words
    fn inflected(&self, word: &str) -> Option<UniversalTag> {
        let open_class = |stem: &str| {
            self.lexicon
                .get(stem)
                .filter(|tag| matches!(tag, UniversalTag::Noun | UniversalTag::Verb))
        };

        if let Some(stem) = word.strip_suffix("ing") {
            return verb_stems(stem)
                .into_iter()
                .find_map(|s| open_class(s.as_str()).filter(|t| *t == UniversalTag::Verb));
        }

        if let Some(stem) = word.strip_suffix("ed") {
            return verb_stems(stem)
                .into_iter()
                .find_map(|s| open_class(s.as_str()).filter(|t| *t == UniversalTag::Verb));
        }

        if let Some(stem) = word.strip_suffix("ies") {
            return open_class(format!("{stem}y").as_str());
        }

        if let Some(stem) = word.strip_suffix("es") {
            if let Some(tag) = open_class(stem) {
                return Some(tag);
            }
        }

        if let Some(stem) = word.strip_suffix('s') {
            if !stem.ends_with('s') {
                return open_class(stem);
            }
        }

        None
    }
}

impl Default for EnglishTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for EnglishTagger {
    fn tag(&self, word: &str) -> UniversalTag {
        match word.split_whitespace().last() {
            Some(head) => self.tag_token(head),
            None => UniversalTag::Other,
        }
    }
}

/// Candidate base forms once an `-ing`/`-ed` ending is removed
fn verb_stems(stem: &str) -> Vec<String> {
    let mut stems = vec![stem.to_string(), format!("{stem}e")];

    // running -> run, planned -> plan
    let bytes = stem.as_bytes();
    if stem.is_ascii() && bytes.len() >= 2 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
        stems.push(stem[..stem.len() - 1].to_string());
    }

    // carried -> carry
    if let Some(base) = stem.strip_suffix('i') {
        stems.push(format!("{base}y"));
    }

    stems
}

fn is_numeral(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%' | '-'))
}
