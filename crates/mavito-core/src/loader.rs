use std::sync::Arc;

use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::dictionary::{RawRecord, TermSource};
use crate::error::LoadError;
use crate::language::Language;
use crate::pos::PosClassifier;
use crate::types::Term;

/// Everything produced by one successful read of the source
#[derive(Debug)]
pub struct Corpus {
    pub records: Vec<RawRecord>,
    pub terms: Vec<Term>,
}

/// Expands raw records into terms, once per process.
///
/// The first caller reads the source; concurrent callers wait on the same
/// initialization and later callers reuse the result. A failed read is not
/// cached, so the next call tries again.
pub struct TermLoader {
    source: Box<dyn TermSource>,
    classifier: Arc<PosClassifier>,
    corpus: OnceCell<Corpus>,
}

impl TermLoader {
    pub fn new(source: Box<dyn TermSource>, classifier: Arc<PosClassifier>) -> Self {
        Self {
            source,
            classifier,
            corpus: OnceCell::new(),
        }
    }

    /// All terms in record order, languages nested in declared order
    pub async fn load_terms(&self) -> Result<&[Term], LoadError> {
        Ok(&self.corpus().await?.terms)
    }

    /// The raw records behind the terms
    pub async fn load_records(&self) -> Result<&[RawRecord], LoadError> {
        Ok(&self.corpus().await?.records)
    }

    pub fn is_loaded(&self) -> bool {
        self.corpus.initialized()
    }

    pub fn classifier(&self) -> &PosClassifier {
        &self.classifier
    }

    async fn corpus(&self) -> Result<&Corpus, LoadError> {
        self.corpus
            .get_or_try_init(|| async {
                tracing::info!("Loading terminology dataset from {}", self.source.describe());
                let records = self.source.read_records().await.inspect_err(|e| {
                    tracing::error!("Failed to load terminology dataset: {e}");
                })?;

                let terms: Vec<Term> = records
                    .iter()
                    .flat_map(|record| expand_record(record, &self.classifier))
                    .collect();

                tracing::info!(
                    "Loaded {} terms from {} records ({} lemmas classified)",
                    terms.len(),
                    records.len(),
                    self.classifier.cache_len()
                );
                Ok::<_, LoadError>(Corpus { records, terms })
            })
            .await
    }
}

/// One term per populated language, each linked to all of its siblings.
///
/// The part of speech comes from the English form and is shared by every
/// variant; records without an English term classify as unknown.
pub fn expand_record(record: &RawRecord, classifier: &PosClassifier) -> Vec<Term> {
    let populated: Vec<(Language, &str, Uuid)> = record
        .populated()
        .map(|(lang, text)| (lang, text, Uuid::new_v4()))
        .collect();

    if populated.is_empty() {
        return Vec::new();
    }

    let part_of_speech = classifier.classify(record.term(Language::English).unwrap_or(""));
    let definition = record.definition().unwrap_or_default().to_string();

    populated
        .iter()
        .map(|&(lang, text, id)| Term {
            id,
            term: text.to_string(),
            definition: definition.clone(),
            language: lang.name().to_string(),
            domain: record.domain().to_string(),
            part_of_speech,
            translations: populated
                .iter()
                .filter(|(_, _, other)| *other != id)
                .map(|(_, _, other)| *other)
                .collect(),
            example: String::new(),
            related_terms: Vec::new(),
            upvotes: 0,
            downvotes: 0,
            comments: Vec::new(),
        })
        .collect()
}
