use std::sync::Arc;

use uuid::Uuid;

use crate::error::LoadError;
use crate::loader::TermLoader;
use crate::preprocess::{CaseFolder, Preprocessor};
use crate::types::{SortBy, Suggestion, Term};

/// Maximum number of autocomplete suggestions
pub const SUGGESTION_LIMIT: usize = 10;

/// Query text plus optional filters.
///
/// `query` matches as a case-insensitive substring; the filters must equal
/// the term's field, also ignoring case. An empty query matches everything.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub query: String,
    pub language: Option<String>,
    pub domain: Option<String>,
    pub part_of_speech: Option<String>,
    pub sort_by: SortBy,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn part_of_speech(mut self, part_of_speech: impl Into<String>) -> Self {
        self.part_of_speech = Some(part_of_speech.into());
        self
    }

    pub fn sort_by(mut self, sort_by: impl Into<SortBy>) -> Self {
        self.sort_by = sort_by.into();
        self
    }
}

/// Filter predicate with its inputs folded once
struct Matcher {
    query: String,
    language: Option<String>,
    domain: Option<String>,
    part_of_speech: Option<String>,
}

impl Matcher {
    fn new(folder: &impl Preprocessor, query: &SearchQuery) -> Self {
        let fold = |value: &Option<String>| value.as_deref().map(|v| folder.fold(v));
        Self {
            query: folder.fold(&query.query),
            language: fold(&query.language),
            domain: fold(&query.domain),
            part_of_speech: fold(&query.part_of_speech),
        }
    }

    fn matches(&self, folder: &impl Preprocessor, term: &Term) -> bool {
        let same = |filter: &Option<String>, value: &str| match filter {
            Some(wanted) => *wanted == folder.fold(value),
            None => true,
        };

        folder.fold(&term.term).contains(&self.query)
            && same(&self.language, &term.language)
            && same(&self.domain, &term.domain)
            && same(&self.part_of_speech, term.part_of_speech.as_str())
    }
}

/// Filters and orders the loaded term collection
pub struct SearchEngine {
    loader: Arc<TermLoader>,
    folder: CaseFolder,
}

impl SearchEngine {
    pub fn new(loader: Arc<TermLoader>) -> Self {
        Self {
            loader,
            folder: CaseFolder,
        }
    }

    pub fn loader(&self) -> &TermLoader {
        &self.loader
    }

    /// Full filtered and sorted result set; paging is left to the caller
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Term>, LoadError> {
        let terms = self.loader.load_terms().await?;
        let matcher = Matcher::new(&self.folder, query);

        let mut hits: Vec<&Term> = terms
            .iter()
            .filter(|term| matcher.matches(&self.folder, term))
            .collect();

        order(&mut hits, query.sort_by);

        tracing::debug!(
            "search {:?} matched {} of {} terms",
            query.query,
            hits.len(),
            terms.len()
        );
        Ok(hits.into_iter().cloned().collect())
    }

    /// Up to ten terms whose text starts with `query`, in name order
    pub async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, LoadError> {
        let prefix = self.folder.fold(query);
        let results = self.search(&SearchQuery::new(query)).await?;

        Ok(results
            .iter()
            .filter(|term| self.folder.fold(&term.term).starts_with(&prefix))
            .take(SUGGESTION_LIMIT)
            .map(Suggestion::from)
            .collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Term>, LoadError> {
        let terms = self.loader.load_terms().await?;
        Ok(terms.iter().find(|term| term.id == id).cloned())
    }

    /// Resolve a term's translation set, in the order stored on the term
    pub async fn translations_of(&self, id: Uuid) -> Result<Vec<Term>, LoadError> {
        let terms = self.loader.load_terms().await?;
        let Some(term) = terms.iter().find(|term| term.id == id) else {
            return Ok(Vec::new());
        };

        Ok(term
            .translations
            .iter()
            .filter_map(|sibling| terms.iter().find(|t| t.id == *sibling))
            .cloned()
            .collect())
    }
}

/// Sort filtered hits in place. Sorts are stable, so ties keep loader order.
fn order(hits: &mut [&Term], sort_by: SortBy) {
    match sort_by {
        SortBy::Name => hits.sort_by_cached_key(|term| term.term.to_lowercase()),
        SortBy::Popularity => hits.sort_by_key(|term| std::cmp::Reverse(term.score())),
        SortBy::Unsorted => {}
    }
}
