use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pos::PartOfSpeech;

/// One language-specific rendering of a terminology entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub id: Uuid,
    pub term: String,
    pub definition: String,
    pub language: String,
    pub domain: String,
    pub part_of_speech: PartOfSpeech,
    /// Sibling terms expanded from the same record, never including `id`
    pub translations: Vec<Uuid>,
    pub example: String,
    pub related_terms: Vec<Uuid>,
    pub upvotes: i64,
    pub downvotes: i64,
    pub comments: Vec<String>,
}

impl Term {
    /// Net vote score used by popularity sorting, clamped at the `i64` bounds
    pub fn score(&self) -> i64 {
        self.upvotes.saturating_sub(self.downvotes)
    }
}

/// Autocomplete entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub label: String,
}

impl From<&Term> for Suggestion {
    fn from(term: &Term) -> Self {
        Self {
            id: term.id.to_string(),
            label: term.term.clone(),
        }
    }
}

/// Result ordering. Unrecognized names fall back to [`SortBy::Unsorted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Name,
    Popularity,
    /// Keep loader order
    Unsorted,
}

impl SortBy {
    pub fn parse(name: &str) -> Self {
        match name {
            "name" => SortBy::Name,
            "popularity" => SortBy::Popularity,
            other => {
                tracing::debug!("unrecognized sort_by {other:?}, keeping loader order");
                SortBy::Unsorted
            }
        }
    }
}

impl From<&str> for SortBy {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

/// One page of results plus the unsliced count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> Page<T> {
    /// Slice `results` into a 1-based page. Page 0 is read as page 1; a page
    /// past the end or a zero page size yields no items.
    pub fn paginate(results: Vec<T>, page: usize, page_size: usize) -> Self {
        let total = results.len();
        let start = page.max(1).saturating_sub(1).saturating_mul(page_size);

        let items = results.into_iter().skip(start).take(page_size).collect();
        Self { items, total }
    }
}
