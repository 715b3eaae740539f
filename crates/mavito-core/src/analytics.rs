//! Column statistics over the raw records.
//!
//! Columns are named after the normalized dataset keys (`eng_term`,
//! `zul_term`, ...), which is what dashboard clients key their charts on.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::dictionary::RawRecord;
use crate::error::AnalyticsError;
use crate::language::Language;

pub const MAX_TOP_N: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveAnalytics {
    pub category_frequency: BTreeMap<String, usize>,
    pub language_coverage_percent: BTreeMap<String, f64>,
    pub average_term_lengths: BTreeMap<String, f64>,
    pub average_definition_lengths: BTreeMap<String, f64>,
    pub unique_term_counts: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermFrequency {
    pub meta: FrequencyMeta,
    pub data: Vec<FrequencyEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyMeta {
    pub language: String,
    pub total_terms: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub term: String,
    pub frequency: usize,
}

pub fn descriptive(records: &[RawRecord]) -> DescriptiveAnalytics {
    // Uncategorized records are left out rather than defaulted
    let mut category_frequency = BTreeMap::new();
    for category in records.iter().filter_map(RawRecord::category) {
        *category_frequency.entry(category.to_string()).or_insert(0) += 1;
    }

    let mut language_coverage_percent = BTreeMap::new();
    let mut average_term_lengths = BTreeMap::new();
    let mut unique_term_counts = BTreeMap::new();

    for lang in Language::ALL {
        let values: Vec<&str> = records.iter().filter_map(|r| r.term(lang)).collect();
        let column = lang.column();

        language_coverage_percent.insert(column.clone(), percent(values.len(), records.len()));
        average_term_lengths.insert(column.clone(), mean_len(&values));
        unique_term_counts.insert(column, values.iter().collect::<HashSet<_>>().len());
    }

    let definitions: Vec<&str> = records.iter().filter_map(|r| r.definition()).collect();
    let average_definition_lengths =
        BTreeMap::from([("eng_definition".to_string(), mean_len(&definitions))]);

    DescriptiveAnalytics {
        category_frequency,
        language_coverage_percent,
        average_term_lengths,
        average_definition_lengths,
        unique_term_counts,
    }
}

/// Most common term strings in one language column.
///
/// Equal counts keep the order in which the terms first appear.
pub fn term_frequency(
    records: &[RawRecord],
    language_code: &str,
    top_n: usize,
) -> Result<TermFrequency, AnalyticsError> {
    let lang = Language::from_code(language_code)
        .ok_or_else(|| AnalyticsError::UnknownLanguage(language_code.to_string()))?;

    if !(1..=MAX_TOP_N).contains(&top_n) {
        return Err(AnalyticsError::TopNOutOfRange {
            got: top_n,
            max: MAX_TOP_N,
        });
    }

    let terms: Vec<&str> = records.iter().filter_map(|r| r.term(lang)).collect();

    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for &term in &terms {
        let slot = *slots.entry(term).or_insert_with(|| {
            counts.push((term, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(TermFrequency {
        meta: FrequencyMeta {
            language: lang.code().to_string(),
            total_terms: terms.len(),
        },
        data: counts
            .into_iter()
            .take(top_n)
            .map(|(term, frequency)| FrequencyEntry {
                term: term.to_string(),
                frequency,
            })
            .collect(),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}

fn mean_len(values: &[&str]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let total: usize = values.iter().map(|v| v.chars().count()).sum();
    round2(total as f64 / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DEFAULT_DOMAIN;

    fn records() -> Vec<RawRecord> {
        vec![
            RawRecord::new(Some("Agriculture"), Some("gather"))
                .with_term(Language::English, "harvest")
                .with_term(Language::IsiZulu, "ukuvuna"),
            RawRecord::new(Some("Agriculture"), Some("plant"))
                .with_term(Language::English, "crop")
                .with_term(Language::IsiZulu, "isitshalo"),
            RawRecord::new(None, Some("a count"))
                .with_term(Language::English, "crop"),
        ]
    }

    #[test]
    fn descriptive_columns() {
        let stats = descriptive(&records());

        assert_eq!(stats.category_frequency["Agriculture"], 2);
        assert_eq!(stats.category_frequency.len(), 1);
        assert!(!stats.category_frequency.contains_key(DEFAULT_DOMAIN));
        assert_eq!(stats.language_coverage_percent["eng_term"], 100.0);
        assert_eq!(stats.language_coverage_percent["zul_term"], 66.67);
        assert_eq!(stats.language_coverage_percent["afr_term"], 0.0);
        // (7 + 4 + 4) / 3
        assert_eq!(stats.average_term_lengths["eng_term"], 5.0);
        assert_eq!(stats.average_term_lengths["afr_term"], 0.0);
        assert_eq!(stats.unique_term_counts["eng_term"], 2);
        // (6 + 5 + 7) / 3
        assert_eq!(stats.average_definition_lengths["eng_definition"], 6.0);
        assert_eq!(stats.language_coverage_percent.len(), 11);
    }

    #[test]
    fn frequency_orders_by_count_then_first_seen() {
        let freq = term_frequency(&records(), "eng", 10).unwrap();
        assert_eq!(freq.meta.total_terms, 3);
        assert_eq!(freq.meta.language, "eng");
        assert_eq!(
            freq.data,
            vec![
                FrequencyEntry { term: "crop".into(), frequency: 2 },
                FrequencyEntry { term: "harvest".into(), frequency: 1 },
            ]
        );

        let top = term_frequency(&records(), "zul", 1).unwrap();
        assert_eq!(top.data.len(), 1);
        assert_eq!(top.data[0].term, "ukuvuna");
    }

    #[test]
    fn frequency_validates_inputs() {
        assert!(matches!(
            term_frequency(&records(), "xyz", 10),
            Err(AnalyticsError::UnknownLanguage(_))
        ));
        assert!(matches!(
            term_frequency(&records(), "eng", 0),
            Err(AnalyticsError::TopNOutOfRange { got: 0, .. })
        ));
        assert!(matches!(
            term_frequency(&records(), "eng", 101),
            Err(AnalyticsError::TopNOutOfRange { .. })
        ));
    }

    #[test]
    fn empty_dataset_is_all_zero() {
        let stats = descriptive(&[]);
        assert!(stats.category_frequency.is_empty());
        assert_eq!(stats.language_coverage_percent["eng_term"], 0.0);
    }
}
