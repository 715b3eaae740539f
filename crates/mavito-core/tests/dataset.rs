//! Search scenarios against the shipped terminology dataset

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use mavito_core::{
    JsonFileSource, LoadError, Page, PartOfSpeech, PosClassifier, RawRecord, SearchEngine,
    SearchQuery, TermLoader, TermSource,
};
use mavito_lang_english::EnglishTagger;
use uuid::Uuid;

const DATASET: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../data/multilingual_statistical_terminology_clean.json"
);

struct CountingSource {
    inner: JsonFileSource,
    reads: Arc<AtomicUsize>,
}

#[async_trait]
impl TermSource for CountingSource {
    async fn read_records(&self) -> Result<Vec<RawRecord>, LoadError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.read_records().await
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}

fn classifier() -> Arc<PosClassifier> {
    Arc::new(PosClassifier::new(Arc::new(EnglishTagger::new())))
}

fn engine() -> (Arc<AtomicUsize>, SearchEngine) {
    let reads = Arc::new(AtomicUsize::new(0));
    let source = CountingSource {
        inner: JsonFileSource::new(DATASET),
        reads: reads.clone(),
    };
    let loader = TermLoader::new(Box::new(source), classifier());
    (reads, SearchEngine::new(Arc::new(loader)))
}

#[tokio::test]
async fn loads_every_populated_language() {
    let (_, engine) = engine();
    let terms = engine.loader().load_terms().await.unwrap();
    assert!(!terms.is_empty());

    let languages: HashSet<&str> = terms.iter().map(|t| t.language.as_str()).collect();
    assert!(languages.contains("English"));
    assert!(languages.contains("Afrikaans"));
    assert!(languages.contains("isiZulu"));
    assert!(languages.contains("Xitsonga"));
}

#[tokio::test]
async fn translation_sets_match_their_records() {
    let (_, engine) = engine();
    let records = engine.loader().load_records().await.unwrap();
    let terms = engine.loader().load_terms().await.unwrap();

    let mut rest = terms;
    for record in records {
        let k = record.populated().count();
        let (group, tail) = rest.split_at(k);
        rest = tail;

        let ids: HashSet<Uuid> = group.iter().map(|t| t.id).collect();
        for term in group {
            assert_eq!(term.translations.len(), k - 1);
            let mut expected = ids.clone();
            expected.remove(&term.id);
            let actual: HashSet<Uuid> = term.translations.iter().copied().collect();
            assert_eq!(actual, expected);
            assert_eq!(term.domain, record.domain());
        }
    }
    assert!(rest.is_empty());

    let by_id: HashMap<Uuid, _> = terms.iter().map(|t| (t.id, t)).collect();
    assert_eq!(by_id.len(), terms.len(), "ids must be unique");
}

#[tokio::test]
async fn part_of_speech_is_shared_across_variants() {
    let (_, engine) = engine();
    let run = engine
        .search(&SearchQuery::new("run").language("English"))
        .await
        .unwrap();
    assert_eq!(run.len(), 1);
    assert_eq!(run[0].part_of_speech, PartOfSpeech::Verb);

    let siblings = engine.translations_of(run[0].id).await.unwrap();
    assert!(!siblings.is_empty());
    assert!(siblings.iter().all(|t| t.part_of_speech == PartOfSpeech::Verb));
}

#[tokio::test]
async fn empty_query_sorts_everything_by_name() {
    let (_, engine) = engine();
    let results = engine
        .search(&SearchQuery::new("").sort_by("name"))
        .await
        .unwrap();

    assert_eq!(results.len(), engine.loader().load_terms().await.unwrap().len());
    assert!(
        results
            .windows(2)
            .all(|w| w[0].term.to_lowercase() <= w[1].term.to_lowercase())
    );
}

#[tokio::test]
async fn agricultural_scenarios() {
    let (_, engine) = engine();

    let results = engine.search(&SearchQuery::new("agricultural")).await.unwrap();
    assert!(!results.is_empty());
    assert!(
        results
            .iter()
            .all(|t| t.term.to_lowercase().contains("agricultural"))
    );

    let english = engine
        .search(&SearchQuery::new("agricultural").language("English"))
        .await
        .unwrap();
    assert!(!english.is_empty());
    assert!(english.iter().all(|t| t.language == "English"));
}

#[tokio::test]
async fn domain_filter_and_unknown_filters() {
    let (_, engine) = engine();

    let agriculture = engine
        .search(&SearchQuery::new("").domain("Agriculture"))
        .await
        .unwrap();
    assert!(!agriculture.is_empty());
    assert!(agriculture.iter().all(|t| t.domain == "Agriculture"));

    let none = engine.search(&SearchQuery::new("nonexistentwordxyz")).await.unwrap();
    assert!(none.is_empty());

    let fake = engine
        .search(&SearchQuery::new("").language("FakeLanguage"))
        .await
        .unwrap();
    assert!(fake.is_empty());
}

#[tokio::test]
async fn suggestions_are_prefixed_and_capped() {
    let (_, engine) = engine();
    let suggestions = engine.suggest("ser").await.unwrap();

    assert!(!suggestions.is_empty());
    assert!(suggestions.len() <= 10);
    for suggestion in &suggestions {
        assert!(!suggestion.label.is_empty());
        assert!(suggestion.label.to_lowercase().starts_with("ser"));
        assert!(Uuid::parse_str(&suggestion.id).is_ok());
    }

    // "s" matches far more than ten terms
    assert_eq!(engine.suggest("s").await.unwrap().len(), 10);
}

#[tokio::test]
async fn far_page_is_empty_but_counts_everything() {
    let (_, engine) = engine();
    let results = engine.search(&SearchQuery::new("")).await.unwrap();
    let total = results.len();
    assert!(total < 9990);

    let page = Page::paginate(results, 999, 10);
    assert!(page.items.is_empty());
    assert_eq!(page.total, total);
}

#[tokio::test]
async fn load_is_idempotent_and_reads_once() {
    let (reads, engine) = engine();
    let first = engine.loader().load_terms().await.unwrap().to_vec();
    let second = engine.loader().load_terms().await.unwrap().to_vec();
    engine.search(&SearchQuery::new("grain")).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(reads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn missing_dataset_fails_every_search() {
    let loader = TermLoader::new(
        Box::new(JsonFileSource::new("/missing/terms.json")),
        classifier(),
    );
    let engine = SearchEngine::new(Arc::new(loader));

    assert!(matches!(
        engine.search(&SearchQuery::new("grain")).await,
        Err(LoadError::Io { .. })
    ));
    assert!(engine.suggest("gr").await.is_err());
}

#[test]
fn classifier_scenarios() {
    let classifier = classifier();
    assert_eq!(classifier.classify("run"), PartOfSpeech::Verb);
    assert_eq!(classifier.classify("beautiful"), PartOfSpeech::Adjective);
    assert_eq!(classifier.classify(""), PartOfSpeech::Unknown);
    assert_eq!(classifier.classify("走る"), PartOfSpeech::Unknown);
}
