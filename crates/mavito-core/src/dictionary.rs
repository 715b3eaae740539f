use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use unicode_normalization::UnicodeNormalization;

use crate::error::LoadError;
use crate::language::Language;

pub const DEFAULT_DOMAIN: &str = "General";

const CATEGORY_KEY: &str = "category";
const DEFINITION_KEY: &str = "eng definition";

/// One multilingual terminology entry as stored in the dataset.
///
/// Keys are matched loosely: surrounding whitespace is trimmed, case is
/// ignored and `_` counts as a space, so `"xho term "` and `"xho_term"` both
/// land in the isiXhosa slot. Unrecognized keys are dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct RawRecord {
    category: Option<String>,
    definition: Option<String>,
    terms: [Option<String>; Language::ALL.len()],
}

impl RawRecord {
    pub fn new(category: Option<&str>, definition: Option<&str>) -> Self {
        Self {
            category: category.and_then(clean),
            definition: definition.and_then(clean),
            ..Default::default()
        }
    }

    pub fn with_term(mut self, language: Language, term: &str) -> Self {
        self.terms[language as usize] = clean(term);
        self
    }

    /// Category exactly as stored; `None` when absent or blank
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Domain of the record, `"General"` when absent
    pub fn domain(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_DOMAIN)
    }

    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }

    /// Populated term for `language`, if any
    pub fn term(&self, language: Language) -> Option<&str> {
        self.terms[language as usize].as_deref()
    }

    /// Populated language fields, in declared order
    pub fn populated(&self) -> impl Iterator<Item = (Language, &str)> {
        Language::ALL
            .into_iter()
            .filter_map(|lang| self.term(lang).map(|term| (lang, term)))
    }
}

impl From<BTreeMap<String, Value>> for RawRecord {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        let mut record = RawRecord::default();

        for (key, value) in fields {
            let Some(text) = value_text(&value) else {
                continue;
            };

            let key = normalize_key(&key);
            if key == CATEGORY_KEY {
                record.category = clean(&text);
            } else if key == DEFINITION_KEY {
                record.definition = clean(&text);
            } else if let Some(lang) = Language::ALL
                .into_iter()
                .find(|lang| lang.record_key() == key)
            {
                record.terms[lang as usize] = clean(&text);
            }
        }

        record
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace('_', " ")
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Trim and NFC-normalize, mapping blank strings to `None`
fn clean(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.nfc().collect())
    }
}

/// Where raw records come from
#[async_trait]
pub trait TermSource: Send + Sync {
    /// Read the full record set in source order
    async fn read_records(&self) -> Result<Vec<RawRecord>, LoadError>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// Reads a JSON array of records from disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TermSource for JsonFileSource {
    async fn read_records(&self) -> Result<Vec<RawRecord>, LoadError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;

        parse_records(&json, &self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse a dataset document. `path` is only used for error context.
pub fn parse_records(json: &str, path: &Path) -> Result<Vec<RawRecord>, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_matched_loosely() {
        let json = r#"[{
            "category": "Agriculture",
            "eng term": "crop",
            "xho term ": "isityalo",
            "TSN_TERM": "sejalo",
            "eng definition ": "  a cultivated plant  ",
            "notes": "ignored"
        }]"#;

        let records = parse_records(json, Path::new("inline")).unwrap();
        let record = &records[0];
        assert_eq!(record.domain(), "Agriculture");
        assert_eq!(record.definition(), Some("a cultivated plant"));
        assert_eq!(record.term(Language::English), Some("crop"));
        assert_eq!(record.term(Language::IsiXhosa), Some("isityalo"));
        assert_eq!(record.term(Language::Setswana), Some("sejalo"));
        assert_eq!(record.term(Language::IsiZulu), None);
    }

    #[test]
    fn blank_and_null_fields_are_not_populated() {
        let json = r#"[{"eng term": "yield", "afr term": "   ", "zul term": null}]"#;
        let records = parse_records(json, Path::new("inline")).unwrap();
        let langs: Vec<Language> = records[0].populated().map(|(l, _)| l).collect();
        assert_eq!(langs, vec![Language::English]);
        assert_eq!(records[0].domain(), DEFAULT_DOMAIN);
    }

    #[test]
    fn populated_follows_declared_order() {
        let record = RawRecord::new(None, None)
            .with_term(Language::Xitsonga, "ndzuti")
            .with_term(Language::English, "shade")
            .with_term(Language::IsiZulu, "umthunzi");

        let langs: Vec<Language> = record.populated().map(|(l, _)| l).collect();
        assert_eq!(
            langs,
            vec![Language::English, Language::IsiZulu, Language::Xitsonga]
        );
    }

    #[test]
    fn terms_are_nfc_normalized() {
        // "ḓ" written as d + combining circumflex below
        let record = RawRecord::new(None, None).with_term(Language::Tshivenda, "mu\u{64}\u{32d}i");
        assert_eq!(record.term(Language::Tshivenda), Some("mu\u{1e13}i"));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = parse_records("{not json", Path::new("broken.json")).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));

        let err = parse_records(r#"{"eng term": "x"}"#, Path::new("object.json")).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let source = JsonFileSource::new("/definitely/not/here.json");
        let err = source.read_records().await.unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[tokio::test]
    async fn file_source_reads_records() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = r#"[
            {"eng term": "mean", "zul term": "isilinganiso"},
            {"category": "Economics", "eng term": "inflation"}
        ]"#;
        file.write_all(json.as_bytes()).unwrap();

        let source = JsonFileSource::new(file.path());
        let records = source.read_records().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].domain(), DEFAULT_DOMAIN);
        assert_eq!(records[0].term(Language::IsiZulu), Some("isilinganiso"));
        assert_eq!(records[1].domain(), "Economics");
        assert_eq!(source.describe(), file.path().display().to_string());
    }
}
