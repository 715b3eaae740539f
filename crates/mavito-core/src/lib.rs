pub mod analytics;
pub mod dictionary;
pub mod error;
pub mod language;
pub mod loader;
pub mod pos;
pub mod preprocess;
pub mod search;
pub mod types;

pub use dictionary::{JsonFileSource, RawRecord, TermSource};
pub use error::{AnalyticsError, LoadError};
pub use language::Language;
pub use loader::TermLoader;
pub use pos::{PartOfSpeech, PosClassifier, Tagger, UniversalTag};
pub use search::{SearchEngine, SearchQuery};
pub use types::{Page, SortBy, Suggestion, Term};
