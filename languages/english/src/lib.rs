pub mod lexicon;
pub mod suffix;
pub mod tagger;

pub use lexicon::Lexicon;
pub use tagger::EnglishTagger;
