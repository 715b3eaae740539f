use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Fold text for case-insensitive comparison
    fn fold(&self, text: &str) -> String {
        // NFC first so composed and decomposed diacritics compare equal
        text.nfc().collect::<String>().to_lowercase()
    }
}

pub struct CaseFolder;
impl Preprocessor for CaseFolder {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_composition() {
        assert_eq!(CaseFolder.fold("Agricultural"), "agricultural");
        assert_eq!(CaseFolder.fold("MU\u{44}\u{32d}I"), "mu\u{1e13}i");
        // whitespace is significant
        assert_eq!(CaseFolder.fold(" Ser"), " ser");
    }
}
