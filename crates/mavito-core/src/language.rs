use serde::{Deserialize, Serialize};

/// Languages carried by the terminology dataset.
///
/// Variant order is the declared per-record order: terms expanded from one
/// record always appear in this order, which is also the order the search
/// engine falls back to when no sort applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    English,
    Afrikaans,
    IsiNdebele,
    IsiXhosa,
    IsiZulu,
    Sepedi,
    Sesotho,
    Setswana,
    SiSwati,
    Tshivenda,
    Xitsonga,
}

impl Language {
    /// Declared order, see the type docs.
    pub const ALL: [Language; 11] = [
        Language::English,
        Language::Afrikaans,
        Language::IsiNdebele,
        Language::IsiXhosa,
        Language::IsiZulu,
        Language::Sepedi,
        Language::Sesotho,
        Language::Setswana,
        Language::SiSwati,
        Language::Tshivenda,
        Language::Xitsonga,
    ];

    /// Human readable name, as exposed on terms
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Afrikaans => "Afrikaans",
            Language::IsiNdebele => "isiNdebele",
            Language::IsiXhosa => "isiXhosa",
            Language::IsiZulu => "isiZulu",
            Language::Sepedi => "Sepedi",
            Language::Sesotho => "Sesotho",
            Language::Setswana => "Setswana",
            Language::SiSwati => "siSwati",
            Language::Tshivenda => "Tshivenda",
            Language::Xitsonga => "Xitsonga",
        }
    }

    /// Three letter code used by the raw dataset columns
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "eng",
            Language::Afrikaans => "afr",
            Language::IsiNdebele => "nde",
            Language::IsiXhosa => "xho",
            Language::IsiZulu => "zul",
            Language::Sepedi => "nso",
            Language::Sesotho => "sot",
            Language::Setswana => "tsn",
            Language::SiSwati => "ssw",
            Language::Tshivenda => "ven",
            Language::Xitsonga => "tso",
        }
    }

    /// Raw record key holding this language's term, e.g. `"zul term"`
    pub fn record_key(&self) -> String {
        format!("{} term", self.code())
    }

    /// Normalized column name used by analytics, e.g. `"zul_term"`
    pub fn column(&self) -> String {
        format!("{}_term", self.code())
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_order_starts_with_english() {
        assert_eq!(Language::ALL[0], Language::English);
        assert_eq!(Language::ALL[10], Language::Xitsonga);
        let mut sorted = Language::ALL;
        sorted.sort();
        assert_eq!(sorted, Language::ALL);
    }

    #[test]
    fn lookups_ignore_case() {
        assert_eq!(Language::from_code("ZUL"), Some(Language::IsiZulu));
        assert_eq!(Language::from_code(" tso "), Some(Language::Xitsonga));
        assert_eq!(Language::from_code("xyz"), None);
        assert_eq!(Language::Tshivenda.column(), "ven_term");
    }
}
