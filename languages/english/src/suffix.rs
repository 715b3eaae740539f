use mavito_core::pos::UniversalTag;

/// Derivational endings, longest first. The stem left after removing the
/// suffix must be at least `min_stem` characters long.
const RULES: &[(&str, UniversalTag, usize)] = &[
    ("ically", UniversalTag::Adverb, 2),
    ("ization", UniversalTag::Noun, 2),
    ("isation", UniversalTag::Noun, 2),
    ("ability", UniversalTag::Noun, 2),
    ("ibility", UniversalTag::Noun, 2),
    ("ement", UniversalTag::Noun, 2),
    ("ness", UniversalTag::Noun, 2),
    ("ment", UniversalTag::Noun, 3),
    ("tion", UniversalTag::Noun, 2),
    ("sion", UniversalTag::Noun, 2),
    ("ship", UniversalTag::Noun, 3),
    ("hood", UniversalTag::Noun, 3),
    ("ance", UniversalTag::Noun, 2),
    ("ence", UniversalTag::Noun, 2),
    ("ism", UniversalTag::Noun, 2),
    ("ist", UniversalTag::Noun, 3),
    ("ity", UniversalTag::Noun, 2),
    ("ure", UniversalTag::Noun, 3),
    ("ful", UniversalTag::Adjective, 3),
    ("less", UniversalTag::Adjective, 3),
    ("ous", UniversalTag::Adjective, 3),
    ("ive", UniversalTag::Adjective, 3),
    ("able", UniversalTag::Adjective, 3),
    ("ible", UniversalTag::Adjective, 3),
    ("ical", UniversalTag::Adjective, 2),
    ("ial", UniversalTag::Adjective, 2),
    ("ual", UniversalTag::Adjective, 2),
    ("al", UniversalTag::Adjective, 4),
    ("ic", UniversalTag::Adjective, 3),
    ("ish", UniversalTag::Adjective, 3),
    ("ary", UniversalTag::Adjective, 3),
    ("ize", UniversalTag::Verb, 3),
    ("ise", UniversalTag::Verb, 4),
    ("ify", UniversalTag::Verb, 2),
    ("ate", UniversalTag::Verb, 4),
    ("en", UniversalTag::Verb, 4),
    ("ly", UniversalTag::Adverb, 3),
    ("er", UniversalTag::Noun, 3),
    ("or", UniversalTag::Noun, 3),
];

/// Guess a tag from the word's ending, `None` when no rule applies
pub fn guess(word: &str) -> Option<UniversalTag> {
    RULES.iter().find_map(|&(suffix, tag, min_stem)| {
        word.strip_suffix(suffix)
            .filter(|stem| stem.chars().count() >= min_stem)
            .map(|_| tag)
    })
}
