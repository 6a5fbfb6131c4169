//! English stop words and a rule-based noun lemmatizer.
//!
//! Both are bundled so the keyword scorer needs no external resources at
//! runtime. The lemmatizer only targets the noun forms that matter for
//! set-overlap scoring: irregular plurals plus common plural suffixes.

use std::collections::HashSet;
use std::sync::LazyLock;

/// English stop words excluded from keyword comparison.
const STOP_WORD_LIST: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "should", "now",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

/// Irregular plural forms the suffix rules cannot reach.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("matrices", "matrix"),
    ("indices", "index"),
    ("vertices", "vertex"),
    ("analyses", "analysis"),
    ("hypotheses", "hypothesis"),
    ("criteria", "criterion"),
];

/// Returns `true` if `word` is in the bundled English stop-word set.
pub fn is_stopword(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Reduces a word to its base (dictionary) form.
///
/// Irregular plurals are mapped directly; otherwise plural suffixes are
/// stripped (`studies` -> `study`, `boxes` -> `box`, `models` -> `model`).
/// Words that match no rule are returned unchanged.
pub fn lemmatize(word: &str) -> String {
    for (plural, singular) in IRREGULAR_PLURALS {
        if word == *plural {
            return (*singular).to_string();
        }
    }

    if word.len() > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }

    if word.len() > 4
        && (word.ends_with("sses")
            || word.ends_with("xes")
            || word.ends_with("zes")
            || word.ends_with("ches")
            || word.ends_with("shes"))
    {
        return word[..word.len() - 2].to_string();
    }

    if word.len() > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_stop_words_are_recognized() {
        for word in ["the", "is", "and", "of", "for", "a"] {
            assert!(is_stopword(word), "{word} should be a stop word");
        }
    }

    #[test]
    fn content_words_are_not_stop_words() {
        for word in ["model", "regression", "learning", "vector"] {
            assert!(!is_stopword(word), "{word} should not be a stop word");
        }
    }

    #[test]
    fn lemmatizes_regular_plurals() {
        assert_eq!(lemmatize("models"), "model");
        assert_eq!(lemmatize("features"), "feature");
        assert_eq!(lemmatize("studies"), "study");
        assert_eq!(lemmatize("boxes"), "box");
        assert_eq!(lemmatize("matches"), "match");
        assert_eq!(lemmatize("classes"), "class");
    }

    #[test]
    fn lemmatizes_irregular_plurals() {
        assert_eq!(lemmatize("children"), "child");
        assert_eq!(lemmatize("matrices"), "matrix");
        assert_eq!(lemmatize("analyses"), "analysis");
    }

    #[test]
    fn leaves_base_forms_alone() {
        assert_eq!(lemmatize("model"), "model");
        assert_eq!(lemmatize("class"), "class");
        assert_eq!(lemmatize("analysis"), "analysis");
        assert_eq!(lemmatize("corpus"), "corpus");
        assert_eq!(lemmatize("gas"), "gas");
    }
}
