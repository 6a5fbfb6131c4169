//! Keyword-overlap scoring: Jaccard similarity of lemmatized content words.

use std::collections::HashSet;

use crate::lexicon::{is_stopword, lemmatize};

use super::round3;

fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

fn content_tokens(text: &str) -> HashSet<String> {
    strip_punctuation(text)
        .split_whitespace()
        .filter(|word| !is_stopword(word))
        .map(lemmatize)
        .collect()
}

/// Jaccard similarity of the lemmatized, stop-word-filtered token sets of
/// both strings, rounded to 3 decimals. Defined as `0.0` when both token
/// sets are empty.
///
/// Set semantics throughout: token order is irrelevant and duplicates
/// within one text collapse.
pub fn keyword_score(reference: &str, response: &str) -> f32 {
    let reference_tokens = content_tokens(reference);
    let response_tokens = content_tokens(response);

    let union = reference_tokens.union(&response_tokens).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = reference_tokens.intersection(&response_tokens).count();
    round3(intersection as f32 / union as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_token_sets_score_one() {
        assert_eq!(keyword_score("regression model", "regression model"), 1.0);
        // Order and duplicates are irrelevant.
        assert_eq!(
            keyword_score("model regression", "regression model regression"),
            1.0
        );
    }

    #[test]
    fn disjoint_token_sets_score_zero() {
        assert_eq!(keyword_score("gradient descent", "random forest"), 0.0);
    }

    #[test]
    fn both_empty_token_sets_score_zero() {
        assert_eq!(keyword_score("", ""), 0.0);
        // Stop words only: both sets end up empty.
        assert_eq!(keyword_score("the is a", "of and for"), 0.0);
    }

    #[test]
    fn score_is_symmetric() {
        let pairs = [
            ("support vector machine", "vector machine"),
            ("deep learning network", "network training"),
            ("", "something"),
        ];
        for (a, b) in pairs {
            assert_eq!(keyword_score(a, b), keyword_score(b, a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn stop_words_are_ignored() {
        // "the" and "is" contribute nothing to either set.
        assert_eq!(
            keyword_score("the model is accurate", "model accurate"),
            1.0
        );
    }

    #[test]
    fn lemmatization_merges_plural_forms() {
        assert_eq!(keyword_score("models", "model"), 1.0);
        assert_eq!(keyword_score("features models", "feature model"), 1.0);
    }

    #[test]
    fn punctuation_is_stripped_before_tokenizing() {
        assert_eq!(keyword_score("model, vector.", "model vector"), 1.0);
    }

    #[test]
    fn partial_overlap_is_a_ratio() {
        // tokens: {vector, machine} vs {vector, network}
        // intersection 1, union 3
        assert_eq!(keyword_score("vector machine", "vector network"), 0.333);
    }
}
