//! Heuristic grammar scoring from syntactic tags.

use tracing::debug;

use crate::constants::{GRAMMAR_SCORE_FLOOR, ISSUE_RATIO_EPSILON, WORDS_PER_ACCEPTABLE_ISSUE};
use crate::tagger::{DepLabel, PartOfSpeech, Tagger};

use super::round3;

/// Scores grammatical well-formedness in `[0.2, 1.0]`, rounded to 3
/// decimals. Empty or whitespace-only text scores exactly `0.0`, the one
/// value outside the floor.
///
/// Issues counted: each passive auxiliary, a missing subject, a missing
/// verb, and a missing terminal `.`/`?`/`!`. Longer texts tolerate
/// proportionally more issues (one per 20 words) before the penalty
/// saturates.
pub fn grammar_score<T: Tagger + ?Sized>(tagger: &T, text: &str) -> f32 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let tokens = tagger.analyze(text);
    let word_count = text.split_whitespace().count();

    let mut issues = tokens
        .iter()
        .filter(|t| t.dep == DepLabel::PassiveAuxiliary)
        .count();

    if !tokens.iter().any(|t| t.dep == DepLabel::Subject) {
        issues += 1;
    }
    if !tokens.iter().any(|t| t.pos == PartOfSpeech::Verb) {
        issues += 1;
    }
    if !trimmed.ends_with(|c| matches!(c, '.' | '?' | '!')) {
        issues += 1;
    }

    let max_acceptable = (word_count / WORDS_PER_ACCEPTABLE_ISSUE).max(1);
    let penalty_ratio =
        (issues as f32 / (max_acceptable as f32 + ISSUE_RATIO_EPSILON)).min(1.0);
    let score = (1.0 - penalty_ratio).clamp(GRAMMAR_SCORE_FLOOR, 1.0);

    debug!(word_count, issues, max_acceptable, score, "Grammar score");

    round3(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::{MockTagger, RuleTagger};

    #[test]
    fn empty_text_scores_exactly_zero() {
        let tagger = RuleTagger::new();
        assert_eq!(grammar_score(&tagger, ""), 0.0);
        assert_eq!(grammar_score(&tagger, "   \t\n"), 0.0);
    }

    #[test]
    fn well_formed_sentence_scores_one() {
        // Subject, verb, terminal period, no passives: zero issues.
        let tagger = MockTagger::well_formed();
        assert_eq!(grammar_score(&tagger, "the model learns patterns."), 1.0);
    }

    #[test]
    fn missing_terminal_punctuation_is_one_issue() {
        let tagger = MockTagger::well_formed();
        // 1 issue over max_acceptable 1: penalty saturates near 1, floor applies.
        assert_eq!(grammar_score(&tagger, "the model learns patterns"), 0.2);
    }

    #[test]
    fn each_passive_auxiliary_is_an_issue() {
        let tagger = MockTagger::with_passives(2);
        assert_eq!(grammar_score(&tagger, "short passive text."), 0.2);
    }

    #[test]
    fn missing_subject_and_verb_both_count() {
        let tagger = MockTagger::new(vec![]);
        // No subject, no verb, no terminal punctuation: 3 issues.
        assert_eq!(grammar_score(&tagger, "fragment"), 0.2);
    }

    #[test]
    fn non_empty_text_never_scores_below_floor() {
        let tagger = MockTagger::new(vec![]);
        let score = grammar_score(&tagger, "x");
        assert!((GRAMMAR_SCORE_FLOOR..=1.0).contains(&score));
    }

    #[test]
    fn longer_texts_tolerate_more_issues() {
        // Same single issue (missing terminal punctuation), different lengths.
        let tagger = MockTagger::well_formed();

        let short = "word ".repeat(4);
        let long = "word ".repeat(45);

        let short_score = grammar_score(&tagger, short.trim_end());
        let long_score = grammar_score(&tagger, long.trim_end());

        // 4 words: max_acceptable 1, penalty ~1.0 -> floored at 0.2.
        // 45 words: max_acceptable 2, penalty ~0.5 -> 0.5.
        assert_eq!(short_score, 0.2);
        assert_eq!(long_score, 0.5);
        assert!(long_score > short_score);
    }

    #[test]
    fn rule_tagger_end_to_end() {
        let tagger = RuleTagger::new();

        // Clean active sentence.
        assert_eq!(grammar_score(&tagger, "the model learns patterns."), 1.0);

        // Passive construction in a short sentence saturates the penalty.
        assert_eq!(grammar_score(&tagger, "the data was cleaned."), 0.2);
    }
}
