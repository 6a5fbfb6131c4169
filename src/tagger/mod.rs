//! Rule-based syntactic tagging.
//!
//! The grammar scorer only needs three signals per token: whether it is a
//! passive auxiliary, whether it is a sentence subject, and its (coarse)
//! part of speech. [`Tagger`] is the seam; [`RuleTagger`] is the bundled
//! deterministic implementation, and [`MockTagger`] feeds fixed tag
//! sequences to tests.

#[cfg(any(test, feature = "mock"))]
mod mock;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockTagger;

/// Coarse part-of-speech classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Verb,
    Noun,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Number,
    Other,
}

/// Dependency roles the grammar scorer inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepLabel {
    /// Auxiliary verb of a passive construction ("was trained").
    PassiveAuxiliary,
    /// Nominal subject of a clause.
    Subject,
    Other,
}

/// A single analyzed token.
#[derive(Debug, Clone)]
pub struct TaggedToken {
    pub text: String,
    pub pos: PartOfSpeech,
    pub dep: DepLabel,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, pos: PartOfSpeech, dep: DepLabel) -> Self {
        Self {
            text: text.into(),
            pos,
            dep,
        }
    }
}

/// Produces per-token dependency labels and parts of speech.
pub trait Tagger: Send + Sync {
    fn analyze(&self, text: &str) -> Vec<TaggedToken>;
}

const AUXILIARIES: &[&str] = &["am", "is", "are", "was", "were", "be", "been", "being"];

const PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they", "who"];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
];

const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "of", "for", "with", "from", "by", "to", "into", "over", "under",
    "between", "through", "as",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but"];

/// Verbs whose surface form carries no telltale suffix.
const COMMON_VERBS: &[&str] = &[
    "have", "has", "had", "do", "does", "did", "can", "could", "will", "would", "should",
    "may", "might", "must", "use", "uses", "make", "makes", "made", "get", "gets", "got",
    "take", "takes", "took", "give", "gives", "gave", "learn", "learns", "train", "trains",
    "predict", "predicts", "classify", "classifies", "split", "splits", "fit", "fits",
    "measure", "measures", "compute", "computes", "run", "runs", "ran", "work", "works",
    "help", "helps", "describe", "describes", "explain", "explains", "show", "shows",
    "mean", "means", "reduce", "reduces", "find", "finds", "found", "build", "builds",
    "built", "keep", "keeps", "kept",
];

/// Past participles without an "-ed"/"-en" ending.
const IRREGULAR_PARTICIPLES: &[&str] = &[
    "done", "made", "built", "kept", "held", "found", "sent", "told", "left", "lost", "put",
    "set", "split", "fit",
];

/// Deterministic English tagger built from closed-class word lists and
/// suffix heuristics. It is intentionally coarse; the grammar score only
/// aggregates its output, it never inspects individual tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        Self
    }

    fn classify(core: &str) -> PartOfSpeech {
        if AUXILIARIES.contains(&core) {
            return PartOfSpeech::Verb;
        }
        if PRONOUNS.contains(&core) {
            return PartOfSpeech::Pronoun;
        }
        if DETERMINERS.contains(&core) {
            return PartOfSpeech::Determiner;
        }
        if ADPOSITIONS.contains(&core) {
            return PartOfSpeech::Adposition;
        }
        if CONJUNCTIONS.contains(&core) {
            return PartOfSpeech::Conjunction;
        }
        if COMMON_VERBS.contains(&core) {
            return PartOfSpeech::Verb;
        }
        if core.chars().all(|c| c.is_ascii_digit()) {
            return PartOfSpeech::Number;
        }
        if (core.len() > 4 && core.ends_with("ing"))
            || (core.len() > 3 && core.ends_with("ed"))
            || core.ends_with("ize")
            || core.ends_with("ise")
            || core.ends_with("ify")
        {
            return PartOfSpeech::Verb;
        }
        // Unknown content words default to nouns, the most common open class.
        PartOfSpeech::Noun
    }

    fn is_participle(core: &str) -> bool {
        (core.len() > 3 && core.ends_with("ed"))
            || (core.len() > 4 && core.ends_with("en"))
            || IRREGULAR_PARTICIPLES.contains(&core)
    }
}

impl Tagger for RuleTagger {
    fn analyze(&self, text: &str) -> Vec<TaggedToken> {
        let cores: Vec<String> = text
            .split_whitespace()
            .map(|w| {
                w.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .filter(|core| !core.is_empty())
            .collect();

        let mut tokens: Vec<TaggedToken> = cores
            .iter()
            .map(|core| TaggedToken::new(core.clone(), Self::classify(core), DepLabel::Other))
            .collect();

        // Passive auxiliaries: a be-form directly followed by a participle.
        for i in 0..tokens.len() {
            if AUXILIARIES.contains(&tokens[i].text.as_str())
                && tokens
                    .get(i + 1)
                    .is_some_and(|next| Self::is_participle(&next.text))
            {
                tokens[i].dep = DepLabel::PassiveAuxiliary;
            }
        }

        // Subject: the first noun or pronoun preceding the first verb. A
        // clause without any verb has no subject, matching how a dependency
        // parse roots a verbless fragment on the noun itself.
        if let Some(first_verb) = tokens.iter().position(|t| t.pos == PartOfSpeech::Verb) {
            if let Some(subject) = tokens[..first_verb].iter_mut().find(|t| {
                matches!(t.pos, PartOfSpeech::Noun | PartOfSpeech::Pronoun)
                    && t.dep == DepLabel::Other
            }) {
                subject.dep = DepLabel::Subject;
            }
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<TaggedToken> {
        RuleTagger::new().analyze(text)
    }

    #[test]
    fn detects_subject_and_verb() {
        let tokens = tags("the model learns patterns.");
        assert!(tokens.iter().any(|t| t.dep == DepLabel::Subject));
        assert!(tokens.iter().any(|t| t.pos == PartOfSpeech::Verb));
        let subject = tokens.iter().find(|t| t.dep == DepLabel::Subject).unwrap();
        assert_eq!(subject.text, "model");
    }

    #[test]
    fn detects_passive_auxiliary() {
        let tokens = tags("the data was cleaned.");
        let passives: Vec<_> = tokens
            .iter()
            .filter(|t| t.dep == DepLabel::PassiveAuxiliary)
            .collect();
        assert_eq!(passives.len(), 1);
        assert_eq!(passives[0].text, "was");
    }

    #[test]
    fn active_be_is_not_passive() {
        let tokens = tags("the model is accurate.");
        assert!(
            tokens
                .iter()
                .all(|t| t.dep != DepLabel::PassiveAuxiliary)
        );
    }

    #[test]
    fn verbless_fragment_has_no_subject() {
        let tokens = tags("a simple answer");
        assert!(tokens.iter().all(|t| t.dep != DepLabel::Subject));
        assert!(tokens.iter().all(|t| t.pos != PartOfSpeech::Verb));
    }

    #[test]
    fn punctuation_only_tokens_are_dropped() {
        let tokens = tags("hello ... world");
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(tags("").is_empty());
        assert!(tags("   ").is_empty());
    }
}
