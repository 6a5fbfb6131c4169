use super::{DepLabel, PartOfSpeech, TaggedToken, Tagger};

/// Tagger returning a fixed token sequence regardless of input.
///
/// Lets grammar-score tests pin the exact issue count instead of depending
/// on [`RuleTagger`](super::RuleTagger) heuristics.
#[derive(Debug, Clone, Default)]
pub struct MockTagger {
    tokens: Vec<TaggedToken>,
}

impl MockTagger {
    pub fn new(tokens: Vec<TaggedToken>) -> Self {
        Self { tokens }
    }

    /// A minimal well-formed clause: subject + verb.
    pub fn well_formed() -> Self {
        Self::new(vec![
            TaggedToken::new("model", PartOfSpeech::Noun, DepLabel::Subject),
            TaggedToken::new("learns", PartOfSpeech::Verb, DepLabel::Other),
        ])
    }

    /// `passive_count` passive auxiliaries on top of a well-formed clause.
    pub fn with_passives(passive_count: usize) -> Self {
        let mut tokens = vec![
            TaggedToken::new("model", PartOfSpeech::Noun, DepLabel::Subject),
            TaggedToken::new("learns", PartOfSpeech::Verb, DepLabel::Other),
        ];
        for _ in 0..passive_count {
            tokens.push(TaggedToken::new(
                "was",
                PartOfSpeech::Verb,
                DepLabel::PassiveAuxiliary,
            ));
        }
        Self::new(tokens)
    }
}

impl Tagger for MockTagger {
    fn analyze(&self, _text: &str) -> Vec<TaggedToken> {
        self.tokens.clone()
    }
}
