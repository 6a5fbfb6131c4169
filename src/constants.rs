//! Shared numeric constants.

/// Default sentence-embedding dimension (MiniLM-class models).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Default maximum token count fed to the embedder.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Default capacity of the exact-string embedding memoization cache.
pub const DEFAULT_EMBED_CACHE_CAPACITY: u64 = 2_048;

/// Number of features the regressor consumes: `[semantic, keyword, grammar]`.
pub const FEATURE_COUNT: usize = 3;

/// Lower bound of the grammar score for non-empty text.
pub const GRAMMAR_SCORE_FLOOR: f32 = 0.2;

/// One grammar issue is tolerated per this many words.
pub const WORDS_PER_ACCEPTABLE_ISSUE: usize = 20;

/// Guards the issue-ratio division when `max_acceptable` would otherwise be
/// hit exactly.
pub const ISSUE_RATIO_EPSILON: f32 = 1e-5;
