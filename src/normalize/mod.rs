//! Text normalization applied to answers and responses before scoring.
//!
//! Normalization is total: any string input produces a string output, and
//! empty/whitespace-only input passes through unchanged. The steps are, in
//! order: markup removal, character whitelisting, lower-casing, and ordered
//! domain-term expansion.

#[cfg(test)]
mod tests;

/// Punctuation that survives normalization. Everything else outside
/// letters/digits/whitespace is dropped.
const ALLOWED_PUNCTUATION: &[char] = &['.', ',', '?', '!', '\'', '"'];

/// Ordered, literal substring replacements for domain abbreviations.
///
/// Replacement is substring-based, not word-boundary-based: an abbreviation
/// matching inside a larger word is replaced there too (e.g. "cs" inside
/// "physics"). This is a known, intentional limitation of the scoring
/// pipeline; switching to word-boundary matching changes observable scores.
/// Entries are applied top to bottom, so a replacement's output is itself
/// visible to later entries.
pub const TERM_EXPANSIONS: &[(&str, &str)] = &[
    ("ml", "machine learning"),
    ("ai", "artificial intelligence"),
    ("dl", "deep learning"),
    ("nlp", "natural language processing"),
    ("cv", "computer vision"),
    ("eda", "exploratory data analysis"),
    ("svm", "support vector machine"),
    ("cnn", "convolutional neural network"),
    ("rnn", "recurrent neural network"),
    ("ann", "artificial neural network"),
    ("lstm", "long short term memory"),
    ("xgboost", "extreme gradient boosting"),
    ("gbm", "gradient boosting machine"),
    ("knn", "k nearest neighbors"),
    ("lr", "logistic regression"),
    ("regression model", "regression"),
    ("classification model", "classification"),
    ("scikit-learn", "sklearn"),
    ("sci-kit learn", "sklearn"),
    ("tf", "tensorflow"),
    ("pytorch", "torch"),
    ("feature engineering", "feature extraction"),
    ("data wrangling", "data cleaning"),
    ("data visualization", "data viz"),
    ("viz", "visualization"),
    ("cs", "computer science"),
    ("it", "information technology"),
];

/// Deletes HTML-like `<...>` spans. A span never crosses a line break: a
/// `<` with no `>` on the same line is literal text (the character
/// whitelist removes the bracket afterwards).
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let line_end = tail.find('\n').unwrap_or(tail.len());
        match tail[..line_end].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                out.push('<');
                rest = &rest[open + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Keeps only ASCII letters/digits, whitespace, and `. , ? ! ' "`.
fn filter_allowed(text: &str) -> String {
    text.chars()
        .filter(|c| {
            c.is_ascii_alphanumeric() || c.is_whitespace() || ALLOWED_PUNCTUATION.contains(c)
        })
        .collect()
}

/// Applies [`TERM_EXPANSIONS`] in table order. Input must already be
/// lower-cased; matching is literal.
///
/// Re-applying expansion to already-expanded text is not guaranteed to be a
/// no-op.
pub fn expand_terms(text: &str) -> String {
    let mut text = text.to_string();
    for (abbreviation, expansion) in TERM_EXPANSIONS {
        text = text.replace(abbreviation, expansion);
    }
    text
}

/// Full normalization pass: markup removal, character whitelist, lower-case,
/// domain-term expansion.
pub fn normalize(raw: &str) -> String {
    let cleaned = filter_allowed(&strip_markup(raw));
    expand_terms(&cleaned.to_lowercase())
}
