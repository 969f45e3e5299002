/// Query synthesis
///
/// Turns a movie record into a free-text query for the recommendation
/// endpoint, so that "find similar" can reuse the same search path as a typed
/// query. Title words come first, then genres, then keywords.
use crate::models::{ListField, Movie, Resolved};

const TITLE_TOKEN_CAP: usize = 3;
const MIN_TITLE_TOKEN_LEN: usize = 3;
const STOP_WORDS: [&str; 4] = ["the", "and", "for", "with"];
const TITLE_SEPARATORS: [char; 4] = [':', '-', '(', ')'];

/// What to do with a field whose text cannot be parsed as a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Use the raw text as a single token
    RawText,
    /// Contribute nothing
    Skip,
}

/// How many entries a list field contributes, and how it degrades
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPolicy {
    pub cap: usize,
    pub fallback: Fallback,
}

/// Genres are nearly always meaningful, even unparsed
pub const GENRE_POLICY: FieldPolicy = FieldPolicy {
    cap: 2,
    fallback: Fallback::RawText,
};

/// Keywords are a bonus signal; a malformed blob is dropped
pub const KEYWORD_POLICY: FieldPolicy = FieldPolicy {
    cap: 5,
    fallback: Fallback::Skip,
};

/// Builds the "find similar" query for a movie. Never fails.
pub fn synthesize(movie: &Movie) -> String {
    let mut parts = title_tokens(&movie.title);
    parts.extend(field_tokens(movie.genre.as_ref(), GENRE_POLICY));
    parts.extend(field_tokens(movie.keywords.as_ref(), KEYWORD_POLICY));

    let query = parts.join(" ");
    tracing::debug!(title = %movie.title, query = %query, "Synthesized query");
    query
}

/// Meaningful words of a title: no digits, no separators, no short or stop words
pub fn title_tokens(title: &str) -> Vec<String> {
    let cleaned: String = title
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .map(|c| if TITLE_SEPARATORS.contains(&c) { ' ' } else { c })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_TITLE_TOKEN_LEN)
        .filter(|word| !is_stop_word(word))
        .take(TITLE_TOKEN_CAP)
        .map(str::to_string)
        .collect()
}

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS
        .iter()
        .any(|stop| stop.eq_ignore_ascii_case(word))
}

/// Tokens a list-valued field contributes under the given policy
pub fn field_tokens(field: Option<&ListField>, policy: FieldPolicy) -> Vec<String> {
    let Some(field) = field.filter(|f| !f.is_blank()) else {
        return Vec::new();
    };

    match field.resolve() {
        Resolved::Parsed(items) => items.into_iter().take(policy.cap).collect(),
        Resolved::NotAList => Vec::new(),
        Resolved::Malformed => match policy.fallback {
            Fallback::RawText => vec![field.raw()],
            Fallback::Skip => Vec::new(),
        },
    }
}
