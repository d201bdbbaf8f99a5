use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    // First-person singular ("I", "my", "me", "myself")
    pub static ref SELF_KEYWORDS: HashSet<&'static str> =
        ["ben", "benim", "bana", "kendim"].into_iter().collect();

    // First-person plural / twin reference ("we", "our", "us", "the two of us")
    pub static ref GROUP_KEYWORDS: HashSet<&'static str> =
        ["biz", "bizim", "bize", "ikimiz"].into_iter().collect();

    pub static ref POSITIVE_KEYWORDS: HashSet<&'static str> =
        ["mutlu", "iyi", "güzel", "seviyorum", "harika"].into_iter().collect();

    pub static ref NEGATIVE_KEYWORDS: HashSet<&'static str> =
        ["kötü", "üzgün", "nefret", "kızgın", "yalnız"].into_iter().collect();
}

pub fn is_self(token: &str) -> bool {
    SELF_KEYWORDS.contains(token)
}

pub fn is_group(token: &str) -> bool {
    GROUP_KEYWORDS.contains(token)
}

pub fn is_positive(token: &str) -> bool {
    POSITIVE_KEYWORDS.contains(token)
}

pub fn is_negative(token: &str) -> bool {
    NEGATIVE_KEYWORDS.contains(token)
}

/// Counts tokens that are exactly equal to a member of `set`.
///
/// Tokens are expected to be lowercased already; no substring or
/// punctuation-insensitive matching is performed.
pub fn count_matches<S: AsRef<str>>(tokens: &[S], set: &HashSet<&'static str>) -> usize {
    tokens.iter().filter(|t| set.contains(t.as_ref())).count()
}
