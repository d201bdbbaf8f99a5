/// Lowercases the input using full Unicode case mapping.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Unicode whitespace plus the ASCII information separators (U+001C..U+001F),
/// which also delimit words.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Splits lowercased text into maximal runs of non-separator characters.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(is_separator)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
