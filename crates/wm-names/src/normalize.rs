//! Name normalization.

/// Reduce a place name to its lookup key: ASCII letters and spaces only,
/// lowercased.  Digits, punctuation, and non-ASCII characters are dropped.
///
/// ```
/// assert_eq!(wm_names::normalize("Peet's Coffee & Tea"), "peets coffee  tea");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
