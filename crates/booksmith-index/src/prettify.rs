//! Filename to title conversion.

/// Turn a file stem or directory name into a display title.
///
/// `-` and `_` become spaces, whitespace runs collapse, and each word gets an
/// uppercase first character followed by lowercase. Only the first code point
/// of a word is uppercased, so multi-code-point graphemes may come out oddly.
pub fn prettify(name: &str) -> String {
    name.replace(['-', '_'], " ")
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
