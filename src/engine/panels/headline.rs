/// Splits on `-`, `_` and whitespace, then capitalizes each word.
pub fn clean_title(raw: &str) -> String {
    raw.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A readable headline from the last non-empty path segment of a story URL.
pub fn extract_story_title(url: &str) -> String {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .map(clean_title)
        .unwrap_or_default()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
