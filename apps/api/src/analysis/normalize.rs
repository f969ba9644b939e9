/// Canonicalizes raw JD text for keyword matching.
///
/// Lowercases, then replaces every character outside `[a-z0-9+#.]` and
/// whitespace with a space, so tokens like `c++`, `c#` and `node.js` survive.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if is_kept(c) { c } else { ' ' })
        .collect()
}

fn is_kept(c: char) -> bool {
    c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || matches!(c, '+' | '#' | '.')
        || c.is_whitespace()
        || c == '\u{feff}'
}
