//! Text helpers applied to user-supplied feedback before it is stored or rendered.

/// Escape a free-text comment so it can only ever be rendered as text.
///
/// The output matches how a browser serializes a text node: `&`, `<` and `>`
/// become entities, everything else is kept as is. Plain text without those
/// characters is therefore returned unchanged.
pub fn sanitize_comment(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    html_escape::encode_text(input).into_owned()
}

/// Shorten `text` to at most `max_len` characters, ending with `...` when cut.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
    format!("{kept}...")
}
