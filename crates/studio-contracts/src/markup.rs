const FENCE: &str = "```";
const FENCE_LANGUAGES: &[&str] = &["html", "css", "javascript", "jsx", "tsx"];

/// Body of the first fenced code block in `text`, trimmed. A leading html/css/javascript/jsx/tsx
/// tag is dropped; any other info string stays part of the body.
pub fn extract_code_block(text: &str) -> Option<&str> {
    let start = text.find(FENCE)? + FENCE.len();
    let mut rest = &text[start..];
    if let Some(language) = FENCE_LANGUAGES
        .iter()
        .filter(|language| rest.starts_with(**language))
        .max_by_key(|language| language.len())
    {
        rest = &rest[language.len()..];
    }
    let end = rest.find(FENCE)?;
    Some(rest[..end].trim())
}

/// Text to put on the clipboard for a generated result.
pub fn copyable_code(text: &str) -> &str {
    extract_code_block(text).unwrap_or(text)
}

/// Render plain text for an HTML view by turning line breaks into `<br>`.
pub fn newlines_to_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}
