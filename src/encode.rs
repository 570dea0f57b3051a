//! URL percent-encoding and HTML entity tools.

/// Form-style percent encoding: spaces become `+`, everything else follows
/// the usual percent rules.
pub fn url_encode(input: &str) -> String {
    urlencoding::encode(input).replace("%20", "+")
}

/// Inverse of [`url_encode`]; `+` is read as a space before decoding.
pub fn url_decode(input: &str) -> Result<String, String> {
    let normalized = input.replace('+', " ");
    urlencoding::decode(&normalized)
        .map(|cow| cow.into_owned())
        .map_err(|_| "invalid URL encoding".to_string())
}

/// Escapes text for safe embedding in HTML (`<`, `>`, `&` and friends).
pub fn html_escape_text(input: &str) -> String {
    html_escape::encode_text(input).into_owned()
}

/// Resolves HTML entities (named and numeric) back to plain text.
pub fn html_unescape_text(input: &str) -> String {
    html_escape::decode_html_entities(input).into_owned()
}
