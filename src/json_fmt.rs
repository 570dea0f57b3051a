//! JSON formatting tool: pretty-print, minify, validate.

use serde_json::Value;

/// Parses a JSON string, returning a human-readable error message.
pub fn parse_json(input: &str) -> Result<Value, String> {
    serde_json::from_str(input).map_err(|err| err.to_string())
}

/// Re-encodes JSON text pretty-printed (2-space) or minified, trimming
/// trailing whitespace so the output is UI-friendly.
pub fn format_json(input: &str, minify: bool) -> Result<String, String> {
    let value = parse_json(input)?;
    let serialized = if minify {
        serde_json::to_string(&value)
    } else {
        serde_json::to_string_pretty(&value)
    }
    .map_err(|err| err.to_string())?;
    Ok(serialized.trim_end().to_string())
}

/// Checks that the input is valid JSON; the error carries the parser's
/// line/column message for display.
pub fn validate_json(input: &str) -> Result<(), String> {
    parse_json(input).map(|_| ())
}
