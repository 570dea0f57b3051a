//! Pure transformation core behind a collection of browser mini tools.
//!
//! Each tool lives in its own module as plain Rust functions; the
//! `#[wasm_bindgen]` exports here are thin adapters that serialize
//! structured results for the page and map error strings to `JsValue`.

use console_error_panic_hook::set_once as set_panic_hook;
use wasm_bindgen::prelude::*;

pub mod datetime;
pub mod diff;
pub mod encode;
pub mod json_fmt;
pub mod text;
pub mod url_info;


#[wasm_bindgen(start)]
pub fn wasm_start() {
    set_panic_hook();
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Side-by-side comparison of two texts; returns the serialized rows and
/// summary counters for the diff tool.
#[wasm_bindgen]
pub fn compare_texts(original: &str, modified: &str) -> Result<JsValue, JsValue> {
    to_js(&diff::compute_diff(original, modified))
}

#[wasm_bindgen]
pub fn date_difference(start: &str, end: &str) -> Result<JsValue, JsValue> {
    let diff = datetime::date_difference(start, end).map_err(|err| JsValue::from_str(&err))?;
    to_js(&diff)
}

#[wasm_bindgen]
pub fn iso_week_info(date: &str) -> Result<JsValue, JsValue> {
    let info = datetime::iso_week(date).map_err(|err| JsValue::from_str(&err))?;
    to_js(&info)
}

#[wasm_bindgen]
pub fn count_business_days(start: &str, end: &str) -> Result<u32, JsValue> {
    datetime::business_days(start, end).map_err(|err| JsValue::from_str(&err))
}

#[wasm_bindgen]
pub fn shift_date(date: &str, years: i32, months: i32, days: i32) -> Result<String, JsValue> {
    datetime::add_to_date(date, years, months, days).map_err(|err| JsValue::from_str(&err))
}

#[wasm_bindgen]
pub fn day_of_year_info(date: &str) -> Result<u32, JsValue> {
    datetime::day_of_year(date).map_err(|err| JsValue::from_str(&err))
}

/// All case renditions of the input keyed by style name.
#[wasm_bindgen]
pub fn convert_case(input: &str) -> Result<JsValue, JsValue> {
    to_js(&text::case_variants(input))
}

#[wasm_bindgen]
pub fn analyze_text(input: &str) -> Result<JsValue, JsValue> {
    to_js(&text::text_stats(input))
}

#[wasm_bindgen]
pub fn url_encode(input: &str) -> String {
    encode::url_encode(input)
}

#[wasm_bindgen]
pub fn url_decode(input: &str) -> Result<String, JsValue> {
    encode::url_decode(input).map_err(|err| JsValue::from_str(&err))
}

#[wasm_bindgen]
pub fn escape_html(input: &str) -> String {
    encode::html_escape_text(input)
}

#[wasm_bindgen]
pub fn unescape_html(input: &str) -> String {
    encode::html_unescape_text(input)
}

#[wasm_bindgen]
pub fn parse_url(input: &str) -> Result<JsValue, JsValue> {
    let parts = url_info::parse_url(input).map_err(|err| JsValue::from_str(&err))?;
    to_js(&parts)
}

#[wasm_bindgen]
pub fn format_json_text(input: &str, minify: bool) -> Result<String, JsValue> {
    json_fmt::format_json(input, minify).map_err(|err| JsValue::from_str(&err))
}

#[wasm_bindgen]
pub fn validate_json_text(input: &str) -> Result<(), JsValue> {
    json_fmt::validate_json(input).map_err(|err| JsValue::from_str(&err))
}
