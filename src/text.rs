//! Case conversion and text statistics for the text-transformer tools.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Counts displayed by the text-statistics tool.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub lines: usize,
    pub sentences: usize,
    pub paragraphs: usize,
}

/// Splits a string into word-like segments using case changes, digits, and
/// separators, so `parseURLQuery2` becomes `["parse", "URL", "Query", "2"]`.
pub fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    for token in input.split(|c: char| !c.is_alphanumeric()) {
        if token.is_empty() {
            continue;
        }
        let chars: Vec<char> = token.chars().collect();
        let mut current = String::new();
        for (i, &ch) in chars.iter().enumerate() {
            let prev = if i > 0 { Some(chars[i - 1]) } else { None };
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                None => false,
                Some(prev) => {
                    // lower->Upper, letter<->digit, or the end of an acronym
                    // (Upper followed by Upper+lower, e.g. "HTMLParser").
                    (ch.is_uppercase() && prev.is_lowercase())
                        || (ch.is_ascii_digit() != prev.is_ascii_digit())
                        || (ch.is_uppercase()
                            && prev.is_uppercase()
                            && next.is_some_and(|n| n.is_lowercase()))
                }
            };
            if boundary && !current.is_empty() {
                words.push(current);
                current = String::new();
            }
            current.push(ch);
        }
        if !current.is_empty() {
            words.push(current);
        }
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn camel(words: &[String]) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

fn alternating(input: &str) -> String {
    let mut upper = false;
    input
        .chars()
        .map(|ch| {
            if !ch.is_alphabetic() {
                return ch;
            }
            let mapped = if upper {
                ch.to_uppercase().next().unwrap_or(ch)
            } else {
                ch.to_lowercase().next().unwrap_or(ch)
            };
            upper = !upper;
            mapped
        })
        .collect()
}

fn inverse(input: &str) -> String {
    input
        .chars()
        .map(|ch| {
            if ch.is_uppercase() {
                ch.to_lowercase().next().unwrap_or(ch)
            } else if ch.is_lowercase() {
                ch.to_uppercase().next().unwrap_or(ch)
            } else {
                ch
            }
        })
        .collect()
}

/// Computes every case rendition of the input at once, keyed by style name,
/// so the UI can show the full list from a single call.
pub fn case_variants(input: &str) -> BTreeMap<String, String> {
    let words = split_words(input);
    let lower_words: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let capitalized: Vec<String> = words.iter().map(|w| capitalize(w)).collect();

    let mut sentence_words = lower_words.clone();
    if let Some(first) = sentence_words.first_mut() {
        *first = capitalize(first);
    }

    let mut map = BTreeMap::new();
    map.insert("lower".into(), input.to_lowercase());
    map.insert("upper".into(), input.to_uppercase());
    map.insert("camel".into(), camel(&words));
    map.insert("pascal".into(), capitalized.concat());
    map.insert("snake".into(), lower_words.join("_"));
    map.insert("constant".into(), lower_words.join("_").to_uppercase());
    map.insert("kebab".into(), lower_words.join("-"));
    map.insert("title".into(), capitalized.join(" "));
    map.insert("sentence".into(), sentence_words.join(" "));
    map.insert("alternating".into(), alternating(input));
    map.insert("inverse".into(), inverse(input));
    map
}

/// Character/word/line/sentence/paragraph counts. Empty input is all zeros.
pub fn text_stats(input: &str) -> TextStats {
    let sentences = input
        .split(['.', '!', '?'])
        .filter(|part| part.chars().any(|c| c.is_alphanumeric()))
        .count();
    let paragraphs = input
        .split("\n\n")
        .filter(|part| !part.trim().is_empty())
        .count();
    TextStats {
        characters: input.chars().count(),
        characters_no_spaces: input.chars().filter(|c| !c.is_whitespace()).count(),
        words: input.split_whitespace().count(),
        lines: input.lines().count(),
        sentences,
        paragraphs,
    }
}
