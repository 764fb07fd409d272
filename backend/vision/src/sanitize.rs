//! Model-output cleanup: strip markdown artifacts and isolate the JSON object.
//!
//! Vision models routinely ignore "no markdown formatting" and wrap their
//! answer in code fences or explanatory prose. Cleanup happens in two passes:
//! fence markers are removed, then the first greedy brace-delimited region is
//! taken as the payload.

use once_cell::sync::Lazy;
use regex::Regex;

static JSON_FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```json\n?").unwrap());

static FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```\n?").unwrap());

/// Greedy: first `{` through the last `}`, newlines included.
static JSON_OBJECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Extract the JSON object substring from raw model output.
///
/// If no brace-delimited region exists, the de-fenced trimmed text is
/// returned unchanged and left for the JSON parser to reject.
pub fn extract_json(raw: &str) -> String {
    let cleaned = raw.trim();
    let cleaned = JSON_FENCE_RE.replace_all(cleaned, "");
    let cleaned = FENCE_RE.replace_all(&cleaned, "");

    match JSON_OBJECT_RE.find(&cleaned) {
        Some(m) => m.as_str().to_string(),
        None => cleaned.trim().to_string(),
    }
}
