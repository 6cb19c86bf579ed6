/// Drops a redundant `.0` from a weight class label so `"93.0"` matches the
/// `"93"` category and `"84.0+"` matches `"84+"`. Text level only: `"52.5"`
/// is left untouched.
pub fn normalize_weight_class(raw: &str) -> String {
    let raw = raw.trim();
    let (body, plus) = match raw.strip_suffix('+') {
        Some(body) => (body, "+"),
        None => (raw, ""),
    };
    let body = body.strip_suffix(".0").unwrap_or(body);
    format!("{body}{plus}")
}
