//! Field-level normalization helpers shared by the page schemas.
//!
//! Every helper reads from a `serde_json::Value` that may be anything a
//! client submitted: wrong types, blank strings, and short or junk arrays
//! all fall back to the page defaults instead of failing.

use serde_json::Value;

/// Trimmed non-blank string at `key`, else the fallback.
pub(crate) fn text(input: &Value, key: &str, fallback: &str) -> String {
    match input.get(key).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => fallback.to_string(),
    }
}

/// Like [`text`] but only accepts site-local (`/...`) or absolute
/// `http(s)` links, keeping `javascript:` and other schemes out of
/// rendered href attributes.
pub(crate) fn link(input: &Value, key: &str, fallback: &str) -> String {
    match input.get(key).and_then(Value::as_str) {
        Some(s) => {
            let trimmed = s.trim();
            if trimmed.starts_with('/') || trimmed.starts_with("http") {
                trimmed.to_string()
            } else {
                fallback.to_string()
            }
        }
        None => fallback.to_string(),
    }
}

/// Icon name at `key` when it is one of `allowed`, else the fallback.
pub(crate) fn icon(input: &Value, key: &str, allowed: &[&str], fallback: &str) -> String {
    match input.get(key).and_then(Value::as_str) {
        Some(s) if allowed.contains(&s) => s.to_string(),
        _ => fallback.to_string(),
    }
}

/// Non-zero integer at `key`, else the fallback.
pub(crate) fn nonzero_int(input: &Value, key: &str, fallback: i64) -> i64 {
    match input.get(key).and_then(Value::as_i64) {
        Some(n) if n != 0 => n,
        _ => fallback,
    }
}

/// Non-empty strings from the array at `key`; the fallback list when
/// nothing survives the filter.
pub(crate) fn string_list<S: AsRef<str>>(input: &Value, key: &str, fallback: &[S]) -> Vec<String> {
    let items: Vec<String> = input
        .get(key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default();

    if items.is_empty() {
        fallback.iter().map(|s| s.as_ref().to_string()).collect()
    } else {
        items
    }
}

/// Element `index` of the array at `key`, or `Value::Null` when absent.
/// Section normalizers walk their default items and pull the matching
/// submitted item through this.
pub(crate) fn item<'a>(input: &'a Value, key: &str, index: usize) -> &'a Value {
    input
        .get(key)
        .and_then(Value::as_array)
        .and_then(|values| values.get(index))
        .unwrap_or(&Value::Null)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_trims_and_falls_back() {
        let input = json!({"a": "  hello  ", "b": "   ", "c": 7});

        assert_eq!(text(&input, "a", "x"), "hello");
        assert_eq!(text(&input, "b", "x"), "x");
        assert_eq!(text(&input, "c", "x"), "x");
        assert_eq!(text(&input, "missing", "x"), "x");
    }

    #[test]
    fn test_link_rejects_non_http_schemes() {
        let input = json!({
            "local": " /bao-gia ",
            "abs": "https://example.com",
            "js": "javascript:alert(1)",
            "bare": "bao-gia",
        });

        assert_eq!(link(&input, "local", "/x"), "/bao-gia");
        assert_eq!(link(&input, "abs", "/x"), "https://example.com");
        assert_eq!(link(&input, "js", "/x"), "/x");
        assert_eq!(link(&input, "bare", "/x"), "/x");
        assert_eq!(link(&input, "missing", "/x"), "/x");
    }

    #[test]
    fn test_icon_membership() {
        let input = json!({"good": "truck", "bad": "sparkles"});
        let allowed = &["factory", "truck"];

        assert_eq!(icon(&input, "good", allowed, "factory"), "truck");
        assert_eq!(icon(&input, "bad", allowed, "factory"), "factory");
    }

    #[test]
    fn test_nonzero_int() {
        let input = json!({"n": 3, "zero": 0, "s": "4"});

        assert_eq!(nonzero_int(&input, "n", 9), 3);
        assert_eq!(nonzero_int(&input, "zero", 9), 9);
        assert_eq!(nonzero_int(&input, "s", 9), 9);
    }

    #[test]
    fn test_string_list_filters_then_falls_back() {
        let input = json!({"imgs": ["/a.jpg", "", 5, "/b.jpg"], "junk": "nope"});
        let fallback = &["/d.jpg"];

        assert_eq!(string_list(&input, "imgs", fallback), vec!["/a.jpg", "/b.jpg"]);
        assert_eq!(string_list(&input, "junk", fallback), vec!["/d.jpg"]);
        assert_eq!(string_list(&input, "missing", fallback), vec!["/d.jpg"]);
    }

    #[test]
    fn test_item_walks_arrays() {
        let input = json!({"steps": [{"title": "one"}]});

        assert_eq!(item(&input, "steps", 0)["title"], "one");
        assert!(item(&input, "steps", 5).is_null());
        assert!(item(&input, "missing", 0).is_null());
    }
}
