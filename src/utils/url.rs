//! Query string utilities.
//!
//! Encoding and decoding go through `urlencoding`, so request URLs can be
//! checked in native tests. Decoding follows `URLSearchParams`: `+` is a
//! space and invalid UTF-8 is replaced lossily.

use std::borrow::Cow;

/// Percent-encode a query component.
pub fn encode_component(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Decode a percent-encoded query component.
///
/// Malformed escapes are kept verbatim, the same way browsers treat a
/// hand-edited address bar.
pub fn decode_component(value: &str) -> String {
    let spaced = value.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

/// Look up a parameter in a query string (`?a=1&b=2` or `a=1&b=2`).
///
/// Returns the decoded value of the first matching pair, or `None` when the
/// key is absent. A key without `=` yields an empty value.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(name) == key).then(|| decode_component(value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("items.yml"), "items.yml");
        assert_eq!(
            encode_component("default/assets/a b.png"),
            "default%2Fassets%2Fa%20b.png"
        );
        assert_eq!(encode_component("x&y=z"), "x%26y%3Dz");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("a%20b+c"), "a b c");
        assert_eq!(decode_component("%C3%A9"), "é");
        // Malformed escapes are kept as-is
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
    }

    #[test]
    fn test_query_param() {
        let search = "?lang=en&token=AbC_readonly&flag";
        assert_eq!(query_param(search, "token"), Some("AbC_readonly".to_string()));
        assert_eq!(query_param(search, "lang"), Some("en".to_string()));
        assert_eq!(query_param(search, "flag"), Some(String::new()));
        assert_eq!(query_param(search, "missing"), None);
        assert_eq!(query_param("", "token"), None);
    }

    #[test]
    fn test_query_param_first_match_wins() {
        assert_eq!(
            query_param("token=first&token=second", "token"),
            Some("first".to_string())
        );
    }
}
