//! Attribute parsing for `api:start` markers.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Pattern matching one `key="value"` attribute pair.
static ATTR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\w+)\s*=\s*"([^"]*)""#).expect("Invalid attribute regex"));

/// Attributes carried by an `api:start` marker.
///
/// Keys are whatever identifiers appear before `=`; unknown keys are stored
/// and ignored by the renderer. When a key repeats, the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet(BTreeMap<String, String>);

impl AttributeSet {
    /// Parse attributes out of the raw text between `api:start` and `-->`.
    ///
    /// Matches `identifier="value"` anywhere in the string, any number of
    /// times; everything else is skipped. There is no quote escaping, a value
    /// ends at the first `"` that follows it. Never fails: malformed
    /// fragments simply contribute nothing.
    pub fn parse(attr_text: &str) -> Self {
        let mut map = BTreeMap::new();
        for caps in ATTR_PATTERN.captures_iter(attr_text) {
            map.insert(caps[1].to_string(), caps[2].to_string());
        }
        Self(map)
    }

    /// Raw value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// HTTP method, uppercased for display. Empty when absent.
    pub fn method(&self) -> String {
        self.get("method").unwrap_or_default().to_uppercase()
    }

    /// Request path, displayed verbatim. Empty when absent.
    pub fn path(&self) -> &str {
        self.get("path").unwrap_or_default()
    }

    /// Initial open state of the widget: `expanded` is consulted first,
    /// `open` is the fallback when `expanded` is absent or empty; either must
    /// equal `"true"` case-insensitively. Default is closed.
    pub fn is_expanded(&self) -> bool {
        self.get("expanded")
            .filter(|v| !v.is_empty())
            .or_else(|| self.get("open"))
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_input() {
        assert!(AttributeSet::parse("").is_empty());
        assert!(AttributeSet::parse("   ").is_empty());
    }

    #[test]
    fn parse_single_pair() {
        let attrs = AttributeSet::parse(r#" method="GET" "#);
        assert_eq!(attrs.get("method"), Some("GET"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn parse_multiple_pairs_any_order() {
        let attrs = AttributeSet::parse(r#"path="/users" junk method="post""#);
        assert_eq!(attrs.get("method"), Some("post"));
        assert_eq!(attrs.get("path"), Some("/users"));
    }

    #[test]
    fn parse_last_occurrence_wins() {
        let attrs = AttributeSet::parse(r#"method="GET" method="POST""#);
        assert_eq!(attrs.get("method"), Some("POST"));
    }

    #[test]
    fn parse_skips_malformed_fragments() {
        let attrs = AttributeSet::parse(r#"broken= method="GET" =also"bad""#);
        assert_eq!(attrs.get("method"), Some("GET"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn parse_value_ends_at_first_quote() {
        // No escaping: the value stops at the first closing quote.
        let attrs = AttributeSet::parse(r#"path="/a\"b""#);
        assert_eq!(attrs.get("path"), Some(r"/a\"));
    }

    #[test]
    fn parse_keeps_unknown_keys() {
        let attrs = AttributeSet::parse(r#"custom="x" method="GET""#);
        assert_eq!(attrs.get("custom"), Some("x"));
    }

    #[test]
    fn method_is_uppercased() {
        let attrs = AttributeSet::parse(r#"method="delete""#);
        assert_eq!(attrs.method(), "DELETE");
    }

    #[test]
    fn method_defaults_to_empty() {
        assert_eq!(AttributeSet::parse("").method(), "");
    }

    #[test]
    fn expanded_true_is_case_insensitive() {
        assert!(AttributeSet::parse(r#"expanded="true""#).is_expanded());
        assert!(AttributeSet::parse(r#"expanded="TRUE""#).is_expanded());
        assert!(AttributeSet::parse(r#"expanded="True""#).is_expanded());
        assert!(!AttributeSet::parse(r#"expanded="false""#).is_expanded());
        assert!(!AttributeSet::parse(r#"expanded="yes""#).is_expanded());
    }

    #[test]
    fn open_is_the_fallback_for_expanded() {
        assert!(AttributeSet::parse(r#"open="true""#).is_expanded());
        // expanded wins when both are present
        assert!(!AttributeSet::parse(r#"expanded="false" open="true""#).is_expanded());
        // an empty expanded defers to open
        assert!(AttributeSet::parse(r#"expanded="" open="true""#).is_expanded());
    }

    #[test]
    fn default_state_is_closed() {
        assert!(!AttributeSet::parse("").is_expanded());
    }
}
