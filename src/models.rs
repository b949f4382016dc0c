//! Frontend Models
//!
//! Data structures matching the admin item endpoint.

use serde::{Deserialize, Deserializer};
use crate::error::SyncResult;

/// Selected category value (never empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryId(String);

impl CategoryId {
    /// Read a raw selector value. The empty string means "no selection".
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One `<option>` for the items selector (matches endpoint payload)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemOption {
    /// Option value; the endpoint sends a number, strings are accepted too
    #[serde(deserialize_with = "deserialize_option_value")]
    pub id: String,
    /// Display label
    pub text: String,
}

impl ItemOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOptionValue {
    Signed(i64),
    Unsigned(u64),
    Text(String),
}

fn deserialize_option_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawOptionValue::deserialize(deserializer)? {
        RawOptionValue::Signed(n) => n.to_string(),
        RawOptionValue::Unsigned(n) => n.to_string(),
        RawOptionValue::Text(s) => s,
    })
}

/// Decode an endpoint body into options, keeping server order.
///
/// Anything other than an array of `{id, text}` objects is rejected whole.
pub fn decode_items(body: &str) -> SyncResult<Vec<ItemOption>> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncError;

    #[test]
    fn test_empty_category_is_no_selection() {
        assert_eq!(CategoryId::parse(""), None);
        assert_eq!(CategoryId::parse("5").unwrap().as_str(), "5");
        // Only the empty string counts as unselected
        assert_eq!(CategoryId::parse(" ").unwrap().as_str(), " ");
    }

    #[test]
    fn test_decode_items_keeps_order() {
        let items = decode_items(r#"[{"id":1,"text":"Widget"},{"id":2,"text":"Gadget"}]"#).unwrap();
        assert_eq!(items, vec![ItemOption::new("1", "Widget"), ItemOption::new("2", "Gadget")]);
    }

    #[test]
    fn test_decode_accepts_string_ids_and_extra_fields() {
        let body = r#"[{"id":"a-7","text":"Lamp - ₹1200 (available)","status":"available"}]"#;
        let items = decode_items(body).unwrap();
        assert_eq!(items[0].id, "a-7");
        assert_eq!(items[0].text, "Lamp - ₹1200 (available)");
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_items("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_bad_shapes() {
        for body in [
            "<html>login</html>",
            r#"{"id":1,"text":"Widget"}"#,
            r#"[{"id":1}]"#,
            r#"[{"id":null,"text":"Widget"}]"#,
            r#"[{"id":1.5,"text":"Widget"}]"#,
            r#"[{"id":1,"text":"ok"},{"id":true,"text":"bad"}]"#,
        ] {
            assert!(matches!(decode_items(body), Err(SyncError::Decode(_))), "accepted {}", body);
        }
    }
}
