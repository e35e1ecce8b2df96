//! Wire request decoding.
//!
//! Decodes the JSON record shape produced by the RPC client: an array of
//! records, each carrying a text payload and a math-mode toggle flag. A
//! record missing either required field rejects the whole batch; nothing
//! is coerced and no partial token list is returned.

use serde::Deserialize;

use latex2gfm_core::Token;

use crate::{ConvertError, Result};

/// One record on the wire. Field names match the client's JSON encoding.
#[derive(Debug, Deserialize)]
struct WireToken {
    /// Position assigned by the client; the array arrives already ordered,
    /// so the field is accepted and ignored
    #[serde(rename = "Order", default)]
    _order: Option<i64>,

    #[serde(rename = "Data")]
    data: String,

    #[serde(rename = "ToggleMathMode")]
    toggle_math_mode: bool,
}

/// Decode a JSON request body into a token sequence
pub fn decode_tokens(body: &str) -> Result<Vec<Token>> {
    let records: Vec<WireToken> = serde_json::from_str(body)
        .map_err(|e| ConvertError::MalformedInput(e.to_string()))?;

    Ok(records
        .into_iter()
        .map(|record| {
            if record.toggle_math_mode {
                Token::toggle_with(&record.data)
            } else {
                Token::text(&record.data)
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_request() {
        let body = r#"[
            {"Order": 0, "Data": "Hello ", "ToggleMathMode": false},
            {"Order": 1, "Data": "$", "ToggleMathMode": true},
            {"Order": 2, "Data": "x^2", "ToggleMathMode": false},
            {"Order": 3, "Data": "$", "ToggleMathMode": true}
        ]"#;
        let tokens = decode_tokens(body).unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].data, "Hello ");
        assert!(!tokens[0].toggles_math_mode);
        assert!(tokens[1].toggles_math_mode);
    }

    #[test]
    fn test_decode_without_order_field() {
        let body = r#"[{"Data": "x", "ToggleMathMode": false}]"#;
        let tokens = decode_tokens(body).unwrap();
        assert_eq!(tokens[0].data, "x");
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_tokens("[]").unwrap().is_empty());
    }

    #[test]
    fn test_missing_toggle_field_rejects_batch() {
        let body = r#"[
            {"Data": "ok", "ToggleMathMode": false},
            {"Data": "missing the flag"}
        ]"#;
        let err = decode_tokens(body).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedInput(_)));
    }

    #[test]
    fn test_missing_data_field_rejects_batch() {
        let body = r#"[{"ToggleMathMode": true}]"#;
        assert!(matches!(
            decode_tokens(body),
            Err(ConvertError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_mistyped_field_rejects_batch() {
        let body = r#"[{"Data": 5, "ToggleMathMode": false}]"#;
        assert!(matches!(
            decode_tokens(body),
            Err(ConvertError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_non_array_body_rejected() {
        assert!(matches!(
            decode_tokens(r#"{"Data": "x"}"#),
            Err(ConvertError::MalformedInput(_))
        ));
        assert!(matches!(
            decode_tokens("not json"),
            Err(ConvertError::MalformedInput(_))
        ));
    }
}
