use super::*;
use crate::CompositionRecord;

fn record(items: &[&str], recipient: &str, message: &str, sender: &str) -> CompositionRecord {
    CompositionRecord {
        items: items.iter().map(|id| id.to_string()).collect(),
        recipient: recipient.to_string(),
        message: message.to_string(),
        sender: sender.to_string(),
    }
}

#[test]
fn roundtrip_preserves_every_field() {
    let original = record(&["rose", "rose", "tulip"], "Ana", "Hi", "Lee");
    let token = encode_token(&original).unwrap();
    assert_eq!(decode_token(&token).unwrap(), original);
}

#[test]
fn roundtrip_preserves_unicode_content() {
    let original = record(
        &["lotus"],
        "\u{410}\u{43d}\u{430}",
        "happy valentine \u{1F490}\u{1FA77}\nsee you",
        "Lee \u{2764}\u{FE0F}",
    );
    let token = encode_token(&original).unwrap();
    assert_eq!(decode_token(&token).unwrap(), original);
}

#[test]
fn roundtrip_allows_empty_items_and_fields() {
    // Encode never validates; an empty record is syntactically fine.
    let original = record(&[], "", "", "");
    let token = encode_token(&original).unwrap();
    assert_eq!(decode_token(&token).unwrap(), original);
}

#[test]
fn token_stays_in_url_safe_alphabet() {
    for original in [
        record(&["rose"], "Ana", "Hi", "Lee"),
        record(&["rose", "tulip"], "a&b=c?d#e", "spaces and\nnewlines", "+/="),
        record(&["daisy"], "", "\u{1F490}\u{1F337}\u{1F339}", ""),
    ] {
        let token = encode_token(&original).unwrap();
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
            "unsafe character in token {token}"
        );
    }
}

#[test]
fn decode_rejects_garbage_atomically() {
    for bad in ["", "not-valid-base64!!", "%%%", "\u{1F490}"] {
        let err = decode_token(bad).unwrap_err();
        assert!(matches!(err, crate::PosyError::MalformedToken(_)), "{bad}");
    }
}

#[test]
fn decode_rejects_non_record_payloads() {
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    for payload in [
        "plain text",
        "[1,2,3]",
        r#"{"recipient":"Ana"}"#,
        r#"{"items":"rose"}"#,
        r#"{"items":[1,2]}"#,
    ] {
        let token = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        let err = decode_token(&token).unwrap_err();
        assert!(
            matches!(err, crate::PosyError::MalformedToken(_)),
            "{payload}"
        );
    }
}

#[test]
fn decode_accepts_legacy_browser_tokens() {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use percent_encoding::utf8_percent_encode;

    // The original browser encoder: JSON with the old field names,
    // encodeURIComponent, then padded standard-alphabet btoa.
    let json = "{\"flowers\":[\"rose\",\"tulip\"],\"to\":\"Ana\",\
                \"message\":\"love you \u{1FA77}\",\"from\":\"Lee\"}";
    let escaped = utf8_percent_encode(json, TOKEN_ESCAPE).to_string();
    let token = STANDARD.encode(escaped.as_bytes());

    let decoded = decode_token(&token).unwrap();
    assert_eq!(decoded.items, vec!["rose".to_string(), "tulip".to_string()]);
    assert_eq!(decoded.recipient, "Ana");
    assert_eq!(decoded.message, "love you \u{1FA77}");
    assert_eq!(decoded.sender, "Lee");
}

#[test]
fn decode_defaults_missing_text_fields() {
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    let token = URL_SAFE_NO_PAD.encode(r#"{"items":["rose"]}"#.as_bytes());
    let decoded = decode_token(&token).unwrap();
    assert_eq!(decoded.items, vec!["rose".to_string()]);
    assert_eq!(decoded.recipient, "");
    assert_eq!(decoded.message, "");
    assert_eq!(decoded.sender, "");
}
