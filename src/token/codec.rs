use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::{
    composition::model::CompositionRecord,
    foundation::error::{PosyError, PosyResult},
};

/// Bytes escaped by the percent layer: everything except ASCII alphanumerics
/// and `-_.!~*'()`, matching `encodeURIComponent` so legacy tokens stay
/// byte-compatible.
const TOKEN_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode a record into an opaque URL-safe share token.
///
/// The pipeline is canonical JSON, then percent-encoding down to ASCII, then
/// unpadded URL-safe base64. The result contains only `[A-Za-z0-9_-]` and can
/// be embedded in a query value verbatim. Cannot fail for a well-formed
/// record; `decode_token(encode_token(r)?)` returns `r` field-for-field.
pub fn encode_token(record: &CompositionRecord) -> PosyResult<String> {
    let json = serde_json::to_string(record).map_err(|e| PosyError::serde(e.to_string()))?;
    let escaped = utf8_percent_encode(&json, TOKEN_ESCAPE).to_string();
    Ok(URL_SAFE_NO_PAD.encode(escaped.as_bytes()))
}

/// Decode a share token back into a [`CompositionRecord`].
///
/// The input travels through a public link and is treated as hostile: any
/// stage that fails yields [`PosyError::MalformedToken`] and no partial
/// record. Missing text fields default to empty; a missing or ill-typed
/// `items` field is a malformed token.
///
/// Tokens minted by the legacy browser encoder (standard padded base64,
/// `flowers`/`to`/`from` keys) are still accepted.
pub fn decode_token(token: &str) -> PosyResult<CompositionRecord> {
    let payload = decode_base64(token)?;
    let escaped = String::from_utf8(payload)
        .map_err(|_| PosyError::malformed_token("token payload is not UTF-8"))?;
    let json = percent_decode_str(&escaped)
        .decode_utf8()
        .map_err(|_| PosyError::malformed_token("token payload is not valid percent-encoding"))?;
    serde_json::from_str(&json)
        .map_err(|e| PosyError::malformed_token(format!("token payload is not a record: {e}")))
}

fn decode_base64(token: &str) -> PosyResult<Vec<u8>> {
    // Fresh tokens are URL-safe unpadded; legacy ones are standard padded.
    URL_SAFE_NO_PAD
        .decode(token)
        .or_else(|_| STANDARD.decode(token))
        .map_err(|e| PosyError::malformed_token(format!("invalid base64 payload: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/token/codec.rs"]
mod tests;
