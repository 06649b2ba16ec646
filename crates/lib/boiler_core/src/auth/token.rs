//! Bearer token payload decoding.
//!
//! Tokens are decoded without signature verification; the API server
//! verifies them on every request.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::Claims;

/// Standard alphabet, tolerant of missing padding and non-zero trailing bits.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// The token could not be decoded.
///
/// Malformed structure, bad base64 and bad JSON all collapse into this one
/// error; the message is only meant for logs.
#[derive(Debug, Error)]
#[error("Token decode error: {0}")]
pub struct DecodeError(String);

/// Decode the payload segment of a token into typed claims.
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    decode_value(token).map(Claims::from_map)
}

/// Decode the payload segment of a token into the raw JSON object.
pub fn decode_value(token: &str) -> Result<Map<String, Value>, DecodeError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    }

    let mut payload: String = segments[1]
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    let missing = (4 - payload.len() % 4) % 4;
    payload.extend(std::iter::repeat_n('=', missing));

    let bytes = PAYLOAD_ENGINE
        .decode(payload.as_bytes())
        .map_err(|e| DecodeError(format!("base64: {e}")))?;

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(DecodeError("payload is not a JSON object".into())),
        Err(e) => Err(DecodeError(format!("json: {e}"))),
    }
}

/// Build an unsigned token (`alg: none`) carrying `payload`.
///
/// Used for fixtures and local tooling; the dashboard never mints tokens.
pub fn encode_unsigned(payload: &Value) -> String {
    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let header = engine.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let body = engine.encode(payload.to_string());
    format!("{header}.{body}.")
}
