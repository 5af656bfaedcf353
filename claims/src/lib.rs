//! Shared claim model and unverified JWT payload codec.
//!
//! This crate owns the token representation the browser client relies on. It
//! deliberately decodes ONLY the payload segment: no signature, issuer, or
//! audience verification happens here, so a [`DecodedToken`] is suitable for
//! display and routing decisions but must never be treated as an
//! authorization boundary. The server that issued the token is expected to
//! re-validate it on every request.


use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error returned by [`decode`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The token is not three dot-separated segments.
    #[error("expected three dot-separated token segments")]
    InvalidFormat,
    /// The payload segment is not valid Base64URL.
    #[error("failed to decode payload segment: {0}")]
    Payload(#[from] base64::DecodeError),
    /// The payload bytes are not valid JSON.
    #[error("failed to parse payload JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload parsed, but its top level is not a JSON object.
    #[error("token payload is not a JSON object")]
    NotAnObject,
}

/// A single named attribute asserted about an identity.
///
/// Claim names are not unique within a token; a name may repeat (e.g. one
/// `role` claim per granted role).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim name (e.g. `"sub"`, `"role"`).
    pub name: String,
    /// Claim value in its string form.
    pub value: String,
}

impl Claim {
    /// Build a claim from name/value string pairs.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// The decoded, unverified content of a token payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedToken {
    /// Flattened claim set. Unordered; a name may repeat.
    pub claims: Vec<Claim>,
    /// The registered `exp` claim in Unix seconds, if present.
    pub expires_at: Option<i64>,
}

impl DecodedToken {
    /// Whether the token's expiry is strictly before `now_unix_secs`.
    ///
    /// A token without an `exp` claim reports expired: absent expiry decodes
    /// to the epoch-zero sentinel in the reference token handler, which
    /// always compares before any real clock reading.
    #[must_use]
    pub fn is_expired(&self, now_unix_secs: i64) -> bool {
        self.expires_at.is_none_or(|exp| exp < now_unix_secs)
    }

    /// First claim value with the given name, if any.
    #[must_use]
    pub fn claim(&self, name: &str) -> Option<&str> {
        self.claims
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.as_str())
    }

    /// All claim values with the given name, in payload order.
    pub fn claims_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.claims
            .iter()
            .filter(move |c| c.name == name)
            .map(|c| c.value.as_str())
    }
}

/// Decode a compact JWT's payload segment without verifying anything.
///
/// Each top-level payload member becomes one claim; an array member becomes
/// one claim per element, all sharing the member's name. String values are
/// carried verbatim, any other value is carried in its JSON text form.
/// Registered claims (`exp`, `iat`, ...) appear in the claim list like any
/// other member.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the token is not three segments, the payload
/// segment is not Base64URL, or its bytes are not a JSON object.
pub fn decode(token: &str) -> Result<DecodedToken, DecodeError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError::InvalidFormat);
    }

    // Compact JWTs are unpadded, but some encoders emit padding anyway.
    let payload = URL_SAFE_NO_PAD.decode(segments[1].trim_end_matches('='))?;
    let parsed: Value = serde_json::from_slice(&payload)?;
    let Value::Object(members) = parsed else {
        return Err(DecodeError::NotAnObject);
    };

    let mut claims = Vec::with_capacity(members.len());
    let mut expires_at = None;
    for (name, value) in &members {
        if name == "exp" {
            expires_at = integer_seconds(value);
        }
        match value {
            Value::Array(items) => {
                claims.extend(items.iter().map(|item| Claim::new(name, claim_text(item))));
            }
            other => claims.push(Claim::new(name, claim_text(other))),
        }
    }

    Ok(DecodedToken { claims, expires_at })
}

fn claim_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Read a NumericDate member as whole Unix seconds.
fn integer_seconds(value: &Value) -> Option<i64> {
    if let Some(int) = value.as_i64() {
        return Some(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    value
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
        .map(|f| f as i64)
}
