//! Access-token claim decoding and expiry checks
//!
//! Tokens are treated as opaque bearer credentials except for the claims
//! segment, which is decoded locally to read the expiry and optional profile
//! fields. No signature verification happens on the client.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;
use thiserror::Error;

/// Token decode failures
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is not in compact JWS form")]
    Malformed,

    #[error("claims segment is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("claims segment is not valid JSON: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Claims carried by an access token
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Expiry as epoch seconds
    pub exp: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(default, rename = "lastName")]
    pub last_name: Option<String>,
}

/// Decode the claims segment of a compact-form token
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(TokenError::Malformed),
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Whether the token has expired
///
/// A token that cannot be decoded counts as expired.
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, chrono::Utc::now().timestamp())
}

/// Expiry check against an explicit clock, for deterministic tests
pub fn is_expired_at(token: &str, now: i64) -> bool {
    match decode_claims(token) {
        Ok(claims) => now >= claims.exp,
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(claims: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn decodes_profile_claims() {
        let token = make_token(serde_json::json!({
            "exp": 2_000_000_000i64,
            "email": "a@b.com",
            "firstName": "Ada",
            "lastName": "Lovelace"
        }));

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.exp, 2_000_000_000);
        assert_eq!(claims.email.as_deref(), Some("a@b.com"));
        assert_eq!(claims.first_name.as_deref(), Some("Ada"));
        assert_eq!(claims.last_name.as_deref(), Some("Lovelace"));
    }

    #[test]
    fn missing_profile_claims_are_none() {
        let token = make_token(serde_json::json!({ "exp": 100 }));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.email, None);
        assert_eq!(claims.first_name, None);
    }

    #[test]
    fn expiry_is_compared_against_now() {
        let token = make_token(serde_json::json!({ "exp": 1_000 }));
        assert!(!is_expired_at(&token, 999));
        assert!(is_expired_at(&token, 1_000));
        assert!(is_expired_at(&token, 1_001));
    }

    #[test]
    fn undecodable_tokens_count_as_expired() {
        assert!(is_expired_at("not-a-token", 0));
        assert!(is_expired_at("a.b", 0));
        assert!(is_expired_at("a.!!!.c", 0));

        let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode("plain text"));
        assert!(is_expired_at(&not_json, 0));
    }

    #[test]
    fn extra_segments_are_rejected() {
        assert!(decode_claims("a.b.c.d").is_err());
    }
}
