//! Token decoding and the claim helpers built on it.

pub mod token;

use tracing::debug;

pub use token::{DecodeError, decode, decode_value, encode_unsigned};

use crate::models::UserInfo;

/// Whether `token` decodes to claims with `admin: true`.
///
/// Undecodable tokens are not admin.
pub fn is_admin_token(token: &str) -> bool {
    match decode(token) {
        Ok(claims) => claims.is_admin(),
        Err(e) => {
            debug!(error = %e, "treating undecodable token as non-admin");
            false
        }
    }
}

/// User profile carried by `token`, or `None` if it does not decode.
pub fn user_info(token: &str) -> Option<UserInfo> {
    decode(token).ok().map(|claims| UserInfo::from(&claims))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn is_admin_token_follows_claim() {
        assert!(is_admin_token(&encode_unsigned(&json!({ "admin": true }))));
        assert!(!is_admin_token(&encode_unsigned(&json!({ "admin": false }))));
        assert!(!is_admin_token(&encode_unsigned(&json!({ "id": "u1" }))));
        assert!(!is_admin_token("not-a-token"));
    }

    #[test]
    fn user_info_is_none_for_garbage() {
        assert!(user_info("a.b").is_none());
        let info = user_info(&encode_unsigned(&json!({ "id": "u1" }))).unwrap();
        assert_eq!(info.id.as_deref(), Some("u1"));
        assert!(!info.admin);
    }
}
