//! Session state derived from the current token.

use serde::Serialize;

use super::claims::{Claims, UserInfo};

/// Who is using the dashboard right now.
///
/// Only constructible through [`Session::anonymous`] and
/// [`Session::from_claims`], so an admin session is always authenticated
/// and `user_info` is present exactly when authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    is_authenticated: bool,
    is_admin: bool,
    user_info: Option<UserInfo>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            is_admin: false,
            user_info: None,
        }
    }

    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            is_authenticated: true,
            is_admin: claims.is_admin(),
            user_info: Some(UserInfo::from(claims)),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn user_info(&self) -> Option<&UserInfo> {
        self.user_info.as_ref()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}
