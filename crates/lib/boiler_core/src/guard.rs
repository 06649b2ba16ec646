//! Route guard — decides what a navigation should do for the current session.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::models::Session;
use crate::session::Navigation;

/// Minimum session state a route requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Public,
    Authenticated,
    /// Authenticated and admin.
    Admin,
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Allow,
    /// Hard denial: no usable session.
    RedirectToLogin,
    /// Soft denial: signed in, but not allowed here.
    RedirectToDefault,
}

impl Decision {
    /// Navigation intent for a redirect, `None` for [`Decision::Allow`].
    pub fn redirect(self) -> Option<Navigation> {
        match self {
            Decision::Allow => None,
            Decision::RedirectToLogin => Some(Navigation::Login),
            Decision::RedirectToDefault => Some(Navigation::DefaultRoute),
        }
    }
}

/// Decide a navigation to a route declaring `access`.
pub fn evaluate(session: &Session, access: Access) -> Decision {
    match access {
        Access::Public => Decision::Allow,
        Access::Authenticated if session.is_authenticated() => Decision::Allow,
        Access::Authenticated => Decision::RedirectToLogin,
        Access::Admin if !session.is_authenticated() => Decision::RedirectToLogin,
        Access::Admin if !session.is_admin() => Decision::RedirectToDefault,
        Access::Admin => Decision::Allow,
    }
}

#[derive(Debug, Error)]
#[error("Unknown access requirement: {0}")]
pub struct ParseAccessError(String);

impl FromStr for Access {
    type Err = ParseAccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(Access::Public),
            "authenticated" | "auth" => Ok(Access::Authenticated),
            "admin" | "authenticated+admin" => Ok(Access::Admin),
            _ => Err(ParseAccessError(s.to_string())),
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Access::Public => "public",
            Access::Authenticated => "authenticated",
            Access::Admin => "admin",
        })
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Decision::Allow => "allow",
            Decision::RedirectToLogin => "redirect-to-login",
            Decision::RedirectToDefault => "redirect-to-default",
        })
    }
}
