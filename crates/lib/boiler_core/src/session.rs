//! Session store — the single owner of session state and the token slot.
//!
//! Mutators never drive a router. They return a [`Navigation`] intent that
//! the UI adapter resolves against its [`RouterConfig`].

use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::auth::{self, DecodeError};
use crate::config::RouterConfig;
use crate::models::Session;
use crate::routes::navigate;
use crate::storage::{StorageError, TOKEN_KEY, TokenStorage};

/// Logical redirect destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Navigation {
    Login,
    DefaultRoute,
}

impl Navigation {
    /// Concrete path for this destination.
    pub fn path(self, config: &RouterConfig) -> &str {
        match self {
            Navigation::Login => &config.login_route,
            Navigation::DefaultRoute => &config.default_route,
        }
    }
}

/// Session errors surfaced to callers. Only `login` returns them.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid token: {0}")]
    Decode(#[from] DecodeError),

    #[error("Token storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Holds the current [`Session`] and keeps it in sync with token storage.
///
/// State is replaced as a whole, so readers of [`SessionStore::snapshot`]
/// never see flags and profile from different tokens.
pub struct SessionStore {
    storage: Arc<dyn TokenStorage>,
    state: RwLock<Arc<Session>>,
}

impl SessionStore {
    /// Create a store in the anonymous state. Storage is not read until
    /// [`SessionStore::initialize`].
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            storage,
            state: RwLock::new(Arc::new(Session::anonymous())),
        }
    }

    /// Current committed session.
    pub fn snapshot(&self) -> Arc<Session> {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    fn commit(&self, session: Session) -> Arc<Session> {
        let session = Arc::new(session);
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&session);
        session
    }

    /// Rebuild the session from the persisted token.
    ///
    /// A missing token, an undecodable token and unreadable storage all
    /// yield the anonymous session.
    pub fn initialize(&self) -> Arc<Session> {
        let token = match self.storage.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "token storage unreadable, starting anonymous");
                None
            }
        };

        let session = match token.as_deref().map(auth::decode) {
            Some(Ok(claims)) => Session::from_claims(&claims),
            Some(Err(e)) => {
                debug!(error = %e, "persisted token does not decode, starting anonymous");
                Session::anonymous()
            }
            None => Session::anonymous(),
        };
        self.commit(session)
    }

    /// Initialize, then decide the page the app was opened on. Returns the
    /// redirect to perform, if any.
    pub fn initialize_at(&self, current_path: &str) -> Option<Navigation> {
        navigate(&self.initialize(), current_path).redirect()
    }

    /// Persist `access_token` and switch to its session.
    ///
    /// The token is decoded before anything is written; on error neither
    /// storage nor state change. `refresh_token` is accepted but not kept.
    pub fn login(
        &self,
        access_token: &str,
        _refresh_token: Option<&str>,
    ) -> Result<Navigation, SessionError> {
        let claims = auth::decode(access_token)?;
        self.storage.set(TOKEN_KEY, access_token)?;
        let session = self.commit(Session::from_claims(&claims));
        info!(
            user_id = claims.id.as_deref().unwrap_or("<none>"),
            admin = session.is_admin(),
            "signed in"
        );
        Ok(Navigation::DefaultRoute)
    }

    /// Clear the persisted token and return to the anonymous session.
    pub fn logout(&self) -> Navigation {
        if let Err(e) = self.storage.remove(TOKEN_KEY) {
            warn!(error = %e, "failed to clear persisted token");
        }
        self.commit(Session::anonymous());
        info!("signed out");
        Navigation::Login
    }

    /// Called when the API layer reports that the token was rejected.
    pub fn handle_unauthorized(&self) -> Navigation {
        warn!("API rejected the session token, signing out");
        self.logout()
    }
}
