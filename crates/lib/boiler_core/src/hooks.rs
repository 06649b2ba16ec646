//! Unauthorized hook — lets the HTTP layer force a sign-out.
//!
//! The API client holds an [`UnauthorizedHook`] and fires it whenever a
//! request fails authorization. The callback is registered once at
//! startup, normally with [`logout_on_unauthorized`]. Nothing is retried.

use std::sync::{Arc, OnceLock};

use thiserror::Error;

use crate::session::{Navigation, SessionStore};

type Callback = Box<dyn Fn() + Send + Sync>;

/// Errors from hook registration.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("Unauthorized callback already registered")]
    AlreadyRegistered,
}

/// Single-slot callback fired on authorization failures.
#[derive(Default)]
pub struct UnauthorizedHook {
    callback: OnceLock<Callback>,
}

impl UnauthorizedHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the callback. Only the first registration is accepted.
    pub fn register<F>(&self, callback: F) -> Result<(), HookError>
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.callback
            .set(Box::new(callback))
            .map_err(|_| HookError::AlreadyRegistered)
    }

    pub fn is_registered(&self) -> bool {
        self.callback.get().is_some()
    }

    /// Invoke the callback. Returns false when nothing is registered.
    pub fn fire(&self) -> bool {
        match self.callback.get() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

/// Callback that signs the store out and hands the resulting redirect to
/// `navigate`.
pub fn logout_on_unauthorized<F>(
    store: Arc<SessionStore>,
    navigate: F,
) -> impl Fn() + Send + Sync + 'static
where
    F: Fn(Navigation) + Send + Sync + 'static,
{
    move || navigate(store.handle_unauthorized())
}
