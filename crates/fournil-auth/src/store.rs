//! Process-wide session store.
//!
//! The store is created once at startup and injected through application
//! state. Each login or logout replaces the whole [`Session`] in one step and
//! wakes every subscriber.

use std::sync::Arc;

use fournil_core::UserRole;
use tokio::sync::watch;
use tracing::info;

use crate::session::{LoginData, Session, User};

#[derive(Debug, Clone)]
pub struct SessionStore {
    tx: Arc<watch::Sender<Session>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Session::anonymous());
        Self { tx: Arc::new(tx) }
    }

    /// Signs in whoever the data describes. Never fails.
    pub fn login(&self, data: LoginData) -> Session {
        let user = User::from_login(data);
        info!(email = %user.email, role = %user.role, "Session opened");

        let session = Session::signed_in(user);
        self.tx.send_replace(session.clone());
        session
    }

    pub fn logout(&self) -> Session {
        let previous = self.tx.send_replace(Session::anonymous());
        if let Some(user) = previous.user() {
            info!(email = %user.email, role = %user.role, "Session closed");
        }
        Session::anonymous()
    }

    pub fn has_role(&self, role: impl Into<UserRole>) -> bool {
        self.tx.borrow().has_role(&role.into())
    }

    pub fn current(&self) -> Session {
        self.tx.borrow().clone()
    }

    /// Receiver that observes every subsequent login and logout.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }
}
