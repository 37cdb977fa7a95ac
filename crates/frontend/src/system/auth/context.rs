//! Session of the signed-in user.
//!
//! The session is restored from localStorage at startup and written back on
//! every change, so a reload keeps the user signed in.

use contracts::system::auth::UserInfo;
use contracts::system::permissions::Role;
use leptos::prelude::*;

use super::{api, storage};
use contracts::shared::api::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub user: UserInfo,
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<Session>>,
}

impl AuthContext {
    /// Context with whatever session localStorage holds.
    pub fn restore() -> Self {
        let session = match (storage::get_access_token(), storage::get_user()) {
            (Some(access_token), Some(user)) => {
                log::debug!("restored session of {}", user.username);
                Some(Session { access_token, user })
            }
            _ => None,
        };
        Self {
            session: RwSignal::new(session),
        }
    }

    pub fn get_user(&self) -> Option<UserInfo> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    pub fn role(&self) -> Option<Role> {
        self.session.with(|s| s.as_ref().map(|s| s.user.role.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    /// Replaces the session and persists it; `None` signs out.
    pub fn set_user(&self, session: Option<Session>) {
        match &session {
            Some(s) => {
                storage::save_access_token(&s.access_token);
                storage::save_user(&s.user);
            }
            None => storage::clear_session(),
        }
        self.session.set(session);
    }

    pub fn logout(&self) {
        self.set_user(None);
    }
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found in context")
}

/// Helper: Perform login
pub async fn do_login(auth: AuthContext, username: String, password: String) -> Result<(), ApiError> {
    let payload = api::login(username, password).await?;
    log::info!("signed in as {}", payload.user.username);
    auth.set_user(Some(Session {
        access_token: payload.access_token,
        user: payload.user,
    }));
    Ok(())
}
