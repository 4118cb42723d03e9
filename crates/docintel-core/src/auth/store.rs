//! Session store for the mock sign-in flow.

use super::model::{AuthState, AuthView, User, UserRole};
use crate::config::LatencySettings;
use crate::error::Result;
use crate::latency;
use crate::loading::LoadingTracker;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

const DEMO_USER_NAME: &str = "Demo User";

/// Holds the current user session.
///
/// Credentials are accepted as-is: every login or signup succeeds after the
/// simulated round-trip. `logout` is synchronous.
#[derive(Debug)]
pub struct AuthStore {
    state: RwLock<AuthState>,
    latency: LatencySettings,
    loading: LoadingTracker,
}

impl AuthStore {
    /// Creates a store in the `Loading` state; call [`AuthStore::initialize`]
    /// to finish the initial session check.
    pub fn new(latency: LatencySettings) -> Self {
        Self {
            state: RwLock::new(AuthState::Loading),
            latency,
            loading: LoadingTracker::new(),
        }
    }

    /// Runs the initial session check. No stored session exists, so the
    /// store settles on `Unauthenticated` unless a login already landed.
    pub async fn initialize(&self) {
        latency::simulate("auth.check", self.latency.auth_check()).await;

        let mut state = self.write_state();
        if *state == AuthState::Loading {
            *state = AuthState::Unauthenticated;
            tracing::debug!("Auth check complete, no active session");
        }
    }

    /// Signs in as the demo admin user. The password is not validated.
    pub async fn login(&self, email: &str, _password: &str) -> Result<User> {
        let _loading = self.loading.begin();
        latency::simulate("auth.login", self.latency.auth()).await;

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: DEMO_USER_NAME.to_string(),
            role: UserRole::Admin,
            avatar: None,
        };
        self.authenticate(user.clone());
        tracing::info!(user_id = %user.id, email, "User logged in");
        Ok(user)
    }

    /// Registers and signs in a regular user. The password is not stored.
    pub async fn signup(&self, email: &str, _password: &str, name: &str) -> Result<User> {
        let _loading = self.loading.begin();
        latency::simulate("auth.signup", self.latency.auth()).await;

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role: UserRole::User,
            avatar: None,
        };
        self.authenticate(user.clone());
        tracing::info!(user_id = %user.id, email, "User signed up");
        Ok(user)
    }

    pub fn logout(&self) {
        let mut state = self.write_state();
        if let Some(user) = state.user() {
            tracing::info!(user_id = %user.id, "User logged out");
        }
        *state = AuthState::Unauthenticated;
    }

    pub fn state(&self) -> AuthState {
        self.read_state().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.read_state().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_state().user().is_some()
    }

    pub fn is_loading(&self) -> bool {
        *self.read_state() == AuthState::Loading || self.loading.is_loading()
    }

    pub fn view(&self) -> AuthView {
        let user = self.current_user();
        AuthView {
            is_authenticated: user.is_some(),
            is_loading: self.is_loading(),
            user,
        }
    }

    fn authenticate(&self, user: User) {
        *self.write_state() = AuthState::Authenticated(user);
    }

    fn read_state(&self) -> RwLockReadGuard<'_, AuthState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, AuthState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
