//! Mock authentication and the explicit session context.
//!
//! The session context is an explicit object passed to the views that need
//! it, with three states and no automatic default user: a fresh context is
//! always `Unauthenticated`, which keeps tests deterministic.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use examdeck_core::error::AuthError;
use examdeck_core::model::User;
use examdeck_core::traits::AuthProvider;

/// Authentication state of a session context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticating,
    Authenticated(User),
}

/// Explicit session context wrapping an auth provider.
pub struct SessionContext {
    provider: Arc<dyn AuthProvider>,
    state: AuthState,
}

impl SessionContext {
    /// Create a context in the `Unauthenticated` state. There is no
    /// default logged-in user.
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self {
            provider,
            state: AuthState::Unauthenticated,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// The "is a user present" signal gating user-facing actions.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated(_))
    }

    pub fn current_user(&self) -> Option<&User> {
        match &self.state {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Authenticate with email and password.
    ///
    /// Moves through `Authenticating`; a rejected login returns the context
    /// to `Unauthenticated` before propagating the error.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        self.state = AuthState::Authenticating;
        match self.provider.login(email, password).await {
            Ok(user) => {
                self.state = AuthState::Authenticated(user);
                Ok(self.current_user().expect("just authenticated"))
            }
            Err(e) => {
                self.state = AuthState::Unauthenticated;
                Err(e)
            }
        }
    }

    /// Register a new account and sign it in.
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<&User, AuthError> {
        self.state = AuthState::Authenticating;
        match self.provider.register(name, email, password).await {
            Ok(user) => {
                self.state = AuthState::Authenticated(user);
                Ok(self.current_user().expect("just authenticated"))
            }
            Err(e) => {
                self.state = AuthState::Unauthenticated;
                Err(e)
            }
        }
    }

    /// Drop the current user, returning to `Unauthenticated`.
    pub fn logout(&mut self) {
        self.state = AuthState::Unauthenticated;
    }
}

/// Mock auth backend: accepts any non-empty credentials after a fixed
/// simulated delay. No credential verification or session persistence.
pub struct MockAuth {
    latency: Duration,
}

impl MockAuth {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// A mock with no simulated delay, for tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    fn avatar_for(email: &str) -> String {
        format!("https://api.dicebear.com/7.x/avataaars/svg?seed={email}")
    }
}

#[async_trait]
impl AuthProvider for MockAuth {
    fn name(&self) -> &str {
        "mock"
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials(
                "email and password are required".into(),
            ));
        }

        tokio::time::sleep(self.latency).await;

        Ok(User {
            id: "demo".into(),
            name: "Demo User".into(),
            email: email.to_string(),
            avatar_url: Some(Self::avatar_for(email)),
        })
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials(
                "name, email, and password are required".into(),
            ));
        }

        tokio::time::sleep(self.latency).await;

        Ok(User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar_url: Some(Self::avatar_for(email)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> SessionContext {
        SessionContext::new(Arc::new(MockAuth::instant()))
    }

    #[test]
    fn starts_unauthenticated() {
        let ctx = context();
        assert_eq!(*ctx.state(), AuthState::Unauthenticated);
        assert!(!ctx.is_authenticated());
        assert!(ctx.current_user().is_none());
    }

    #[tokio::test]
    async fn login_transitions_to_authenticated() {
        let mut ctx = context();
        let user = ctx.login("ana@example.com", "hunter2").await.unwrap();
        assert_eq!(user.email, "ana@example.com");
        assert!(user
            .avatar_url
            .as_deref()
            .unwrap()
            .contains("seed=ana@example.com"));
        assert!(ctx.is_authenticated());
    }

    #[tokio::test]
    async fn rejected_login_returns_to_unauthenticated() {
        let mut ctx = context();
        let err = ctx.login("", "").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials(_)));
        assert_eq!(*ctx.state(), AuthState::Unauthenticated);
    }

    #[tokio::test]
    async fn register_signs_in() {
        let mut ctx = context();
        ctx.register("Ana", "ana@example.com", "hunter2")
            .await
            .unwrap();
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.current_user().unwrap().name, "Ana");
    }

    #[tokio::test]
    async fn logout_drops_user() {
        let mut ctx = context();
        ctx.login("ana@example.com", "hunter2").await.unwrap();
        ctx.logout();
        assert_eq!(*ctx.state(), AuthState::Unauthenticated);
    }
}
