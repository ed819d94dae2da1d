use crate::config::AppConfig;
use crate::domain::auth::{AuthResponse, LoginRequest};
use crate::services::api::{ApiClient, ApiError};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Who is signed in. Passed explicitly to whatever needs identity instead of
/// living in ambient global flags.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthContext {
    pub user_id: i64,
    pub name: String,
}

impl From<AuthResponse> for AuthContext {
    fn from(resp: AuthResponse) -> Self {
        Self {
            user_id: resp.user_id,
            name: resp.name,
        }
    }
}

/// Top-level application state owned by the shell.
pub struct AppState {
    pub api: ApiClient,
    auth: RwLock<Option<AuthContext>>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: &AppConfig) -> anyhow::Result<SharedState> {
        Ok(Arc::new(Self {
            api: ApiClient::new(config)?,
            auth: RwLock::new(None),
        }))
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthContext, ApiError> {
        let resp = self.api.login(request).await?;
        let ctx = AuthContext::from(resp);
        tracing::info!(user_id = ctx.user_id, "user logged in");
        *self.auth.write().await = Some(ctx.clone());
        Ok(ctx)
    }

    pub async fn logout(&self) {
        let mut auth = self.auth.write().await;
        if let Some(ctx) = auth.take() {
            tracing::info!(user_id = ctx.user_id, "user logged out");
        }
    }

    pub async fn current_user(&self) -> Option<AuthContext> {
        self.auth.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.auth.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_signed_out() {
        let state = AppState::new(&AppConfig::default()).unwrap();
        assert!(!state.is_authenticated().await);
        assert_eq!(state.current_user().await, None);
    }

    #[tokio::test]
    async fn logout_clears_the_context() {
        let state = AppState::new(&AppConfig::default()).unwrap();
        *state.auth.write().await = Some(AuthContext {
            user_id: 7,
            name: "Sarah".to_string(),
        });
        assert!(state.is_authenticated().await);

        state.logout().await;
        assert!(!state.is_authenticated().await);
        assert_eq!(state.current_user().await, None);
    }

    #[tokio::test]
    async fn context_is_shared_across_clones() {
        let state = AppState::new(&AppConfig::default()).unwrap();
        let other = state.clone();
        *state.auth.write().await = Some(AuthContext {
            user_id: 1,
            name: "Sam".to_string(),
        });
        assert_eq!(other.current_user().await.unwrap().user_id, 1);
    }
}
