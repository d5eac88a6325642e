//! Authentication store.
//!
//! Runs login/register/logout/profile against the service and drives
//! the auth state machine. Validation failures are reported without
//! issuing any request; all failures terminate in the state's error
//! field rather than propagating to the caller.

use std::sync::Arc;

use chat_state::{AuthEvent, AuthMachine, AuthState};
use soliris_client::api::models::AuthResponse;
use soliris_client::{SolirisApi, TokenStore};
use tokio::sync::RwLock;

pub use soliris_client::api::models::RegisterRequest as RegisterForm;

pub const MSG_FILL_ALL_FIELDS: &str = "Por favor, preencha todos os campos";
pub const MSG_FILL_REQUIRED_FIELDS: &str = "Por favor, preencha todos os campos obrigatórios";
pub const MSG_PASSWORDS_DO_NOT_MATCH: &str = "As senhas não coincidem";
pub const MSG_PASSWORD_TOO_SHORT: &str = "A senha deve ter pelo menos 8 caracteres";

const MIN_PASSWORD_CHARS: usize = 8;

pub struct AuthStore<C: SolirisApi, T: TokenStore> {
    client: Arc<C>,
    tokens: Arc<T>,
    machine: Arc<RwLock<AuthMachine>>,
}

impl<C: SolirisApi, T: TokenStore> AuthStore<C, T> {
    /// Create a store bootstrapped from the token store: a persisted
    /// credential restores the authenticated phase with an empty user
    /// record.
    pub fn new(client: Arc<C>, tokens: Arc<T>) -> Self {
        let machine = AuthMachine::bootstrap(tokens.access_token().is_some());
        Self {
            client,
            tokens,
            machine: Arc::new(RwLock::new(machine)),
        }
    }

    /// Snapshot of the current auth state.
    pub async fn snapshot(&self) -> AuthState {
        self.machine.read().await.state().clone()
    }

    pub async fn clear_error(&self) {
        self.apply(AuthEvent::ErrorCleared).await;
    }

    /// Attempt a login. Empty fields fail immediately without a
    /// request.
    pub async fn login(&self, username: &str, password: &str) {
        if username.is_empty() || password.is_empty() {
            self.fail(MSG_FILL_ALL_FIELDS).await;
            return;
        }

        self.apply(AuthEvent::LoginStarted).await;
        match self.client.login(username, password).await {
            Ok(response) => self.finish_login(response).await,
            Err(err) => self.fail(&err.to_string()).await,
        }
    }

    /// Attempt a registration. The field checks mirror the service's
    /// own rules so obvious mistakes never leave the client.
    pub async fn register(&self, form: &RegisterForm) {
        if form.username.is_empty()
            || form.email.is_empty()
            || form.password.is_empty()
            || form.password_confirm.is_empty()
        {
            self.fail(MSG_FILL_REQUIRED_FIELDS).await;
            return;
        }
        if form.password != form.password_confirm {
            self.fail(MSG_PASSWORDS_DO_NOT_MATCH).await;
            return;
        }
        if form.password.chars().count() < MIN_PASSWORD_CHARS {
            self.fail(MSG_PASSWORD_TOO_SHORT).await;
            return;
        }

        self.apply(AuthEvent::LoginStarted).await;
        match self.client.register(form).await {
            Ok(response) => self.finish_login(response).await,
            Err(err) => self.fail(&err.to_string()).await,
        }
    }

    /// Sign out. The service call is best-effort; the local credential
    /// pair is cleared and the state reset no matter what it returns.
    pub async fn logout(&self) {
        if let Some(refresh) = self.tokens.refresh_token() {
            if let Err(err) = self.client.logout(&refresh).await {
                tracing::warn!(error = %err, "logout request failed, clearing local state anyway");
            }
        }
        if let Err(err) = self.tokens.clear() {
            tracing::warn!(error = %err, "failed to clear persisted credentials");
        }
        self.apply(AuthEvent::LoggedOut).await;
    }

    /// Repopulate the user record after a token-only bootstrap.
    pub async fn fetch_profile(&self) {
        match self.client.profile().await {
            Ok(user) => {
                self.apply(AuthEvent::ProfileLoaded { user }).await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "profile fetch failed");
            }
        }
    }

    async fn finish_login(&self, response: AuthResponse) {
        if let Err(err) = self
            .tokens
            .set_tokens(&response.tokens.access, &response.tokens.refresh)
        {
            tracing::warn!(error = %err, "failed to persist credentials");
        }
        self.apply(AuthEvent::LoginSucceeded {
            user: response.user,
        })
        .await;
    }

    async fn fail(&self, error: &str) {
        self.apply(AuthEvent::LoginFailed {
            error: error.to_string(),
        })
        .await;
    }

    async fn apply(&self, event: AuthEvent) {
        self.machine.write().await.handle_event(event);
    }
}
