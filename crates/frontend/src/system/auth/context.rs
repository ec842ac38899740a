use contracts::system::auth::{
    ChangePasswordDto, ForgotPasswordData, UpdateProfileDto, VerifyResetTokenData,
};
use contracts::system::users::User;
use leptos::prelude::*;

use super::api;
use super::storage::PersistedAuth;
use crate::shared::gateway::Gateway;
use crate::shared::toast::ToastService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Anonymous,
    Authenticating,
    Authenticated,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    fn restored(persisted: PersistedAuth) -> Self {
        Self {
            is_authenticated: persisted.is_authenticated && persisted.token.is_some(),
            user: persisted.user,
            token: persisted.token,
            is_loading: false,
            error: None,
        }
    }

    fn persisted(&self) -> PersistedAuth {
        PersistedAuth {
            user: self.user.clone(),
            token: self.token.clone(),
            is_authenticated: self.is_authenticated,
        }
    }

    fn sign_out(&mut self) {
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
    }

    pub fn status(&self) -> AuthStatus {
        if self.is_authenticated && self.token.is_some() {
            AuthStatus::Authenticated
        } else if self.is_loading {
            AuthStatus::Authenticating
        } else {
            AuthStatus::Anonymous
        }
    }

    pub fn is_super_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_super_admin()).unwrap_or(false)
    }
}

/// Session of the signed-in user. The user/token/authenticated triple is
/// mirrored to the persisted auth slice after every change.
#[derive(Clone)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
    gateway: Gateway,
    toasts: ToastService,
}

impl AuthStore {
    /// Restores the previous session from the gateway's session storage
    pub fn new(gateway: Gateway, toasts: ToastService) -> Self {
        let restored = gateway
            .session()
            .load()
            .map(AuthState::restored)
            .unwrap_or_default();
        Self {
            state: RwSignal::new(restored),
            gateway,
            toasts,
        }
    }

    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    pub fn status(&self) -> AuthStatus {
        self.state.with(|s| s.status())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.status() == AuthStatus::Authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    fn start(&self) {
        self.state.update(|s| {
            s.is_loading = true;
            s.error = None;
        });
    }

    fn fail(&self, message: String) {
        self.state.update(|s| {
            s.is_loading = false;
            s.error = Some(message.clone());
        });
        self.toasts.error(message);
    }

    /// Apply a change and write the persisted slice
    fn commit(&self, f: impl FnOnce(&mut AuthState)) {
        self.state.update(f);
        let persisted = self.state.with_untracked(|s| s.persisted());
        let session = self.gateway.session();
        if persisted.token.is_some() {
            session.save(&persisted);
        } else {
            session.clear();
        }
    }

    pub async fn login(&self, email: String, password: String) -> bool {
        self.start();
        match api::login(&self.gateway, email, password).await {
            Ok(data) => {
                log::info!("Signed in as {}", data.user.email);
                self.commit(|s| {
                    s.user = Some(data.user);
                    s.token = Some(data.token);
                    s.is_authenticated = true;
                    s.is_loading = false;
                    s.error = None;
                });
                self.toasts.success("Login berhasil!");
                true
            }
            Err(e) => {
                log::warn!("Login failed: {}", e);
                self.fail(e.message);
                false
            }
        }
    }

    /// Remote logout errors are ignored; local state is always cleared
    pub async fn logout(&self) {
        if let Err(e) = api::logout(&self.gateway).await {
            log::debug!("Remote logout failed, clearing locally anyway: {}", e);
        }
        self.commit(|s| {
            s.sign_out();
            s.error = None;
        });
        self.toasts.success("Logout berhasil");
    }

    /// Refresh the mirrored user; a rejected session signs the client out
    pub async fn fetch_user(&self) {
        if self.state.with_untracked(|s| s.token.is_none()) {
            return;
        }
        self.state.update(|s| s.is_loading = true);
        match api::get_me(&self.gateway).await {
            Ok(user) => self.commit(|s| {
                s.user = Some(user);
                s.is_loading = false;
            }),
            Err(e) => {
                log::warn!("Session check failed: {}", e);
                self.commit(|s| {
                    s.sign_out();
                    s.is_loading = false;
                });
            }
        }
    }

    pub async fn update_profile(&self, dto: UpdateProfileDto) -> bool {
        self.start();
        match api::update_profile(&self.gateway, &dto).await {
            Ok(user) => {
                self.commit(|s| {
                    s.user = Some(user);
                    s.is_loading = false;
                });
                self.toasts.success("Profil berhasil diperbarui");
                true
            }
            Err(e) => {
                self.fail(e.message);
                false
            }
        }
    }

    pub async fn change_password(&self, dto: ChangePasswordDto) -> bool {
        self.start();
        match api::change_password(&self.gateway, &dto).await {
            Ok(_) => {
                self.state.update(|s| s.is_loading = false);
                self.toasts.success("Password berhasil diubah");
                true
            }
            Err(e) => {
                self.fail(e.message);
                false
            }
        }
    }

    pub async fn forgot_password(&self, email: String) -> Option<ForgotPasswordData> {
        self.start();
        match api::forgot_password(&self.gateway, email).await {
            Ok(data) => {
                self.state.update(|s| s.is_loading = false);
                self.toasts.success("Instruksi reset password telah dikirim");
                Some(data)
            }
            Err(e) => {
                log::warn!("Forgot password failed: {}", e);
                self.state.update(|s| {
                    s.is_loading = false;
                    s.error = Some(e.message);
                });
                self.toasts.error("Gagal mengirim email reset");
                None
            }
        }
    }

    /// `None` when the token could not be checked at all; an expired token
    /// comes back as `valid: false` or as an API error, depending on the server
    pub async fn verify_reset_token(&self, token: &str) -> Option<VerifyResetTokenData> {
        match api::verify_reset_token(&self.gateway, token).await {
            Ok(data) => Some(data),
            Err(e) => {
                log::warn!("Reset token rejected: {}", e);
                self.state.update(|s| s.error = Some(e.message));
                None
            }
        }
    }

    pub async fn reset_password(&self, token: String, new_password: String) -> bool {
        self.start();
        match api::reset_password(&self.gateway, token, new_password).await {
            Ok(_) => {
                self.state.update(|s| s.is_loading = false);
                self.toasts.success("Password berhasil direset");
                true
            }
            Err(e) => {
                log::warn!("Reset password failed: {}", e);
                self.state.update(|s| {
                    s.is_loading = false;
                    s.error = Some(e.message);
                });
                self.toasts.error("Gagal mereset password");
                false
            }
        }
    }
}

/// Hook to access the auth store
pub fn use_auth() -> AuthStore {
    use_context::<AuthStore>().expect("AuthStore not found in component tree")
}
