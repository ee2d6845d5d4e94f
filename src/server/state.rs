/**
 * Application State
 *
 * The central state container handed to the router. It holds the store
 * ports (injected, so tests can swap in in-memory implementations), the
 * account service, the token keys, and the avatar upload directory.
 *
 * The `FromRef` implementations let handlers extract just the part of
 * the state they use instead of the whole `AppState`.
 */

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::service::AccountService;
use crate::auth::tokens::TokenKeys;
use crate::microposts::store::MicropostStore;
use crate::users::store::UserStore;

#[derive(Clone)]
pub struct AppState {
    /// User persistence port
    pub users: Arc<dyn UserStore>,
    /// Micropost persistence port
    pub microposts: Arc<dyn MicropostStore>,
    /// Signup/login orchestration over `users`
    pub accounts: AccountService,
    /// Token signing/verification keys, immutable after startup
    pub tokens: TokenKeys,
    /// Directory avatar uploads are written to
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        microposts: Arc<dyn MicropostStore>,
        tokens: TokenKeys,
        upload_dir: PathBuf,
    ) -> Self {
        let accounts = AccountService::new(users.clone(), tokens.clone());
        Self {
            users,
            microposts,
            accounts,
            tokens,
            upload_dir,
        }
    }
}

impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}

impl FromRef<AppState> for Arc<dyn MicropostStore> {
    fn from_ref(state: &AppState) -> Self {
        state.microposts.clone()
    }
}

impl FromRef<AppState> for AccountService {
    fn from_ref(state: &AppState) -> Self {
        state.accounts.clone()
    }
}

impl FromRef<AppState> for TokenKeys {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
