use std::sync::Arc;

use chrono::Duration;

use crate::controllers::catalog::CatalogController;
use crate::controllers::profile::ProfileController;
use crate::controllers::user::UserController;
use crate::core::store::Store;
use crate::utils::role::RoleResolver;
use crate::utils::token::TokenCodec;

#[derive(Clone, Debug)]
pub(crate) struct AppState {
    pub(crate) codec: TokenCodec,
    pub(crate) user_controller: UserController,
    pub(crate) profile_controller: ProfileController,
    pub(crate) catalog_controller: CatalogController,
}

impl AppState {
    pub(crate) fn new(
        store: Arc<dyn Store>,
        codec: TokenCodec,
        roles: Arc<dyn RoleResolver>,
        token_ttl: Duration,
    ) -> Self {
        AppState {
            user_controller: UserController::new(store.clone(), codec.clone(), roles, token_ttl),
            profile_controller: ProfileController::new(store.clone()),
            catalog_controller: CatalogController::new(store),
            codec,
        }
    }
}
