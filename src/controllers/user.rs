use std::sync::Arc;

use chrono::Duration;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::store::Store;
use crate::types::user::Claim;
use crate::utils::role::RoleResolver;
use crate::utils::token::TokenCodec;

pub(crate) const INVALID_CREDENTIALS: &str = "Email ou senha inválidos";

/// Checked against on unknown emails so a miss costs the same bcrypt work as
/// a wrong password. Same cost as the seeded users.
const UNKNOWN_USER_HASH: &str = "$2b$10$YGZQsArRiqa9pawLzPyh1OCGpLuyKwrosfDLJDLlWFadAP8AS4BVy";

#[derive(Clone)]
pub(crate) struct UserController {
    store: Arc<dyn Store>,
    codec: TokenCodec,
    roles: Arc<dyn RoleResolver>,
    ttl: Duration,
}

impl std::fmt::Debug for UserController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserController")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl UserController {
    pub(crate) fn new(
        store: Arc<dyn Store>,
        codec: TokenCodec,
        roles: Arc<dyn RoleResolver>,
        ttl: Duration,
    ) -> Self {
        Self {
            store,
            codec,
            roles,
            ttl,
        }
    }

    /// Checks the credentials and issues a token for the matching user.
    #[instrument(skip(self, password))]
    pub(crate) async fn sign_in(&self, email: &str, password: &str) -> Result<String, Error> {
        let Some(user) = self.store.find_user_by_email(email).await? else {
            bcrypt::verify(password, UNKNOWN_USER_HASH)?;
            return Err(Error::auth(INVALID_CREDENTIALS));
        };

        if !bcrypt::verify(password, &user.password_hash)? {
            return Err(Error::auth(INVALID_CREDENTIALS));
        }

        let claim = Claim {
            id: user.id,
            role: self.roles.resolve_role(&user.email),
            name: user.name,
            email: user.email,
        };

        tracing::info!(user = claim.id, role = ?claim.role, "signed in");

        self.codec.issue(&claim, self.ttl)
    }
}
