use crate::types::user::Role;

pub(crate) trait RoleResolver: Send + Sync {
    fn resolve_role(&self, email: &str) -> Role;
}

/// Grants `admin` to exactly one address, `user` to everyone else.
#[derive(Clone, Debug)]
pub(crate) struct AdminEmail {
    email: String,
}

impl AdminEmail {
    pub(crate) fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl RoleResolver for AdminEmail {
    fn resolve_role(&self, email: &str) -> Role {
        if email == self.email {
            Role::Admin
        } else {
            Role::User
        }
    }
}
