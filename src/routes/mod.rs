pub(crate) mod auth;
pub(crate) mod avatars;
pub(crate) mod catalog;
pub(crate) mod profiles;
pub(crate) mod router;
