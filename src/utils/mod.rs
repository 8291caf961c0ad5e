pub(crate) mod auth;
pub(crate) mod role;
pub(crate) mod token;
pub(crate) mod validate;
