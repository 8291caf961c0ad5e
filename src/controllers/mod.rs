pub(crate) mod catalog;
pub(crate) mod profile;
pub(crate) mod user;
