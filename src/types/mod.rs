pub(crate) mod record;
pub(crate) mod request;
pub(crate) mod response;
pub(crate) mod user;
