use crate::types::response::Movie;
use crate::types::user::UserId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ProfileRecord {
    pub(crate) id: i32,
    pub(crate) user_id: UserId,
    pub(crate) avatar_id: i32,
    pub(crate) name: String,
    pub(crate) color: String,
}

#[derive(Clone, Debug)]
pub(crate) struct NewProfile {
    pub(crate) user_id: UserId,
    pub(crate) avatar_id: i32,
    pub(crate) name: String,
    pub(crate) color: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TrailOfferRecord {
    pub(crate) id: i32,
    pub(crate) title: String,
}

/// A movie row joined to the trail offer listing it.
#[derive(Clone, Debug)]
pub(crate) struct TrailMovie {
    pub(crate) trail_offer_id: i32,
    pub(crate) movie: Movie,
}
