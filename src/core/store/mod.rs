//! Data access behind a trait so handlers can run against Postgres in
//! production and an in-memory store in tests.

#[cfg(test)]
pub(crate) mod memory;
pub(crate) mod postgres;

use async_trait::async_trait;

use crate::core::error::Error;
use crate::types::record::{NewProfile, ProfileRecord, TrailMovie, TrailOfferRecord};
use crate::types::response::{Avatar, Banner};
use crate::types::user::{UserId, UserRecord};

#[async_trait]
pub(crate) trait Store: Send + Sync + std::fmt::Debug {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, Error>;

    async fn list_avatars(&self) -> Result<Vec<Avatar>, Error>;

    async fn find_avatar(&self, id: i32) -> Result<Option<Avatar>, Error>;

    async fn find_avatars(&self, ids: &[i32]) -> Result<Vec<Avatar>, Error>;

    async fn list_profiles(&self, user_id: UserId) -> Result<Vec<ProfileRecord>, Error>;

    async fn find_profile(&self, id: i32) -> Result<Option<ProfileRecord>, Error>;

    async fn insert_profile(&self, profile: NewProfile) -> Result<ProfileRecord, Error>;

    /// Updates profile `id` only if it belongs to `profile.user_id`.
    async fn update_profile(
        &self,
        id: i32,
        profile: NewProfile,
    ) -> Result<Option<ProfileRecord>, Error>;

    /// Returns the number of rows removed.
    async fn delete_profile(&self, id: i32, user_id: UserId) -> Result<u64, Error>;

    async fn list_banners(&self) -> Result<Vec<Banner>, Error>;

    async fn list_trail_offers(&self) -> Result<Vec<TrailOfferRecord>, Error>;

    async fn find_trail_offer(&self, id: i32) -> Result<Option<TrailOfferRecord>, Error>;

    async fn list_trail_movies(&self, trail_offer_ids: &[i32]) -> Result<Vec<TrailMovie>, Error>;
}
