use std::sync::Arc;

use tracing::instrument;

use crate::core::error::Error;
use crate::core::store::Store;
use crate::types::record::{NewProfile, ProfileRecord};
use crate::types::request::ProfileData;
use crate::types::response::{Avatar, Profile};
use crate::types::user::{Claim, UserId};
use crate::utils::validate::{Issue, ValidationError};

pub(crate) const PROFILE_NOT_FOUND: &str = "Profile not found";

#[derive(Clone, Debug)]
pub(crate) struct ProfileController {
    store: Arc<dyn Store>,
}

impl ProfileController {
    pub(crate) fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub(crate) async fn list(&self, user_id: UserId) -> Result<Vec<Profile>, Error> {
        let profiles = self.store.list_profiles(user_id).await?;

        let mut avatar_ids: Vec<i32> = profiles.iter().map(|p| p.avatar_id).collect();
        avatar_ids.sort_unstable();
        avatar_ids.dedup();

        let avatars = if avatar_ids.is_empty() {
            Vec::new()
        } else {
            self.store.find_avatars(&avatar_ids).await?
        };

        Ok(profiles
            .into_iter()
            .map(|profile| {
                let avatar = avatars.iter().find(|a| a.id == profile.avatar_id).cloned();
                embed(profile, avatar)
            })
            .collect())
    }

    /// Any authenticated caller may read any profile by id.
    #[instrument(skip(self))]
    pub(crate) async fn get(&self, id: i32) -> Result<Profile, Error> {
        let profile = self
            .store
            .find_profile(id)
            .await?
            .ok_or_else(|| Error::not_found(PROFILE_NOT_FOUND))?;

        let avatar = self.store.find_avatar(profile.avatar_id).await?;

        Ok(embed(profile, avatar))
    }

    #[instrument(skip(self, user), fields(user = user.id))]
    pub(crate) async fn create(&self, user: &Claim, data: ProfileData) -> Result<Profile, Error> {
        let avatar = self.existing_avatar(data.avatar_id).await?;

        let profile = self
            .store
            .insert_profile(new_profile(user.id, data))
            .await?;

        Ok(embed(profile, Some(avatar)))
    }

    #[instrument(skip(self, user), fields(user = user.id))]
    pub(crate) async fn update(
        &self,
        user: &Claim,
        id: i32,
        data: ProfileData,
    ) -> Result<Profile, Error> {
        let avatar = self.existing_avatar(data.avatar_id).await?;

        let profile = self
            .store
            .update_profile(id, new_profile(user.id, data))
            .await?
            .ok_or_else(|| Error::not_found(PROFILE_NOT_FOUND))?;

        Ok(embed(profile, Some(avatar)))
    }

    #[instrument(skip(self, user), fields(user = user.id))]
    pub(crate) async fn delete(&self, user: &Claim, id: i32) -> Result<(), Error> {
        match self.store.delete_profile(id, user.id).await? {
            0 => Err(Error::not_found(PROFILE_NOT_FOUND)),
            _ => Ok(()),
        }
    }

    async fn existing_avatar(&self, avatar_id: i32) -> Result<Avatar, Error> {
        self.store.find_avatar(avatar_id).await?.ok_or_else(|| {
            Error::from(ValidationError::single(Issue::new(
                "invalid_reference",
                &["body", "avatarId"],
                format!("Avatar {avatar_id} does not exist"),
            )))
        })
    }
}

fn new_profile(user_id: UserId, data: ProfileData) -> NewProfile {
    NewProfile {
        user_id,
        avatar_id: data.avatar_id,
        name: data.name,
        color: data.color,
    }
}

fn embed(profile: ProfileRecord, avatar: Option<Avatar>) -> Profile {
    Profile {
        id: profile.id,
        name: profile.name,
        color: profile.color,
        avatar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::memory::MemoryStore;
    use crate::types::user::Role;

    fn user(id: UserId) -> Claim {
        Claim {
            id,
            name: "Test".into(),
            email: "test@adamax.com".into(),
            role: Role::User,
        }
    }

    fn data(avatar_id: i32, name: &str) -> ProfileData {
        ProfileData {
            avatar_id,
            name: name.into(),
            color: "4".into(),
        }
    }

    fn setup() -> (Arc<MemoryStore>, ProfileController) {
        let store = Arc::new(MemoryStore::fixture());
        let controller = ProfileController::new(store.clone());

        (store, controller)
    }

    #[tokio::test]
    async fn list_embeds_avatars_for_owner_only() {
        let (_, controller) = setup();

        let profiles = controller.list(1).await.unwrap();

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, "Ada");
        assert_eq!(profiles[0].avatar.as_ref().unwrap().name, "Mickey");
    }

    #[tokio::test]
    async fn list_is_empty_without_profiles() {
        let (_, controller) = setup();

        assert!(controller.list(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_does_not_check_ownership() {
        let (_, controller) = setup();

        let profile = controller.get(2).await.unwrap();

        assert_eq!(profile.name, "Maria");
        assert_eq!(profile.avatar.unwrap().name, "Luke");
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let (_, controller) = setup();

        assert!(matches!(controller.get(42).await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn create_assigns_caller_as_owner() {
        let (store, controller) = setup();

        let created = controller.create(&user(1), data(4, "Kids")).await.unwrap();

        assert_eq!(created.avatar.unwrap().name, "Groot");
        let stored = store.profiles().await;
        let record = stored.iter().find(|p| p.id == created.id).unwrap();
        assert_eq!(record.user_id, 1);
        assert_eq!(record.color, "4");
    }

    #[tokio::test]
    async fn create_with_unknown_avatar_is_a_validation_error() {
        let (store, controller) = setup();

        let err = controller.create(&user(1), data(77, "Kids")).await.unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(store.profiles().await.len(), 2);
    }

    #[tokio::test]
    async fn update_of_foreign_profile_is_not_found_and_unmodified() {
        let (store, controller) = setup();
        let before = store.profiles().await;

        let err = controller
            .update(&user(1), 2, data(3, "Hijacked"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NotFound(ref m) if m == PROFILE_NOT_FOUND));
        assert_eq!(store.profiles().await, before);
    }

    #[tokio::test]
    async fn update_own_profile() {
        let (_, controller) = setup();

        let updated = controller.update(&user(1), 1, data(3, "Ada 2")).await.unwrap();

        assert_eq!(updated.name, "Ada 2");
        assert_eq!(updated.avatar.unwrap().name, "Minnie");
    }

    #[tokio::test]
    async fn delete_requires_ownership() {
        let (store, controller) = setup();

        assert!(matches!(
            controller.delete(&user(1), 2).await,
            Err(Error::NotFound(_))
        ));
        assert!(controller.delete(&user(2), 2).await.is_ok());
        assert_eq!(store.profiles().await.len(), 1);
    }
}
