use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::Error;
use crate::core::store::Store;
use crate::types::record::{NewProfile, ProfileRecord, TrailMovie, TrailOfferRecord};
use crate::types::response::{Avatar, Banner, Movie};
use crate::types::user::{UserId, UserRecord};

#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    pub(crate) users: Vec<UserRecord>,
    pub(crate) avatars: Vec<Avatar>,
    pub(crate) banners: Vec<Banner>,
    pub(crate) trail_offers: Vec<TrailOfferRecord>,
    pub(crate) trail_movies: Vec<TrailMovie>,
    profiles: RwLock<Vec<ProfileRecord>>,
}

impl MemoryStore {
    /// Two users (the first is the admin address), four avatars in three
    /// categories, one profile each, and a small catalog.
    pub(crate) fn fixture() -> Self {
        let user = |id, name: &str, email: &str, password: &str| UserRecord {
            id,
            name: name.into(),
            email: email.into(),
            password_hash: bcrypt::hash(password, 4).unwrap(),
        };
        let avatar = |id, name: &str, category: &str| Avatar {
            id,
            name: name.into(),
            image: format!("/avatars/{id}.png"),
            category: category.into(),
        };
        let movie = |id, title: &str, year| Movie {
            id,
            title: title.into(),
            description: format!("{title} description"),
            image: format!("/movies/{id}.jpg"),
            year,
        };

        Self {
            users: vec![
                user(1, "Ada Max", "adamax@adamax.com", "123456"),
                user(2, "Maria", "maria@adamax.com", "senha123"),
            ],
            avatars: vec![
                avatar(1, "Mickey", "Disney"),
                avatar(2, "Luke", "Star Wars"),
                avatar(3, "Minnie", "Disney"),
                avatar(4, "Groot", "Marvel"),
            ],
            banners: vec![Banner {
                id: 1,
                title: "The Mandalorian".into(),
                description: "This is the way".into(),
                image: "/banners/1.jpg".into(),
                movie_id: Some(1),
            }],
            trail_offers: vec![
                TrailOfferRecord {
                    id: 1,
                    title: "Trending".into(),
                },
                TrailOfferRecord {
                    id: 2,
                    title: "Classics".into(),
                },
            ],
            trail_movies: vec![
                TrailMovie {
                    trail_offer_id: 1,
                    movie: movie(1, "The Mandalorian", 2019),
                },
                TrailMovie {
                    trail_offer_id: 1,
                    movie: movie(2, "Loki", 2021),
                },
                TrailMovie {
                    trail_offer_id: 2,
                    movie: movie(3, "Fantasia", 1940),
                },
            ],
            profiles: RwLock::new(vec![
                ProfileRecord {
                    id: 1,
                    user_id: 1,
                    avatar_id: 1,
                    name: "Ada".into(),
                    color: "1".into(),
                },
                ProfileRecord {
                    id: 2,
                    user_id: 2,
                    avatar_id: 2,
                    name: "Maria".into(),
                    color: "3".into(),
                },
            ]),
        }
    }

    pub(crate) async fn profiles(&self) -> Vec<ProfileRecord> {
        self.profiles.read().await.clone()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, Error> {
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }

    async fn list_avatars(&self) -> Result<Vec<Avatar>, Error> {
        Ok(self.avatars.clone())
    }

    async fn find_avatar(&self, id: i32) -> Result<Option<Avatar>, Error> {
        Ok(self.avatars.iter().find(|a| a.id == id).cloned())
    }

    async fn find_avatars(&self, ids: &[i32]) -> Result<Vec<Avatar>, Error> {
        Ok(self
            .avatars
            .iter()
            .filter(|a| ids.contains(&a.id))
            .cloned()
            .collect())
    }

    async fn list_profiles(&self, user_id: UserId) -> Result<Vec<ProfileRecord>, Error> {
        Ok(self
            .profiles
            .read()
            .await
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_profile(&self, id: i32) -> Result<Option<ProfileRecord>, Error> {
        Ok(self.profiles.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_profile(&self, profile: NewProfile) -> Result<ProfileRecord, Error> {
        let mut profiles = self.profiles.write().await;
        let id = profiles.iter().map(|p| p.id).max().unwrap_or_default() + 1;

        let record = ProfileRecord {
            id,
            user_id: profile.user_id,
            avatar_id: profile.avatar_id,
            name: profile.name,
            color: profile.color,
        };
        profiles.push(record.clone());

        Ok(record)
    }

    async fn update_profile(
        &self,
        id: i32,
        profile: NewProfile,
    ) -> Result<Option<ProfileRecord>, Error> {
        let mut profiles = self.profiles.write().await;

        Ok(profiles
            .iter_mut()
            .find(|p| p.id == id && p.user_id == profile.user_id)
            .map(|p| {
                p.avatar_id = profile.avatar_id;
                p.name = profile.name;
                p.color = profile.color;
                p.clone()
            }))
    }

    async fn delete_profile(&self, id: i32, user_id: UserId) -> Result<u64, Error> {
        let mut profiles = self.profiles.write().await;
        let before = profiles.len();

        profiles.retain(|p| !(p.id == id && p.user_id == user_id));

        Ok((before - profiles.len()) as u64)
    }

    async fn list_banners(&self) -> Result<Vec<Banner>, Error> {
        Ok(self.banners.clone())
    }

    async fn list_trail_offers(&self) -> Result<Vec<TrailOfferRecord>, Error> {
        Ok(self.trail_offers.clone())
    }

    async fn find_trail_offer(&self, id: i32) -> Result<Option<TrailOfferRecord>, Error> {
        Ok(self.trail_offers.iter().find(|t| t.id == id).cloned())
    }

    async fn list_trail_movies(&self, trail_offer_ids: &[i32]) -> Result<Vec<TrailMovie>, Error> {
        Ok(self
            .trail_movies
            .iter()
            .filter(|m| trail_offer_ids.contains(&m.trail_offer_id))
            .cloned()
            .collect())
    }
}
