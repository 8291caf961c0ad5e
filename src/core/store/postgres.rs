use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use tracing::instrument;

use crate::core::error::{ConfigError, Error};
use crate::core::store::Store;
use crate::types::record::{NewProfile, ProfileRecord, TrailMovie, TrailOfferRecord};
use crate::types::response::{Avatar, Banner, Movie};
use crate::types::user::{UserId, UserRecord};

#[derive(Clone, Debug)]
pub(crate) struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub(crate) async fn connect(
        database_url: &str,
        max_connections: u32,
    ) -> Result<Self, ConfigError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub(crate) async fn migrate(&self) -> Result<(), ConfigError> {
        sqlx::migrate!().run(&self.pool).await?;

        Ok(())
    }
}

#[async_trait]
impl Store for PgStore {
    #[instrument(skip(self))]
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, Error> {
        match sqlx::query(r#"SELECT id, name, email, password FROM "User" WHERE email = $1"#)
            .bind(email)
            .map(map_user)
            .fetch_one(&self.pool)
            .await
        {
            Ok(user) => Ok(Some(user)),
            Err(sqlx::Error::RowNotFound) => Ok(None),
            Err(e) => Err(Error::Sql(e)),
        }
    }

    #[instrument(skip(self))]
    async fn list_avatars(&self) -> Result<Vec<Avatar>, Error> {
        Ok(
            sqlx::query(r#"SELECT id, name, image, category FROM "Avatar" ORDER BY id"#)
                .map(map_avatar)
                .fetch_all(&self.pool)
                .await?,
        )
    }

    #[instrument(skip(self))]
    async fn find_avatar(&self, id: i32) -> Result<Option<Avatar>, Error> {
        Ok(
            sqlx::query(r#"SELECT id, name, image, category FROM "Avatar" WHERE id = $1"#)
                .bind(id)
                .map(map_avatar)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    #[instrument(skip(self))]
    async fn find_avatars(&self, ids: &[i32]) -> Result<Vec<Avatar>, Error> {
        Ok(sqlx::query(
            r#"SELECT id, name, image, category FROM "Avatar" WHERE id = ANY($1) ORDER BY id"#,
        )
        .bind(ids.to_vec())
        .map(map_avatar)
        .fetch_all(&self.pool)
        .await?)
    }

    #[instrument(skip(self))]
    async fn list_profiles(&self, user_id: UserId) -> Result<Vec<ProfileRecord>, Error> {
        Ok(sqlx::query(
            r#"SELECT id, "userId", "avatarId", name, color
            FROM "Profile"
            WHERE "userId" = $1
            ORDER BY id"#,
        )
        .bind(user_id)
        .map(map_profile)
        .fetch_all(&self.pool)
        .await?)
    }

    #[instrument(skip(self))]
    async fn find_profile(&self, id: i32) -> Result<Option<ProfileRecord>, Error> {
        Ok(sqlx::query(
            r#"SELECT id, "userId", "avatarId", name, color FROM "Profile" WHERE id = $1"#,
        )
        .bind(id)
        .map(map_profile)
        .fetch_optional(&self.pool)
        .await?)
    }

    #[instrument(skip(self))]
    async fn insert_profile(&self, profile: NewProfile) -> Result<ProfileRecord, Error> {
        Ok(sqlx::query(
            r#"INSERT INTO "Profile" ("userId", "avatarId", name, color)
            VALUES ($1, $2, $3, $4)
            RETURNING id, "userId", "avatarId", name, color"#,
        )
        .bind(profile.user_id)
        .bind(profile.avatar_id)
        .bind(&profile.name)
        .bind(&profile.color)
        .map(map_profile)
        .fetch_one(&self.pool)
        .await?)
    }

    #[instrument(skip(self))]
    async fn update_profile(
        &self,
        id: i32,
        profile: NewProfile,
    ) -> Result<Option<ProfileRecord>, Error> {
        Ok(sqlx::query(
            r#"UPDATE "Profile"
            SET "avatarId" = $3, name = $4, color = $5
            WHERE id = $1 AND "userId" = $2
            RETURNING id, "userId", "avatarId", name, color"#,
        )
        .bind(id)
        .bind(profile.user_id)
        .bind(profile.avatar_id)
        .bind(&profile.name)
        .bind(&profile.color)
        .map(map_profile)
        .fetch_optional(&self.pool)
        .await?)
    }

    #[instrument(skip(self))]
    async fn delete_profile(&self, id: i32, user_id: UserId) -> Result<u64, Error> {
        let result = sqlx::query(r#"DELETE FROM "Profile" WHERE id = $1 AND "userId" = $2"#)
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn list_banners(&self) -> Result<Vec<Banner>, Error> {
        Ok(sqlx::query(
            r#"SELECT id, title, description, image, "movieId" FROM "Banner" ORDER BY id"#,
        )
        .map(|row: PgRow| Banner {
            id: row.get("id"),
            title: row.get("title"),
            description: row.get("description"),
            image: row.get("image"),
            movie_id: row.get("movieId"),
        })
        .fetch_all(&self.pool)
        .await?)
    }

    #[instrument(skip(self))]
    async fn list_trail_offers(&self) -> Result<Vec<TrailOfferRecord>, Error> {
        Ok(
            sqlx::query(r#"SELECT id, title FROM "TrailOffer" ORDER BY position, id"#)
                .map(map_trail_offer)
                .fetch_all(&self.pool)
                .await?,
        )
    }

    #[instrument(skip(self))]
    async fn find_trail_offer(&self, id: i32) -> Result<Option<TrailOfferRecord>, Error> {
        Ok(
            sqlx::query(r#"SELECT id, title FROM "TrailOffer" WHERE id = $1"#)
                .bind(id)
                .map(map_trail_offer)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    #[instrument(skip(self))]
    async fn list_trail_movies(&self, trail_offer_ids: &[i32]) -> Result<Vec<TrailMovie>, Error> {
        Ok(sqlx::query(
            r#"SELECT
                link."trailOfferId",
                movie.id,
                movie.title,
                movie.description,
                movie.image,
                movie.year
            FROM "TrailOfferMovie" link
            JOIN "Movie" movie ON movie.id = link."movieId"
            WHERE link."trailOfferId" = ANY($1)
            ORDER BY link."trailOfferId", link.position, movie.id"#,
        )
        .bind(trail_offer_ids.to_vec())
        .map(|row: PgRow| TrailMovie {
            trail_offer_id: row.get("trailOfferId"),
            movie: Movie {
                id: row.get("id"),
                title: row.get("title"),
                description: row.get("description"),
                image: row.get("image"),
                year: row.get("year"),
            },
        })
        .fetch_all(&self.pool)
        .await?)
    }
}

fn map_user(row: PgRow) -> UserRecord {
    UserRecord {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password"),
    }
}

fn map_avatar(row: PgRow) -> Avatar {
    Avatar {
        id: row.get("id"),
        name: row.get("name"),
        image: row.get("image"),
        category: row.get("category"),
    }
}

fn map_profile(row: PgRow) -> ProfileRecord {
    ProfileRecord {
        id: row.get("id"),
        user_id: row.get("userId"),
        avatar_id: row.get("avatarId"),
        name: row.get("name"),
        color: row.get("color"),
    }
}

fn map_trail_offer(row: PgRow) -> TrailOfferRecord {
    TrailOfferRecord {
        id: row.get("id"),
        title: row.get("title"),
    }
}
