use std::sync::Arc;

use tracing::instrument;

use crate::core::error::Error;
use crate::core::store::Store;
use crate::types::record::{TrailMovie, TrailOfferRecord};
use crate::types::response::{Avatar, AvatarGroup, Banner, TrailOffer};

pub(crate) const TRAIL_OFFER_NOT_FOUND: &str = "Trail offer not found";

#[derive(Clone, Debug)]
pub(crate) struct CatalogController {
    store: Arc<dyn Store>,
}

impl CatalogController {
    pub(crate) fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub(crate) async fn avatars(&self) -> Result<Vec<AvatarGroup>, Error> {
        Ok(group_by_category(self.store.list_avatars().await?))
    }

    #[instrument(skip(self))]
    pub(crate) async fn banners(&self) -> Result<Vec<Banner>, Error> {
        self.store.list_banners().await
    }

    #[instrument(skip(self))]
    pub(crate) async fn trail_offers(&self) -> Result<Vec<TrailOffer>, Error> {
        let trails = self.store.list_trail_offers().await?;

        if trails.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = trails.iter().map(|t| t.id).collect();
        let movies = self.store.list_trail_movies(&ids).await?;

        Ok(attach_movies(trails, movies))
    }

    #[instrument(skip(self))]
    pub(crate) async fn trail_offer(&self, id: i32) -> Result<TrailOffer, Error> {
        let trail = self
            .store
            .find_trail_offer(id)
            .await?
            .ok_or_else(|| Error::not_found(TRAIL_OFFER_NOT_FOUND))?;

        let movies = self.store.list_trail_movies(&[trail.id]).await?;

        attach_movies(vec![trail], movies)
            .into_iter()
            .next()
            .ok_or(Error::Internal)
    }
}

/// Groups avatars by category, keeping categories in first-seen order.
fn group_by_category(avatars: Vec<Avatar>) -> Vec<AvatarGroup> {
    let mut groups: Vec<AvatarGroup> = Vec::new();

    for avatar in avatars {
        match groups.iter_mut().find(|g| g.name == avatar.category) {
            Some(group) => group.items.push(avatar),
            None => groups.push(AvatarGroup {
                name: avatar.category.clone(),
                items: vec![avatar],
            }),
        }
    }

    groups
}

fn attach_movies(trails: Vec<TrailOfferRecord>, movies: Vec<TrailMovie>) -> Vec<TrailOffer> {
    let mut offers: Vec<TrailOffer> = trails
        .into_iter()
        .map(|t| TrailOffer {
            id: t.id,
            title: t.title,
            items: Vec::new(),
        })
        .collect();

    for TrailMovie {
        trail_offer_id,
        movie,
    } in movies
    {
        if let Some(offer) = offers.iter_mut().find(|o| o.id == trail_offer_id) {
            offer.items.push(movie);
        }
    }

    offers
}
