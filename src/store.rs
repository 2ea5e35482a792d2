//! The review collection and its durable mirror.
//!
//! The in-memory list is canonical. Every mutation rewrites the whole list
//! under one storage key; reads happen once, when the store is loaded.

use crate::config::{ReviewConfig, SeedReview};
use crate::models::review::{Rating, Review};
use crate::storage::{ReviewStorage, StorageError};
use chrono::{DateTime, Utc};
use leptos::logging::{error, log, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version written into the stored envelope.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The review is in the in-memory list but the durable write failed.
    #[error("review {id} was added but could not be saved: {source}")]
    Persist { id: u64, source: StorageError },
    #[error("failed to encode reviews: {0}")]
    Encode(#[from] serde_json::Error),
}

/// How the collection came to be on this page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    Restored,
    Seeded,
    /// Stored data could not be decoded and was replaced by the seed.
    Recovered,
}

#[derive(Serialize)]
struct StoredReviewsRef<'a> {
    version: u32,
    reviews: &'a [Review],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredReviews {
    Versioned { version: u32, reviews: Vec<Review> },
    // Bare array, as written before the envelope existed
    Legacy(Vec<Review>),
}

fn decode(raw: &str) -> Result<Vec<Review>, serde_json::Error> {
    match serde_json::from_str(raw)? {
        StoredReviews::Versioned { version, reviews } => {
            if version > SCHEMA_VERSION {
                warn!("[STORE] Stored schema v{} is newer than v{}", version, SCHEMA_VERSION);
            }
            Ok(reviews)
        }
        StoredReviews::Legacy(reviews) => Ok(reviews),
    }
}

fn current_timestamp() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

pub struct ReviewStore {
    storage: Box<dyn ReviewStorage>,
    key: String,
    reviews: Vec<Review>,
    origin: LoadOrigin,
}

impl ReviewStore {
    /// Loads the collection, seeding (and persisting) it when nothing usable is stored.
    ///
    /// Only a failed read is returned as an error. Malformed data and a failed
    /// seed write are logged and recovered from.
    pub fn load(storage: Box<dyn ReviewStorage>, config: &ReviewConfig) -> Result<Self, StorageError> {
        let key = config.storage_key.clone();
        let (reviews, origin) = match storage.get_item(&key)? {
            Some(raw) => match decode(&raw) {
                Ok(reviews) => {
                    log!("[STORE] Restored {} reviews from '{}'", reviews.len(), key);
                    (reviews, LoadOrigin::Restored)
                }
                Err(err) => {
                    warn!("[STORE] Discarding malformed data under '{}': {}", key, err);
                    (vec![seed_review(&config.seed)], LoadOrigin::Recovered)
                }
            },
            None => {
                log!("[STORE] Nothing stored under '{}', seeding", key);
                (vec![seed_review(&config.seed)], LoadOrigin::Seeded)
            }
        };

        let store = ReviewStore {
            storage,
            key,
            reviews,
            origin,
        };
        if origin != LoadOrigin::Restored {
            if let Err(err) = store.persist() {
                error!("[STORE] Seed review kept in memory only: {}", err);
            }
        }
        Ok(store)
    }

    /// Overwrites the durable mirror with the full collection.
    pub fn persist(&self) -> Result<(), ReviewError> {
        let payload = serde_json::to_string(&StoredReviewsRef {
            version: SCHEMA_VERSION,
            reviews: &self.reviews,
        })?;
        self.storage.set_item(&self.key, &payload)?;
        Ok(())
    }

    /// Prepends a review and persists. Callers validate name and text first.
    ///
    /// On `ReviewError::Persist` the review stays at the front of the list.
    pub fn add_review(
        &mut self,
        name: impl Into<String>,
        rating: Rating,
        text: impl Into<String>,
    ) -> Result<u64, ReviewError> {
        let date = current_timestamp();
        let id = self.next_id(&date);
        self.reviews.insert(
            0,
            Review {
                id,
                name: name.into(),
                rating,
                text: text.into(),
                date,
            },
        );
        log!("[STORE] Added review {} ({} total)", id, self.reviews.len());

        match self.persist() {
            Ok(()) => Ok(id),
            Err(ReviewError::Storage(source)) => Err(ReviewError::Persist { id, source }),
            Err(other) => Err(other),
        }
    }

    // Clock millis, bumped past the largest id so ids never repeat within a store.
    fn next_id(&self, date: &DateTime<Utc>) -> u64 {
        let millis = u64::try_from(date.timestamp_millis()).unwrap_or(0);
        match self.reviews.iter().map(|review| review.id).max() {
            // An id at u64::MAX has nothing after it; fall back to the clock
            Some(largest) if largest >= millis => largest.checked_add(1).unwrap_or(millis),
            _ => millis,
        }
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn origin(&self) -> LoadOrigin {
        self.origin
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }
}

fn seed_review(seed: &SeedReview) -> Review {
    let date = current_timestamp();
    Review {
        id: u64::try_from(date.timestamp_millis()).unwrap_or(0),
        name: seed.name.clone(),
        rating: seed.rating,
        text: seed.text.clone(),
        date,
    }
}
