// src/models/review.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A star rating between 1 and 5 inclusive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const TOP: Rating = Rating(Self::MAX);

    pub fn new(value: u8) -> Result<Self, RatingOutOfRange> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(RatingOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating {0} is outside 1..=5")]
pub struct RatingOutOfRange(pub u8);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: u64,             // Milliseconds since the epoch at creation
    pub name: String,        // Author display name, untrusted
    pub rating: Rating,
    pub text: String,        // Review body, untrusted
    pub date: DateTime<Utc>, // Creation time, ISO-8601 on the wire
}

/// Display ordering applied when rendering; never changes the stored order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Newest,
    Highest,
    Lowest,
    /// Insertion order. Used for tokens the selector should never send.
    Unsorted,
}

impl SortMode {
    pub const SELECTABLE: [SortMode; 3] = [SortMode::Newest, SortMode::Highest, SortMode::Lowest];

    pub fn from_token(token: &str) -> Self {
        match token {
            "newest" => SortMode::Newest,
            "highest" => SortMode::Highest,
            "lowest" => SortMode::Lowest,
            other => {
                leptos::logging::warn!("[RENDER] Unknown sort mode '{}', keeping insertion order", other);
                SortMode::Unsorted
            }
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::Highest => "highest",
            SortMode::Lowest => "lowest",
            SortMode::Unsorted => "unsorted",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Newest => "Más recientes",
            SortMode::Highest => "Mejor calificadas",
            SortMode::Lowest => "Menor calificación",
            SortMode::Unsorted => "Sin orden",
        }
    }
}
