use crate::models::review::Rating;
use std::time::Duration;

/// localStorage key the review collection lives under.
pub const STORAGE_KEY: &str = "santoBarReviews";

/// Review shown on first visit, before anybody has written one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReview {
    pub name: String,
    pub rating: Rating,
    pub text: String,
}

/// Widget settings, provided to the component tree through Leptos context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewConfig {
    pub storage_key: String,
    pub notice_timeout: Duration,
    pub seed: SeedReview,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        ReviewConfig {
            storage_key: STORAGE_KEY.to_string(),
            notice_timeout: Duration::from_secs(5),
            seed: SeedReview {
                name: "Agustín Riffo".to_string(),
                rating: Rating::TOP,
                text: "10/10, experiencia inolvidable, las mejores pizzas y tragos de Arauco"
                    .to_string(),
            },
        }
    }
}

impl ReviewConfig {
    /// Same settings under a different key; lets tests run side by side.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
