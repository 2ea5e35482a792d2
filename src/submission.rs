//! Validation gate between the review form and the store.

use crate::models::review::Rating;
use crate::storage::StorageError;
use crate::store::{ReviewError, ReviewStore};
use leptos::logging::{error, log, warn};
use std::fmt;
use thiserror::Error;

/// Raw form contents at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub name: String,
    pub rating: u8, // 0 when no star was picked
    pub text: String,
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub name: String,
    pub rating: Rating,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewField {
    Name,
    Rating,
    Text,
}

impl fmt::Display for ReviewField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReviewField::Name => "nombre",
            ReviewField::Rating => "calificación",
            ReviewField::Text => "reseña",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Por favor completa todos los campos y selecciona una calificación.")]
pub struct IncompleteReview {
    pub missing: Vec<ReviewField>,
}

impl ReviewDraft {
    pub fn validate(&self) -> Result<NewReview, IncompleteReview> {
        let name = self.name.trim();
        let text = self.text.trim();
        let rating = Rating::new(self.rating).ok();

        let mut missing = Vec::new();
        if name.is_empty() {
            missing.push(ReviewField::Name);
        }
        if rating.is_none() {
            missing.push(ReviewField::Rating);
        }
        if text.is_empty() {
            missing.push(ReviewField::Text);
        }

        match rating {
            Some(rating) if missing.is_empty() => Ok(NewReview {
                name: name.to_string(),
                rating,
                text: text.to_string(),
            }),
            _ => Err(IncompleteReview { missing }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Saved(u64),
    /// Shown on the page but not written to storage.
    Unsaved { id: u64, error: StorageError },
}

/// Validates the draft and, only if it is complete, adds it to the store.
pub fn submit_review(store: &mut ReviewStore, draft: &ReviewDraft) -> Result<Submission, IncompleteReview> {
    let review = draft.validate().map_err(|incomplete| {
        log!("[SUBMIT] Rejected draft, missing: {:?}", incomplete.missing);
        incomplete
    })?;

    match store.add_review(review.name, review.rating, review.text) {
        Ok(id) => Ok(Submission::Saved(id)),
        Err(ReviewError::Persist { id, source }) => {
            warn!("[SUBMIT] Review {} not persisted: {}", id, source);
            Ok(Submission::Unsaved { id, error: source })
        }
        Err(err) => {
            // Only the JSON encoder is left, and it cannot fail on these types
            error!("[SUBMIT] Unexpected store failure: {}", err);
            let id = store.reviews().first().map_or(0, |review| review.id);
            Ok(Submission::Unsaved {
                id,
                error: StorageError::Write(err.to_string()),
            })
        }
    }
}
