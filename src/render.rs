//! Projection of the review collection into display cards.

use crate::models::review::{Review, SortMode};
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt;

/// Display format for card dates, day first as in the Chilean locale.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Stagger between consecutive card entry animations, in seconds.
const ANIMATION_STEP: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarCell {
    Filled,
    Empty,
}

impl StarCell {
    /// Font Awesome classes: solid star when filled, outline otherwise.
    pub fn css_class(self) -> &'static str {
        match self {
            StarCell::Filled => "fas fa-star",
            StarCell::Empty => "far fa-star",
        }
    }
}

/// Five cells in positional order; the cell at 0-based index `i` is filled iff `i < value`.
pub fn star_cells(value: u8) -> [StarCell; 5] {
    std::array::from_fn(|i| {
        if i < usize::from(value) {
            StarCell::Filled
        } else {
            StarCell::Empty
        }
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCard {
    pub id: u64,
    pub stars: [StarCell; 5],
    pub text: String,
    pub author: String,
    pub date_label: String,
    pub animation_delay: f32,
}

/// Card date in the viewer's local time zone.
pub fn format_review_date(date: &DateTime<Utc>) -> String {
    format_review_date_in(date, &Local)
}

pub fn format_review_date_in<Tz>(date: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    date.with_timezone(zone).format(DATE_FORMAT).to_string()
}

/// Borrowed view of `reviews` in display order. Uses a stable sort, so ties keep insertion order.
pub fn sorted_reviews(reviews: &[Review], mode: SortMode) -> Vec<&Review> {
    let mut sorted: Vec<&Review> = reviews.iter().collect();
    match mode {
        SortMode::Newest => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        SortMode::Highest => sorted.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortMode::Lowest => sorted.sort_by(|a, b| a.rating.cmp(&b.rating)),
        SortMode::Unsorted => {}
    }
    sorted
}

/// Builds the full card list for one render pass.
pub fn render_reviews(reviews: &[Review], mode: SortMode) -> Vec<ReviewCard> {
    sorted_reviews(reviews, mode)
        .into_iter()
        .enumerate()
        .map(|(index, review)| ReviewCard {
            id: review.id,
            stars: star_cells(review.rating.get()),
            text: review.text.clone(),
            author: review.name.clone(),
            date_label: format_review_date(&review.date),
            animation_delay: index as f32 * ANIMATION_STEP,
        })
        .collect()
}
