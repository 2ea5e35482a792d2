use crate::models::review::Rating;
use crate::render::{star_cells, StarCell};

/// State behind the five-star picker. Star positions passed to `select` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingSelection {
    selected: u8, // 0 while nothing is picked
}

impl RatingSelection {
    pub fn select(&mut self, star: u8) {
        if let Ok(rating) = Rating::new(star) {
            self.selected = rating.get();
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Raw value as the form submits it; 0 means unset.
    pub fn value(&self) -> u8 {
        self.selected
    }

    pub fn rating(&self) -> Option<Rating> {
        Rating::new(self.selected).ok()
    }

    pub fn cells(&self) -> [StarCell; 5] {
        star_cells(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unselected_and_empty() {
        let selection = RatingSelection::default();
        assert_eq!(selection.value(), 0);
        assert_eq!(selection.rating(), None);
        assert_eq!(selection.cells(), [StarCell::Empty; 5]);
    }

    #[test]
    fn clicking_third_star_fills_three() {
        let mut selection = RatingSelection::default();
        selection.select(3);
        assert_eq!(selection.value(), 3);
        assert_eq!(
            selection.cells(),
            [StarCell::Filled, StarCell::Filled, StarCell::Filled, StarCell::Empty, StarCell::Empty]
        );

        // Picking a lower star shrinks the fill
        selection.select(1);
        assert_eq!(selection.cells()[1], StarCell::Empty);
    }

    #[test]
    fn out_of_range_clicks_are_ignored() {
        let mut selection = RatingSelection::default();
        selection.select(4);
        selection.select(0);
        selection.select(6);
        assert_eq!(selection.value(), 4);
    }

    #[test]
    fn reset_clears_selection() {
        let mut selection = RatingSelection::default();
        selection.select(5);
        selection.reset();
        assert_eq!(selection.value(), 0);
        assert_eq!(selection.cells(), [StarCell::Empty; 5]);
    }
}
