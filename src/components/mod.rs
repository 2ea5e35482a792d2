pub mod notice;
pub mod review_form;
pub mod review_modal;
pub mod reviews_list;
pub mod sort_select;
pub mod star_rating;
