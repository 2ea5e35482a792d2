use crate::render::ReviewCard;
use leptos::*;

/// Replaces the whole card list whenever `cards` changes.
/// Author name and text go in as text nodes, so markup in them is escaped.
#[component]
pub fn ReviewsList(#[prop(into)] cards: Signal<Vec<ReviewCard>>) -> impl IntoView {
    view! {
        <div id="testimonialsContainer" class="testimonials-grid">
            {move || {
                cards
                    .get()
                    .into_iter()
                    .map(|card| view! { <ReviewCardView card=card /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn ReviewCardView(card: ReviewCard) -> impl IntoView {
    let ReviewCard {
        stars,
        text,
        author,
        date_label,
        animation_delay,
        ..
    } = card;

    view! {
        <div class="testimonial-card" style=format!("animation-delay: {:.1}s", animation_delay)>
            <div class="testimonial-content">
                <div class="rating">
                    {stars.into_iter().map(|cell| view! { <i class=cell.css_class()></i> }).collect_view()}
                </div>
                <p class="testimonial-text">{text}</p>
                <div class="testimonial-author">
                    <h4>{author}</h4>
                    <span class="review-date">{date_label}</span>
                </div>
            </div>
        </div>
    }
}
