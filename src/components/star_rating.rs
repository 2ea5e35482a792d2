use crate::rating::RatingSelection;
use leptos::*;

/// Five clickable stars. Clicking star `k` (1-based) selects rating `k`.
#[component]
pub fn StarRating(selection: RwSignal<RatingSelection>) -> impl IntoView {
    view! {
        <div class="rating-input">
            {(1..=5u8)
                .map(|star| {
                    let index = usize::from(star - 1);
                    view! {
                        <i
                            data-rating=star.to_string()
                            aria-label=format!("{} estrellas", star)
                            class=move || selection.with(|s| s.cells()[index].css_class())
                            on:click=move |_| selection.update(|s| s.select(star))
                        ></i>
                    }
                })
                .collect_view()}
        </div>
    }
}
