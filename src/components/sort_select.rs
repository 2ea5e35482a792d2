use crate::models::review::SortMode;
use leptos::*;

#[component]
pub fn SortSelect(sort_mode: RwSignal<SortMode>) -> impl IntoView {
    view! {
        <select
            id="sortReviews"
            on:change=move |ev| sort_mode.set(SortMode::from_token(&event_target_value(&ev)))
        >
            {SortMode::SELECTABLE
                .into_iter()
                .map(|mode| view! {
                    <option value=mode.token() selected=move || sort_mode.get() == mode>
                        {mode.label()}
                    </option>
                })
                .collect_view()}
        </select>
    }
}
