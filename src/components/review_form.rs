use crate::components::star_rating::StarRating;
use crate::rating::RatingSelection;
use crate::submission::ReviewDraft;
use leptos::ev::SubmitEvent;
use leptos::*;

/// Review form. `on_submit` returns whether the draft was accepted; the
/// fields and the star picker are cleared only then.
#[component]
pub fn ReviewForm(on_submit: Callback<ReviewDraft, bool>) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (text, set_text) = create_signal(String::new());
    let selection = create_rw_signal(RatingSelection::default());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = ReviewDraft {
            name: name.get_untracked(),
            rating: selection.get_untracked().value(),
            text: text.get_untracked(),
        };

        if on_submit.call(draft) {
            // Reset values
            set_name.set(String::new());
            set_text.set(String::new());
            selection.update(RatingSelection::reset);
        }
    };

    view! {
        <form id="reviewForm" on:submit=handle_submit>
            <div class="form-group">
                <label for="reviewerName">{ "Tu nombre" }</label>
                <input
                    type="text"
                    id="reviewerName"
                    prop:value=name
                    on:input=move |e| set_name.set(event_target_value(&e))
                />
            </div>
            <div class="form-group">
                <label>{ "Calificación" }</label>
                <StarRating selection=selection />
            </div>
            <div class="form-group">
                <label for="reviewText">{ "Tu reseña" }</label>
                <textarea
                    id="reviewText"
                    rows="4"
                    prop:value=text
                    on:input=move |e| set_text.set(event_target_value(&e))
                ></textarea>
            </div>
            <button type="submit" class="btn">{ "Enviar reseña" }</button>
        </form>
    }
}
