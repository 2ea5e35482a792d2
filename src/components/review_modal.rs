use leptos::logging::warn;
use leptos::*;

const MODAL_ID: &str = "reviewModal";

/// Overlay holding the review form. Closes on the × button or a click on the backdrop.
#[component]
pub fn ReviewModal(open: RwSignal<bool>, children: Children) -> impl IntoView {
    // Lock page scrolling while the modal is shown
    create_effect(move |_| {
        let overflow = if open.get() { "hidden" } else { "auto" };
        if let Some(body) = document().body() {
            if let Err(err) = body.style().set_property("overflow", overflow) {
                warn!("[MODAL] Could not set body overflow: {:?}", err);
            }
        }
    });

    let close_on_backdrop = move |ev: ev::MouseEvent| {
        if event_target::<web_sys::Element>(&ev).id() == MODAL_ID {
            open.set(false);
        }
    };

    view! {
        <div
            id=MODAL_ID
            class="modal"
            style:display=move || if open.get() { "flex" } else { "none" }
            on:click=close_on_backdrop
        >
            <div class="modal-content">
                <span class="close-modal" on:click=move |_| open.set(false)>{ "×" }</span>
                <h3>{ "Deja tu reseña" }</h3>
                {children()}
            </div>
        </div>
    }
}
