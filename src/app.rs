/// Main application entry point for the Santo Bar review widget.
/// Owns the review store and wires the sort selector, card list, modal form and notices together.
use crate::components::{
    notice::{Notice, NoticeToast},
    review_form::ReviewForm,
    review_modal::ReviewModal,
    reviews_list::ReviewsList,
    sort_select::SortSelect,
};
use crate::config::ReviewConfig;
use crate::models::review::SortMode;
use crate::render::render_reviews;
use crate::storage::{BrowserStorage, MemoryStorage, ReviewStorage, StorageError};
use crate::store::ReviewStore;
use crate::submission::{submit_review, ReviewDraft, Submission};
use leptos::logging::{error, log, warn};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

const THANKS: &str = "¡Gracias por tu reseña!";
const NOT_SAVED: &str = "Publicamos tu reseña, pero este navegador no permitió guardarla.";
const STORAGE_OFF: &str = "No pudimos acceder al almacenamiento del navegador; las reseñas nuevas no se guardarán.";
const STILL_LOADING: &str = "Las reseñas aún se están cargando, intenta de nuevo.";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ReviewConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/santo-reviews.css"/>
        <Title text="Santo Bar | Reseñas"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=ReviewsSection/>
                </Routes>
            </main>
        </Router>
    }
}

/// Loads the store from the browser's storage, or from memory when that could not be opened.
///
/// The returned notice is set only when the page fell back to memory.
pub fn load_review_store(
    opened: Result<Box<dyn ReviewStorage>, StorageError>,
    config: &ReviewConfig,
) -> (Option<ReviewStore>, Option<Notice>) {
    let (loaded, warning) = match opened.and_then(|storage| ReviewStore::load(storage, config)) {
        Ok(loaded) => (Some(loaded), None),
        Err(err) => {
            error!("[APP] Falling back to in-memory reviews: {}", err);
            let loaded = ReviewStore::load(Box::new(MemoryStorage::new()), config).ok();
            (loaded, Some(Notice::warning(STORAGE_OFF)))
        }
    };
    if let Some(loaded) = &loaded {
        log!("[APP] Review store ready with {} reviews ({:?})", loaded.len(), loaded.origin());
    }
    (loaded, warning)
}

#[component]
pub fn ReviewsSection() -> impl IntoView {
    let config = use_context::<ReviewConfig>().unwrap_or_default();

    // The store lives here and is handed to the handlers below; nothing else owns it.
    let store = create_rw_signal(None::<ReviewStore>);
    let sort_mode = create_rw_signal(SortMode::default());
    let notice = create_rw_signal(None::<Notice>);
    let modal_open = create_rw_signal(false);

    // Effects only run in the browser, so the server renders an empty list
    // and the client loads from localStorage after hydration.
    create_effect(move |_| {
        let opened = BrowserStorage::local().map(|storage| Box::new(storage) as Box<dyn ReviewStorage>);
        let (loaded, warning) = load_review_store(opened, &config);
        if warning.is_some() {
            notice.set(warning);
        }
        store.set(loaded);
    });

    let cards = Signal::derive(move || {
        store.with(|store| {
            store
                .as_ref()
                .map(|store| render_reviews(store.reviews(), sort_mode.get()))
                .unwrap_or_default()
        })
    });

    let submit = Callback::new(move |draft: ReviewDraft| -> bool {
        if store.with_untracked(Option::is_none) {
            warn!("[SUBMIT] Submission before the review store was loaded");
            notice.set(Some(Notice::error(STILL_LOADING)));
            return false;
        }
        // Rejected drafts must not touch the store signal, or every card re-renders
        if let Err(incomplete) = draft.validate() {
            log!("[SUBMIT] Rejected draft, missing: {:?}", incomplete.missing);
            notice.set(Some(Notice::error(incomplete.to_string())));
            return false;
        }

        let mut outcome = None;
        store.update(|store| {
            if let Some(store) = store.as_mut() {
                outcome = Some(submit_review(store, &draft));
            }
        });

        match outcome {
            Some(Ok(Submission::Saved(id))) => {
                log!("[SUBMIT] Review {} saved", id);
                notice.set(Some(Notice::success(THANKS)));
                modal_open.set(false);
                true
            }
            Some(Ok(Submission::Unsaved { .. })) => {
                notice.set(Some(Notice::warning(NOT_SAVED)));
                modal_open.set(false);
                true
            }
            Some(Err(incomplete)) => {
                notice.set(Some(Notice::error(incomplete.to_string())));
                false
            }
            None => false,
        }
    });

    view! {
        <section id="testimonios" class="testimonials">
            <div class="section-header">
                <h2>{ "Lo que dicen nuestros clientes" }</h2>
                <div class="sort-controls">
                    <label for="sortReviews">{ "Ordenar por:" }</label>
                    <SortSelect sort_mode=sort_mode />
                </div>
            </div>
            <ReviewsList cards=cards />
            <button
                id="reviewFab"
                class="review-fab"
                aria-label="Escribir una reseña"
                on:click=move |_| modal_open.set(true)
            >
                <i class="fas fa-pen"></i>
            </button>
            <ReviewModal open=modal_open>
                <ReviewForm on_submit=submit />
            </ReviewModal>
            <NoticeToast notice=notice />
        </section>
    }
}
