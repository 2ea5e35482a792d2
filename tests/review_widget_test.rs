#![cfg(target_arch = "wasm32")]

use gloo_timers::future::sleep;
use leptos::*;
use santo_reviews::app::ReviewsSection;
use santo_reviews::config::ReviewConfig;
use santo_reviews::models::review::Rating;
use santo_reviews::storage::BrowserStorage;
use santo_reviews::store::{LoadOrigin, ReviewStore};
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear_key(key: &str) {
    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .remove_item(key)
        .unwrap();
}

fn count(container: &web_sys::Element, selector: &str) -> u32 {
    container.query_selector_all(selector).unwrap().length()
}

fn click(container: &web_sys::Element, selector: &str) {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {}", selector))
        .unchecked_into::<web_sys::HtmlElement>()
        .click();
}

// Leptos delegates input events to the document, so the event has to bubble
fn type_into(container: &web_sys::Element, selector: &str, value: &str) {
    let element = container.query_selector(selector).unwrap().unwrap();
    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.set_value(value);
    }
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    element.dispatch_event(&event).unwrap();
}

async fn mount_section(key: &'static str) -> web_sys::Element {
    mount_section_with(ReviewConfig::default().with_storage_key(key)).await
}

async fn mount_section_with(config: ReviewConfig) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    mount_to(container.clone().unchecked_into::<web_sys::HtmlElement>(), move || {
        provide_context(config);
        view! { <ReviewsSection/> }
    });

    // Wait for the load effect to run
    sleep(Duration::from_millis(100)).await;
    container
}

fn modal_display(container: &web_sys::Element) -> String {
    container
        .query_selector("#reviewModal")
        .unwrap()
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>()
        .style()
        .get_property_value("display")
        .unwrap()
}

fn body_overflow() -> String {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .body()
        .unwrap()
        .style()
        .get_property_value("overflow")
        .unwrap()
}

#[wasm_bindgen_test]
fn test_local_storage_round_trip() {
    let config = ReviewConfig::default().with_storage_key("santoBarReviews.roundtrip");
    clear_key(&config.storage_key);

    let mut store =
        ReviewStore::load(Box::new(BrowserStorage::local().unwrap()), &config).unwrap();
    assert_eq!(store.origin(), LoadOrigin::Seeded);
    store
        .add_review("Ana", Rating::new(4).unwrap(), "Great food")
        .unwrap();

    let reloaded =
        ReviewStore::load(Box::new(BrowserStorage::local().unwrap()), &config).unwrap();
    assert_eq!(reloaded.origin(), LoadOrigin::Restored);
    assert_eq!(reloaded.reviews(), store.reviews());

    clear_key(&config.storage_key);
}

#[wasm_bindgen_test]
async fn test_first_visit_shows_seed_review() {
    const KEY: &str = "santoBarReviews.seed";
    clear_key(KEY);

    let container = mount_section(KEY).await;

    assert_eq!(count(&container, ".testimonial-card"), 1);
    assert_eq!(count(&container, ".testimonial-card .rating i.fas"), 5);
    let author = container.query_selector(".testimonial-author h4").unwrap().unwrap();
    assert_eq!(author.text_content().as_deref(), Some("Agustín Riffo"));

    container.remove();
    clear_key(KEY);
}

#[wasm_bindgen_test]
async fn test_star_clicks_fill_picker() {
    const KEY: &str = "santoBarReviews.stars";
    clear_key(KEY);
    let container = mount_section(KEY).await;

    click(&container, ".rating-input i[data-rating='3']");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(count(&container, ".rating-input i.fas"), 3);
    assert_eq!(count(&container, ".rating-input i.far"), 2);

    click(&container, ".rating-input i[data-rating='1']");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(count(&container, ".rating-input i.fas"), 1);

    container.remove();
    clear_key(KEY);
}

#[wasm_bindgen_test]
async fn test_submission_flow() {
    const KEY: &str = "santoBarReviews.submit";
    clear_key(KEY);
    let container = mount_section(KEY).await;

    // Without a rating nothing is added
    type_into(&container, "#reviewerName", "Ana");
    type_into(&container, "#reviewText", "Great food");
    click(&container, "#reviewForm button[type='submit']");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(count(&container, ".testimonial-card"), 1);
    assert_eq!(count(&container, ".form-message.error"), 1);

    click(&container, ".rating-input i[data-rating='4']");
    click(&container, "#reviewForm button[type='submit']");
    sleep(Duration::from_millis(50)).await;

    assert_eq!(count(&container, ".testimonial-card"), 2);
    assert_eq!(count(&container, ".form-message.success"), 1);
    // Picker is reset after a successful submission
    assert_eq!(count(&container, ".rating-input i.fas"), 0);

    let stored = web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .get_item(KEY)
        .unwrap()
        .unwrap();
    assert!(stored.contains("Great food"));

    container.remove();
    clear_key(KEY);
}

#[wasm_bindgen_test]
async fn test_rejected_submission_keeps_rendered_cards() {
    const KEY: &str = "santoBarReviews.rejected";
    clear_key(KEY);
    let container = mount_section(KEY).await;
    let before = container.query_selector(".testimonial-card").unwrap().unwrap();

    type_into(&container, "#reviewerName", "Ana");
    click(&container, "#reviewForm button[type='submit']");
    sleep(Duration::from_millis(50)).await;

    assert_eq!(count(&container, ".form-message.error"), 1);
    let after = container.query_selector(".testimonial-card").unwrap().unwrap();
    assert!(before.is_same_node(Some(&after)));

    container.remove();
    clear_key(KEY);
}

#[wasm_bindgen_test]
async fn test_modal_open_close_and_scroll_lock() {
    const KEY: &str = "santoBarReviews.modal";
    clear_key(KEY);
    let container = mount_section(KEY).await;
    assert_eq!(modal_display(&container), "none");

    // Backdrop click closes
    click(&container, "#reviewFab");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(modal_display(&container), "flex");
    assert_eq!(body_overflow(), "hidden");
    click(&container, "#reviewModal");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(modal_display(&container), "none");
    assert_eq!(body_overflow(), "auto");

    // Clicks inside the dialog leave it open
    click(&container, "#reviewFab");
    click(&container, ".modal-content h3");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(modal_display(&container), "flex");

    click(&container, ".close-modal");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(modal_display(&container), "none");
    assert_eq!(body_overflow(), "auto");

    // A saved review closes it as well
    click(&container, "#reviewFab");
    type_into(&container, "#reviewerName", "Ana");
    type_into(&container, "#reviewText", "Great food");
    click(&container, ".rating-input i[data-rating='5']");
    click(&container, "#reviewForm button[type='submit']");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(count(&container, ".testimonial-card"), 2);
    assert_eq!(modal_display(&container), "none");
    assert_eq!(body_overflow(), "auto");

    container.remove();
    clear_key(KEY);
}

#[wasm_bindgen_test]
async fn test_notice_dismissed_by_its_own_timer_only() {
    const KEY: &str = "santoBarReviews.notice";
    clear_key(KEY);
    let mut config = ReviewConfig::default().with_storage_key(KEY);
    config.notice_timeout = Duration::from_millis(400);
    let container = mount_section_with(config).await;

    // Error notice at t=0, its timer fires at t=400
    click(&container, "#reviewForm button[type='submit']");
    sleep(Duration::from_millis(150)).await;
    assert_eq!(count(&container, ".form-message.error"), 1);

    // Success notice at t=150, due to clear at t=550
    type_into(&container, "#reviewerName", "Ana");
    type_into(&container, "#reviewText", "Great food");
    click(&container, ".rating-input i[data-rating='4']");
    click(&container, "#reviewForm button[type='submit']");
    sleep(Duration::from_millis(300)).await;

    // The error's timer has fired by now and must leave the newer notice alone
    assert_eq!(count(&container, ".form-message.success"), 1);

    sleep(Duration::from_millis(300)).await;
    assert_eq!(count(&container, ".form-message"), 0);

    container.remove();
    clear_key(KEY);
}
