use crate::config::ReviewConfig;
use gloo_timers::callback::Timeout;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "form-message success",
            NoticeKind::Warning => "form-message warning",
            NoticeKind::Error => "form-message error",
        }
    }
}

/// Non-blocking acknowledgement shown after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Error, message: message.into() }
    }
}

/// Shows the current notice and clears it after `ReviewConfig::notice_timeout`.
#[component]
pub fn NoticeToast(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    let config = use_context::<ReviewConfig>().unwrap_or_default();
    let timeout_ms = u32::try_from(config.notice_timeout.as_millis()).unwrap_or(u32::MAX);
    // Bumped per notice so a stale timer never hides a newer one
    let generation = store_value(0u64);

    create_effect(move |_| {
        if notice.with(Option::is_some) {
            generation.update_value(|g| *g += 1);
            let shown = generation.get_value();
            Timeout::new(timeout_ms, move || {
                // The section may have been unmounted by the time this fires
                if generation.try_get_value() == Some(shown) {
                    let _ = notice.try_set(None);
                }
            })
            .forget();
        }
    });

    view! {
        <div class="notice-area" aria-live="polite">
            {move || notice.get().map(|current| view! {
                <div class=current.kind.css_class() role="status">
                    <span>{current.message}</span>
                    <button type="button" class="notice-close" on:click=move |_| notice.set(None)>{ "×" }</button>
                </div>
            })}
        </div>
    }
}
