//! Renders `ToastState` and auto-dismisses each toast after the configured TTL.

use leptos::prelude::*;

use crate::config::MockConfig;
use crate::state::toast::{Toast, ToastState};
use crate::util::latency;

/// Toast stack. Mounted outside the router so it survives navigation.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| view! { <ToastItem toast=toast/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ttl = use_context::<MockConfig>().unwrap_or_default().toast_ttl;
    let id = toast.id;

    if !ttl.is_zero() {
        leptos::task::spawn_local(async move {
            latency::simulate(ttl).await;
            let _ = toasts.try_update(|t| t.dismiss(id));
        });
    }

    view! {
        <div class=toast.kind.class() role="status">
            <div class="toast__body">
                <p class="toast__title">{toast.title}</p>
                {toast.description.map(|text| view! { <p class="toast__description">{text}</p> })}
            </div>
            <button
                class="toast__close"
                type="button"
                aria-label="Dismiss notification"
                on:click=move |_| toasts.update(|t| t.dismiss(id))
            >
                "✕"
            </button>
        </div>
    }
}
