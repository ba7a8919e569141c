//! Page-level error banner above a form.

use leptos::prelude::*;

use crate::state::form::Banner;

#[component]
pub fn AlertBanner(#[prop(into)] banner: Signal<Option<Banner>>) -> impl IntoView {
    move || {
        banner.get().map(|banner| {
            view! {
                <div class="alert alert--destructive" role="alert">
                    <p class="alert__title">{banner.title}</p>
                    <p class="alert__description">{banner.message}</p>
                </div>
            }
        })
    }
}
