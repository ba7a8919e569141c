//! Fallback for any path outside the route table.

#[cfg(test)]
#[path = "not_found_test.rs"]
mod not_found_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::page_shell::PageShell;
use crate::routes::Page;

pub const HEADLINE: &str = "Oops! Page not found";

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;
    log::warn!("404: no route for {}", pathname.get_untracked());

    view! {
        <PageShell centered=true>
            <div class="not-found">
                <h1 class="not-found__code">"404"</h1>
                <p class="not-found__headline">{HEADLINE}</p>
                <a class="btn btn--link" href=home_link()>"Return to Home"</a>
            </div>
        </PageShell>
    }
}

fn home_link() -> &'static str {
    Page::NotFound.path()
}
