//! Top navigation bar with session-aware links and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `RwSignal<SessionState>` from context, so a login or logout anywhere
//! in the app re-renders the nav immediately. Nothing is rendered until the
//! session has been restored from storage on the client.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::Page;
use crate::state::session::{LOGOUT_LANDING, SessionState};
use crate::util::storage::BrowserStorage;

/// Site header.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    let link_class = move |page: Page| nav_link_class(Page::resolve(&pathname.get()) == page);

    // The anchor itself performs the navigation to the landing page.
    let on_logout = move |_| {
        let _ = session.try_update(|s| s.log_out(&BrowserStorage));
        menu_open.set(false);
        log::info!("user logged out");
    };

    view! {
        <Show when=move || session.get().restored>
            <header class="header">
                <div class="header__inner">
                    <a class="header__brand" href=move || session.get().home().path()>
                        <span class="header__logo" aria-hidden="true">"⛨"</span>
                        <span class="header__title">"AuthSecure"</span>
                    </a>
                    <button
                        class="header__menu-toggle"
                        type="button"
                        aria-label="Open menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                    <nav class="header__nav" class:header__nav--open=move || menu_open.get()>
                        <Show
                            when=move || session.get().is_logged_in()
                            fallback=move || {
                                view! {
                                    <a class=move || link_class(Page::Login) href=Page::Login.path()>
                                        "Login"
                                    </a>
                                    <a class=move || link_class(Page::Registration) href=Page::Registration.path()>
                                        "Register"
                                    </a>
                                }
                            }
                        >
                            <a class=move || link_class(Page::Dashboard) href=Page::Dashboard.path()>
                                "Dashboard"
                            </a>
                            <a class="header__link header__logout" href=LOGOUT_LANDING.path() on:click=on_logout>
                                "Logout"
                            </a>
                        </Show>
                        {cfg!(debug_assertions)
                            .then(|| {
                                view! {
                                    <button
                                        class="btn btn--outline btn--sm header__dev-toggle"
                                        type="button"
                                        on:click=move |_| session.update(|s| s.toggle(&BrowserStorage))
                                    >
                                        "Toggle Login (Dev)"
                                    </button>
                                }
                            })}
                    </nav>
                </div>
            </header>
        </Show>
    }
}

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "header__link header__link--active"
    } else {
        "header__link"
    }
}
