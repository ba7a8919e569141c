//! Site footer with legal links and copyright.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::util::year::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = copyright_line(current_year());

    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <span class="footer__logo" aria-hidden="true">"⛨"</span>
                    <span>"AuthSecure"</span>
                </div>
                <nav class="footer__links">
                    <a href="/terms">"Terms of Service"</a>
                    <a href="/privacy">"Privacy Policy"</a>
                </nav>
                <p class="footer__copy">{copyright}</p>
            </div>
        </footer>
    }
}

fn copyright_line(year: i32) -> String {
    format!("© {year} AuthSecure. All rights reserved.")
}
