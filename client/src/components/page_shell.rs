//! Header + main + footer frame shared by every routed page.

use leptos::prelude::*;

use super::footer::Footer;
use super::header::Header;

/// Standard page layout. `centered` vertically centers the content, used by
/// the auth card screens.
#[component]
pub fn PageShell(#[prop(optional)] centered: bool, children: Children) -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <main class="page__main" class:page__main--centered=centered>
                {children()}
            </main>
            <Footer/>
        </div>
    }
}
