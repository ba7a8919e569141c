//! Third-party sign-in button.

use leptos::prelude::*;

use crate::net::types::SocialProvider;

#[component]
pub fn SocialLoginButton(
    provider: SocialProvider,
    #[prop(into)] disabled: Signal<bool>,
    on_click: Callback<SocialProvider>,
) -> impl IntoView {
    view! {
        <button
            class="btn btn--outline social-button"
            type="button"
            aria-label=format!("Login with {provider}")
            disabled=move || disabled.get()
            on:click=move |_| on_click.run(provider)
        >
            <span class="social-button__icon" aria-hidden="true">"→"</span>
            <span>{format!("Sign in with {provider}")}</span>
        </button>
    }
}
