//! Card wrapper shared by the four auth forms.

use leptos::prelude::*;

/// Titled card with optional description and footer slot.
#[component]
pub fn AuthFormCard(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] footer: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    log::debug!("AuthFormCard rendered: {title}");

    view! {
        <section class="auth-card">
            <header class="auth-card__header">
                <h1 class="auth-card__title">{title}</h1>
                {description.map(|text| view! { <p class="auth-card__description">{text}</p> })}
            </header>
            <div class="auth-card__content">{children()}</div>
            {footer.map(|footer| view! { <footer class="auth-card__footer">{footer.run()}</footer> })}
        </section>
    }
}
