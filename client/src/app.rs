//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::config::MockConfig;
use crate::pages::{
    dashboard::DashboardPage, forgot_password::ForgotPasswordPage, login::LoginPage, not_found::NotFoundPage,
    registration::RegistrationPage, reset_password::ResetPasswordPage,
};
use crate::routes::Page;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, toast and mock-backend contexts and sets up
/// client-side routing. The toast stack sits outside the router so a toast
/// raised just before a redirect survives it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(toasts);
    provide_context(MockConfig::default());

    // The auth flag lives in localStorage, so the session is restored once
    // the app is running in the browser. Until then the header stays empty.
    Effect::new(move || {
        session.set(SessionState::restore(&BrowserStorage));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/authsecure.css"/>
        <Title text="AuthSecure"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment(Page::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(Page::Dashboard.segment()) view=DashboardPage/>
                <Route path=StaticSegment(Page::ForgotPassword.segment()) view=ForgotPasswordPage/>
                <Route path=StaticSegment(Page::Registration.segment()) view=RegistrationPage/>
                <Route path=StaticSegment(Page::ResetPassword.segment()) view=ResetPasswordPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
