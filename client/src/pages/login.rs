//! Login page: email/password form against the mock backend, plus social
//! sign-in buttons that are not implemented yet.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::{SubmitOutcome, follow};
use crate::components::alert_banner::AlertBanner;
use crate::components::auth_form_card::AuthFormCard;
use crate::components::form_field::{FormField, PasswordInput};
use crate::components::page_shell::PageShell;
use crate::components::social_login_button::SocialLoginButton;
use crate::config::MockConfig;
use crate::error::AuthError;
use crate::forms::{Field, LoginForm};
use crate::net::mock_api;
use crate::net::types::SocialProvider;
use crate::routes::Page;
use crate::state::form::FormState;
use crate::state::session::SessionState;
use crate::util::storage::{BrowserStorage, KeyValueStore};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = use_context::<MockConfig>().unwrap_or_default();
    let navigate = use_navigate();
    let form = RwSignal::new(FormState::new(LoginForm::default()));
    let submitting = Signal::derive(move || form.with(|f| f.submitting));

    log::debug!("LoginPage loaded");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(FormState::begin_submit).flatten() else {
            return;
        };
        log::info!("login submitted for {}", credentials.email);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = mock_api::login(&config, &credentials).await;
            let Some(outcome) = session.try_update(|s| login_outcome(result, s, &BrowserStorage)) else {
                return;
            };
            follow(outcome, form, navigate).await;
        });
    };

    let on_social = Callback::new(move |provider: SocialProvider| {
        log::info!("attempting {provider} login");
        if let Err(err) = mock_api::social_login(provider) {
            form.update(|f| f.set_banner(err.banner()));
        }
    });

    view! {
        <PageShell centered=true>
            <AuthFormCard
                title="Login to Your Account"
                description="Enter your credentials to access your dashboard."
                footer=|| {
                    view! {
                        <p class="auth-card__footer-text">
                            "Don't have an account? "
                            <a href=Page::Registration.path()>"Sign Up"</a>
                        </p>
                    }
                }
            >
                <form class="auth-form" novalidate=true on:submit=on_submit>
                    <AlertBanner banner=Signal::derive(move || form.with(|f| f.banner.clone()))/>
                    <FormField
                        field=Field::Email
                        label="Email Address"
                        error=Signal::derive(move || form.with(|f| f.field_error(Field::Email)))
                    >
                        <input
                            id=Field::Email.name()
                            name=Field::Email.name()
                            class="input"
                            type="email"
                            placeholder="you@example.com"
                            autocomplete="email"
                            prop:value=move || form.with(|f| f.values.email.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.edit(|v| v.email = value));
                            }
                        />
                    </FormField>
                    <FormField
                        field=Field::Password
                        label="Password"
                        error=Signal::derive(move || form.with(|f| f.field_error(Field::Password)))
                    >
                        <PasswordInput
                            field=Field::Password
                            value=Signal::derive(move || form.with(|f| f.values.password.clone()))
                            on_input=Callback::new(move |value: String| {
                                form.update(|f| f.edit(|v| v.password = value));
                            })
                        />
                    </FormField>
                    <div class="auth-form__row">
                        <label class="checkbox">
                            <input
                                id="rememberMe"
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.values.remember_me)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    form.update(|f| f.edit(|v| v.remember_me = checked));
                                }
                            />
                            <span>"Remember me"</span>
                        </label>
                        <a class="auth-form__link" href=Page::ForgotPassword.path()>"Forgot password?"</a>
                    </div>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || submitting.get()>
                        {move || submit_label(submitting.get())}
                    </button>
                </form>
                <div class="divider">
                    <span>"Or continue with"</span>
                </div>
                <div class="social-buttons">
                    {SocialProvider::ALL
                        .into_iter()
                        .map(|provider| {
                            view! { <SocialLoginButton provider=provider disabled=submitting on_click=on_social/> }
                        })
                        .collect_view()}
                </div>
            </AuthFormCard>
        </PageShell>
    }
}

/// Reduce a finished mock login to what the page does next. Success sets the
/// auth flag; rejection leaves it untouched.
pub(crate) fn login_outcome(
    result: Result<(), AuthError>,
    session: &mut SessionState,
    store: &impl KeyValueStore,
) -> SubmitOutcome {
    match result {
        Ok(()) => {
            session.log_in(store);
            log::info!("login succeeded");
            SubmitOutcome::redirect_now(Page::Dashboard)
        }
        Err(err) => {
            log::warn!("login rejected: {err}");
            SubmitOutcome::Stay(err.banner())
        }
    }
}

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Logging in..." } else { "Login" }
}
