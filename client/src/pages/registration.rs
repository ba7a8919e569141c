//! Account creation page.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::{SubmitOutcome, follow};
use crate::components::alert_banner::AlertBanner;
use crate::components::auth_form_card::AuthFormCard;
use crate::components::form_field::{FormField, PasswordInput};
use crate::components::page_shell::PageShell;
use crate::config::MockConfig;
use crate::error::AuthError;
use crate::forms::{Field, RegistrationForm};
use crate::net::mock_api;
use crate::routes::Page;
use crate::state::form::FormState;
use crate::state::toast::ToastState;

pub const SUCCESS_TITLE: &str = "Registration Successful!";
pub const SUCCESS_DESCRIPTION: &str = "Your account has been created. Please log in.";
pub const FAILED_TITLE: &str = "Registration Failed";

#[component]
pub fn RegistrationPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = use_context::<MockConfig>().unwrap_or_default();
    let navigate = use_navigate();
    let form = RwSignal::new(FormState::new(RegistrationForm::default()));
    let submitting = Signal::derive(move || form.with(|f| f.submitting));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = form.try_update(FormState::begin_submit).flatten() else {
            return;
        };
        log::info!("registration submitted for {}", input.email);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = mock_api::register(&config, &input).await;
            let Some(outcome) = toasts.try_update(|t| registration_outcome(result, &config, t)) else {
                return;
            };
            follow(outcome, form, navigate).await;
        });
    };

    view! {
        <PageShell centered=true>
            <AuthFormCard
                title="Create your Account"
                description="Enter your details below to register."
                footer=|| {
                    view! {
                        <p class="auth-card__footer-text">
                            "Already have an account? "
                            <a href=Page::Login.path()>"Login"</a>
                        </p>
                    }
                }
            >
                <form class="auth-form" novalidate=true on:submit=on_submit>
                    <AlertBanner banner=Signal::derive(move || form.with(|f| f.banner.clone()))/>
                    <FormField
                        field=Field::Email
                        label="Email address"
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
                            autocomplete="new-password"
                            value=Signal::derive(move || form.with(|f| f.values.password.clone()))
                            on_input=Callback::new(move |value: String| {
                                form.update(|f| f.edit(|v| v.password = value));
                            })
                        />
                    </FormField>
                    <FormField
                        field=Field::ConfirmPassword
                        label="Confirm Password"
                        error=Signal::derive(move || form.with(|f| f.field_error(Field::ConfirmPassword)))
                    >
                        <PasswordInput
                            field=Field::ConfirmPassword
                            autocomplete="new-password"
                            value=Signal::derive(move || form.with(|f| f.values.confirm_password.clone()))
                            on_input=Callback::new(move |value: String| {
                                form.update(|f| f.edit(|v| v.confirm_password = value));
                            })
                        />
                    </FormField>
                    <div
                        class="form-field"
                        class:form-field--invalid=move || form.with(|f| f.errors.contains(Field::TermsAccepted))
                    >
                        <label class="checkbox">
                            <input
                                id=Field::TermsAccepted.name()
                                name=Field::TermsAccepted.name()
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.values.terms_accepted)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    form.update(|f| f.edit(|v| v.terms_accepted = checked));
                                }
                            />
                            <span>
                                "I agree to the "
                                <a href="/terms" target="_blank" rel="noopener noreferrer">
                                    "Terms and Conditions"
                                </a>
                            </span>
                        </label>
                        <p class="form-field__description">"You must accept our terms and conditions to proceed."</p>
                        {move || {
                            form.with(|f| f.field_error(Field::TermsAccepted))
                                .map(|message| view! { <p class="form-field__error" role="alert">{message}</p> })
                        }}
                    </div>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || submitting.get()>
                        {move || submit_label(submitting.get())}
                    </button>
                </form>
            </AuthFormCard>
        </PageShell>
    }
}

/// Announce the new account and schedule the trip to the login page. The
/// toast goes up immediately; navigation waits so it can be read.
pub(crate) fn registration_outcome(
    result: Result<(), AuthError>,
    config: &MockConfig,
    toasts: &mut ToastState,
) -> SubmitOutcome {
    match result {
        Ok(()) => {
            toasts.success(SUCCESS_TITLE, Some(SUCCESS_DESCRIPTION));
            SubmitOutcome::Redirect {
                to: Page::Login,
                delay: config.registration_redirect_delay,
            }
        }
        Err(err) => SubmitOutcome::Stay(err.banner_titled(FAILED_TITLE)),
    }
}

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Creating Account..." } else { "Create Account" }
}
