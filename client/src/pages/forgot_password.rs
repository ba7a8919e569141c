//! Reset-link request page.
//!
//! The response is deliberately identical whether or not the address belongs
//! to an account, so the page never reveals which emails are registered.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::{SubmitOutcome, follow};
use crate::components::alert_banner::AlertBanner;
use crate::components::auth_form_card::AuthFormCard;
use crate::components::form_field::FormField;
use crate::components::page_shell::PageShell;
use crate::config::MockConfig;
use crate::error::AuthError;
use crate::forms::{Field, ForgotPasswordForm};
use crate::net::mock_api;
use crate::routes::Page;
use crate::state::form::FormState;
use crate::state::toast::ToastState;

pub const SENT_TITLE: &str = "If an account with that email exists, a password reset link has been sent.";
pub const SENT_DESCRIPTION: &str = "Please check your inbox (and spam folder).";
pub const FAILED_TITLE: &str = "Request Failed";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = use_context::<MockConfig>().unwrap_or_default();
    let navigate = use_navigate();
    let form = RwSignal::new(FormState::new(ForgotPasswordForm::default()));
    let submitting = Signal::derive(move || form.with(|f| f.submitting));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(FormState::begin_submit).flatten() else {
            return;
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = mock_api::request_password_reset(&config, &request).await;
            let Some(outcome) = toasts.try_update(|t| forgot_outcome(result, &config, t)) else {
                return;
            };
            follow(outcome, form, navigate).await;
        });
    };

    view! {
        <PageShell centered=true>
            <AuthFormCard
                title="Forgot Your Password?"
                description="No problem. Enter your email address below and we'll send you a link to reset your password."
                footer=|| {
                    view! {
                        <p class="auth-card__footer-text">
                            "Remember your password? "
                            <a href=Page::Login.path()>"Login"</a>
                        </p>
                    }
                }
            >
                <form class="auth-form" novalidate=true on:submit=on_submit>
                    <AlertBanner banner=Signal::derive(move || form.with(|f| f.banner.clone()))/>
                    <FormField
                        field=Field::Email
                        label="Email Address"
                        description="We'll send password reset instructions here."
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
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || submitting.get()>
                        {move || submit_label(submitting.get())}
                    </button>
                </form>
            </AuthFormCard>
        </PageShell>
    }
}

pub(crate) fn forgot_outcome(
    result: Result<(), AuthError>,
    config: &MockConfig,
    toasts: &mut ToastState,
) -> SubmitOutcome {
    match result {
        Ok(()) => {
            toasts.success(SENT_TITLE, Some(SENT_DESCRIPTION));
            SubmitOutcome::Redirect {
                to: Page::Login,
                delay: config.forgot_redirect_delay,
            }
        }
        Err(err) => SubmitOutcome::Stay(err.banner_titled(FAILED_TITLE)),
    }
}

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Sending..." } else { "Send Reset Link" }
}
