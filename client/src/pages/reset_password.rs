//! New-password page reached from the emailed link (`?token=...`).

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use super::{SubmitOutcome, follow};
use crate::components::alert_banner::AlertBanner;
use crate::components::auth_form_card::AuthFormCard;
use crate::components::form_field::{FormField, PasswordInput};
use crate::components::page_shell::PageShell;
use crate::config::MockConfig;
use crate::error::AuthError;
use crate::forms::{Field, ResetPasswordForm};
use crate::net::mock_api;
use crate::routes::Page;
use crate::state::form::FormState;
use crate::state::toast::ToastState;

pub const RESET_TITLE: &str = "Password has been reset successfully! Please login with your new password.";
pub const FAILED_TITLE: &str = "Password Reset Failed";

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = use_context::<MockConfig>().unwrap_or_default();
    let navigate = use_navigate();
    let token = use_query_map().with_untracked(|query| reset_token(query.get("token")));
    let form = RwSignal::new(FormState::new(ResetPasswordForm {
        token,
        ..ResetPasswordForm::default()
    }));
    let submitting = Signal::derive(move || form.with(|f| f.submitting));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = form.try_update(FormState::begin_submit).flatten() else {
            return;
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = mock_api::reset_password(&config, &input).await;
            let Some(outcome) = toasts.try_update(|t| reset_outcome(result, t)) else {
                return;
            };
            follow(outcome, form, navigate).await;
        });
    };

    view! {
        <PageShell centered=true>
            <AuthFormCard
                title="Reset Your Password"
                description="Enter your new password below. Make sure it's strong and memorable."
                footer=|| {
                    view! {
                        <p class="auth-card__footer-text">
                            "Remember your password? "
                            <a href=Page::Login.path()>"Login here"</a>
                        </p>
                    }
                }
            >
                <form class="auth-form" novalidate=true on:submit=on_submit>
                    <AlertBanner banner=Signal::derive(move || form.with(|f| f.banner.clone()))/>
                    <FormField
                        field=Field::Password
                        label="New Password"
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
                        label="Confirm New Password"
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
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || submitting.get()>
                        {move || submit_label(submitting.get())}
                    </button>
                </form>
            </AuthFormCard>
        </PageShell>
    }
}

/// Blank tokens are treated as absent.
pub(crate) fn reset_token(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.trim().is_empty())
}

pub(crate) fn reset_outcome(result: Result<(), AuthError>, toasts: &mut ToastState) -> SubmitOutcome {
    match result {
        Ok(()) => {
            toasts.success(RESET_TITLE, None);
            SubmitOutcome::redirect_now(Page::Login)
        }
        Err(err) => SubmitOutcome::Stay(err.banner_titled(FAILED_TITLE)),
    }
}

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Resetting Password..." } else { "Reset Password" }
}
