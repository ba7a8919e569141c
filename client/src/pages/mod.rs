//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its `FormState` signal and submit orchestration, and
//! delegates rendering details to `components`. Once a mock call resolves, a
//! page reduces the result to a [`SubmitOutcome`] with a pure function
//! (unit-tested natively), then [`follow`] applies it in the browser.

pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod not_found;
pub mod registration;
pub mod reset_password;


use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::forms::Schema;
use crate::routes::Page;
use crate::state::form::{Banner, FormState};
use crate::util::latency;

/// What a page does once its mock call has resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Leave for `to` after `delay`.
    Redirect { to: Page, delay: Duration },
    /// Stay and show a page-level banner.
    Stay(Banner),
}

impl SubmitOutcome {
    #[must_use]
    pub fn redirect_now(to: Page) -> Self {
        SubmitOutcome::Redirect {
            to,
            delay: Duration::ZERO,
        }
    }

    /// Destination, if this outcome navigates.
    #[must_use]
    pub fn destination(&self) -> Option<Page> {
        match self {
            SubmitOutcome::Redirect { to, .. } => Some(*to),
            SubmitOutcome::Stay(_) => None,
        }
    }
}

/// Record `outcome` on the form. A form that is about to redirect stays
/// `submitting`, so its button remains disabled until the page is left.
pub fn settle<V: Schema>(form: &mut FormState<V>, outcome: &SubmitOutcome) {
    if let SubmitOutcome::Stay(banner) = outcome {
        form.finish_submit();
        form.set_banner(banner.clone());
    }
}

/// Apply `outcome`: settle the form, then wait and navigate if redirecting.
///
/// The form may already be unmounted when a delayed redirect fires, so every
/// signal write here tolerates disposal.
pub async fn follow<V, N>(outcome: SubmitOutcome, form: RwSignal<FormState<V>>, navigate: N)
where
    V: Schema + Send + Sync + 'static,
    N: Fn(&str, NavigateOptions),
{
    let _ = form.try_update(|f| settle(f, &outcome));
    if let SubmitOutcome::Redirect { to, delay } = outcome {
        latency::simulate(delay).await;
        navigate(to.path(), NavigateOptions::default());
    }
}
