//! Dashboard page shown after a successful login.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no route guard: the page renders for anyone who reaches
//! `/dashboard`. The only state it owns is a quick-notes draft kept in local
//! storage, separate from the auth flag.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::page_shell::PageShell;
use crate::config::DASHBOARD_NOTES_KEY;
use crate::routes::Page;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::storage::{BrowserStorage, KeyValueStore, load_json, save_json};

/// Placeholder identity; the mock backend has no user records.
pub const USER_NAME: &str = "Authenticated User";
pub const NOTES_SAVED: &str = "Notes saved.";

/// Persisted quick-notes draft.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardNotes {
    pub text: String,
}

impl DashboardNotes {
    /// Saved draft, or empty when nothing (or garbage) is stored.
    #[must_use]
    pub fn load(store: &impl KeyValueStore) -> Self {
        load_json(store, DASHBOARD_NOTES_KEY).unwrap_or_default()
    }

    pub fn save(&self, store: &impl KeyValueStore) {
        save_json(store, DASHBOARD_NOTES_KEY, self);
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let notes = RwSignal::new(String::new());

    // Local storage is only readable after hydration.
    Effect::new(move || {
        notes.set(DashboardNotes::load(&BrowserStorage).text);
    });

    let on_save = move |_| {
        let draft = DashboardNotes {
            text: notes.get_untracked(),
        };
        draft.save(&BrowserStorage);
        log::debug!("dashboard notes saved ({} chars)", draft.text.chars().count());
        toasts.update(|t| {
            t.push(ToastKind::Info, NOTES_SAVED, None);
        });
    };

    view! {
        <PageShell>
            <section class="dashboard">
                <div class="card dashboard__welcome">
                    <h1 class="dashboard__title">{welcome_heading()}</h1>
                    <p class="dashboard__subtitle">"You have successfully logged in to your dashboard."</p>
                    <p>"This is your main application area. More features and content will be available here."</p>
                </div>
                <div class="card dashboard__notes">
                    <h2 class="dashboard__section-title">"Quick Actions & Notes"</h2>
                    <label class="form-field__label" for="quickNotes">"Your Notes"</label>
                    <textarea
                        id="quickNotes"
                        class="input dashboard__textarea"
                        rows="5"
                        placeholder="Jot down any important notes or reminders here..."
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="button" on:click=on_save>
                        "Save Notes"
                    </button>
                </div>
                <div class="dashboard__leave">
                    <p class="dashboard__subtitle">"Need to go somewhere else?"</p>
                    <a class="btn btn--outline" href=Page::Login.path()>"Back to Login Page"</a>
                </div>
            </section>
        </PageShell>
    }
}

fn welcome_heading() -> String {
    format!("Welcome, {USER_NAME}!")
}
