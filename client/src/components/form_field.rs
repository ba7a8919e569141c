//! Labelled form row with inline validation message, plus a password input
//! with a visibility toggle.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::prelude::*;

use crate::forms::Field;

/// Label, input (children), optional helper text, and inline error.
#[component]
pub fn FormField(
    field: Field,
    label: &'static str,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] description: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-field" class:form-field--invalid=move || error.get().is_some()>
            <label class="form-field__label" for=field.name()>{label}</label>
            {children()}
            {description.map(|text| view! { <p class="form-field__description">{text}</p> })}
            {move || error.get().map(|message| view! { <p class="form-field__error" role="alert">{message}</p> })}
        </div>
    }
}

/// Password input that can be switched to plain text.
#[component]
pub fn PasswordInput(
    field: Field,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="password-input">
            <input
                id=field.name()
                name=field.name()
                class="input password-input__field"
                type=move || input_type(visible.get())
                placeholder="••••••••"
                autocomplete=autocomplete.unwrap_or("current-password")
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <button
                class="password-input__toggle"
                type="button"
                aria-label=move || toggle_label(visible.get())
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "Hide" } else { "Show" }}
            </button>
        </div>
    }
}

fn input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

fn toggle_label(visible: bool) -> &'static str {
    if visible { "Hide password" } else { "Show password" }
}
