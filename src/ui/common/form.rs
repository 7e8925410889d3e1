use crate::core::{Field, FormController};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

const INPUT_CLASS: &str = "w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
    text-theme-primary placeholder-theme-tertiary
    focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
    transition-colors";

/// Input bound to one field of a form controller
///
/// Typing updates and re-validates the field; leaving it marks it touched.
/// The error line only shows once the field has been touched.
#[component]
pub fn FormField(
    /// Controller owning the field
    form: RwSignal<FormController>,
    /// Which field this input edits
    field: Field,
    /// Input type (text, email, password)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    let error = move || form.with(|f| f.visible_error(field));

    view! {
        <div>
            <label for=field.name() class="block text-sm font-medium text-theme-primary mb-1">
                {field.label()}
            </label>
            <input
                type=input_type
                id=field.name()
                name=field.name()
                autocomplete=autocomplete
                placeholder=placeholder
                class=INPUT_CLASS
                class:border-red-500=move || error().is_some()
                prop:value=move || form.with(|f| f.value(field).to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                on:blur=move |_| form.update(|f| f.touch(field))
            />
            <FieldError message=Signal::derive(error) />
        </div>
    }
}

/// Password input with a show/hide toggle
#[component]
pub fn PasswordField(
    form: RwSignal<FormController>,
    field: Field,
    #[prop(default = "current-password")]
    autocomplete: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    let show_password = RwSignal::new(false);
    let error = move || form.with(|f| f.visible_error(field));

    view! {
        <div>
            <label for=field.name() class="block text-sm font-medium text-theme-primary mb-1">
                {field.label()}
            </label>
            <div class="relative">
                <input
                    type=move || if show_password.get() { "text" } else { "password" }
                    id=field.name()
                    name=field.name()
                    autocomplete=autocomplete
                    placeholder=placeholder
                    class=format!("{INPUT_CLASS} pr-10")
                    class:border-red-500=move || error().is_some()
                    prop:value=move || form.with(|f| f.value(field).to_string())
                    on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                    on:blur=move |_| form.update(|f| f.touch(field))
                />
                <button
                    type="button"
                    aria-label="toggle password visibility"
                    class="absolute inset-y-0 right-0 pr-3 flex items-center text-theme-tertiary hover:text-theme-secondary"
                    on:click=move |_| show_password.update(|v| *v = !*v)
                >
                    {move || {
                        let icon = if show_password.get() { icons::EYE_CLOSED } else { icons::EYE };
                        view! { <Icon name=icon class="h-5 w-5" /> }
                    }}
                </button>
            </div>
            <FieldError message=Signal::derive(error) />
        </div>
    }
}

#[component]
fn FieldError(message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|err| {
            view! {
                <div class="mt-1 flex items-center gap-1 text-sm text-red-500">
                    <Icon name=icons::ALERT_CIRCLE class="h-4 w-4" />
                    <span>{err}</span>
                </div>
            }
        })
    }
}

/// Submit button that disables itself while the form is submitting
#[component]
pub fn SubmitButton(
    form: RwSignal<FormController>,
    /// Caption when idle
    label: &'static str,
    /// Caption while the submission is in flight
    pending_label: &'static str,
) -> impl IntoView {
    let submitting = move || form.with(FormController::is_submitting);

    view! {
        <button
            type="submit"
            class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                   text-white font-medium rounded-lg
                   focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-accent-primary
                   disabled:opacity-50 disabled:cursor-not-allowed
                   transition-colors"
            disabled=submitting
        >
            {move || {
                if submitting() {
                    view! {
                        <span class="flex items-center justify-center">
                            <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4" />
                            {pending_label}
                        </span>
                    }.into_any()
                } else {
                    view! { <span class="block">{label}</span> }.into_any()
                }
            }}
        </button>
    }
}
