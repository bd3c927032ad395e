//! Inline error banner. Messages are rendered as text, never as markup.

use leptos::prelude::*;

/// Renders an error banner. The message is reactive so a banner can track a
/// validation error as it changes.
#[component]
pub fn Alert(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <div
            class="mt-2 rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200"
            role="alert"
        >
            {move || message.get()}
        </div>
    }
}
