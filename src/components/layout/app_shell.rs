//! Shared page frame: header with the application title, the content
//! container and a footer with build metadata.

use crate::app_lib::build_info;
use leptos::prelude::*;

/// Wraps routes with a header, main content container and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let footer = format!(
        "v{} · {}",
        build_info::version(),
        build_info::git_commit_hash()
    );

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-700 dark:bg-gray-900">
                <div class="max-w-screen-xl flex items-center mx-auto p-4">
                    <h1 class="text-2xl font-semibold whitespace-nowrap text-gray-900 dark:text-white">
                        "API de Usuarios"
                    </h1>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <footer class="py-4 text-center text-xs text-gray-400 dark:text-gray-500 font-mono">
                {footer}
            </footer>
        </div>
    }
}
