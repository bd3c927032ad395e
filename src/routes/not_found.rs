//! Fallback page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-9xl font-black text-gray-100 dark:text-gray-800 select-none">
                    "404"
                </h1>
                <p class="mt-4 text-gray-500 dark:text-gray-400 max-w-sm mx-auto">
                    "La página que buscas no existe."
                </p>
                <A
                    href="/"
                    {..}
                    class="mt-6 inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800 transition-all"
                >
                    "Volver a usuarios"
                </A>
            </div>
        </AppShell>
    }
}
