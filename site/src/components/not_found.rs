//! Page for unknown paths.

use leptos::prelude::*;

/// Shown by the server for any path without a page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="flex min-h-screen flex-col items-center justify-center p-24">
            <div class="text-center">
                <h1 class="text-4xl font-bold mb-4">"404"</h1>
                <p class="text-xl mb-8">"Страница не найдена"</p>
                <a href="/">"На главную"</a>
            </div>
        </main>
    }
}
