//! Home page - heading, tagline, features and bot commands.

use crate::content::{COMMANDS, COMMANDS_TITLE, FEATURES, FEATURES_TITLE, HEADING, TAGLINE};
use leptos::prelude::*;

/// The landing page view.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="flex min-h-screen flex-col items-center justify-center p-24">
            <div class="text-center">
                <h1 class="text-4xl font-bold mb-4">{HEADING}</h1>
                <p class="text-xl mb-8">{TAGLINE}</p>
                <div class="max-w-2xl mx-auto text-left">
                    <h2 class="text-2xl font-semibold mb-4">{FEATURES_TITLE}</h2>
                    <FeatureList />
                    <h2 class="text-2xl font-semibold mt-8 mb-4">{COMMANDS_TITLE}</h2>
                    <CommandList />
                </div>
            </div>
        </main>
    }
}

/// Bulleted list of features.
#[component]
pub fn FeatureList() -> impl IntoView {
    view! {
        <ul class="list-disc list-inside space-y-2">
            {FEATURES
                .iter()
                .map(|feature| view! { <li>{feature.label()}</li> })
                .collect::<Vec<_>>()}
        </ul>
    }
}

/// Bulleted list of slash commands, each with its description.
#[component]
pub fn CommandList() -> impl IntoView {
    view! {
        <ul class="list-disc list-inside space-y-2">
            {COMMANDS
                .iter()
                .map(|cmd| {
                    let rest = format!(" - {}", cmd.description);
                    view! {
                        <li>
                            <code>{cmd.command}</code>
                            {rest}
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}
