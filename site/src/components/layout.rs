//! Root layout - the document shell wrapped around every page.

use crate::metadata::{DOCUMENT_LANG, METADATA};
use crate::styles::GLOBAL_CSS;
use leptos::prelude::*;

/// Document head carrying the site metadata and the inline stylesheet.
#[component]
pub fn DocumentHead() -> impl IntoView {
    view! {
        <head>
            <meta charset="utf-8" />
            <meta name="viewport" content="width=device-width, initial-scale=1" />
            <title>{METADATA.title}</title>
            <meta name="description" content={METADATA.description} />
            <style>{GLOBAL_CSS}</style>
        </head>
    }
}

/// The shell applied around every page.
///
/// Places `children` inside `<body>` exactly once.
#[component]
pub fn RootLayout(children: Children) -> impl IntoView {
    view! {
        <html lang={DOCUMENT_LANG}>
            <DocumentHead />
            <body>{children()}</body>
        </html>
    }
}
