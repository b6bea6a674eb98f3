//! # tgbot-site
//!
//! Leptos SSR renderer for the Telegram AI Bot landing page.
//!
//! The site is two pages wrapped in one root layout. Everything is static:
//! the layout publishes fixed metadata, the home page shows a fixed heading,
//! tagline, feature list and command list. Rendering is pure and
//! deterministic, so the same call always yields the same bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use tgbot_site::{render_document, Page};
//!
//! let html = render_document(Page::Home);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("<title>Telegram AI Bot</title>"));
//! ```
//!
//! ## Architecture
//!
//! - [`metadata`] - title, description and document language
//! - [`content`] - page copy as typed static tables
//! - [`components`] - Leptos components (`RootLayout`, `HomePage`, ...)
//! - [`styles`] - inline CSS
//! - [`export`] - writes the rendered pages to a directory
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through the `RenderHtml` trait. No reactive runtime or
//! hydration is involved:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let html: String = view! { <HomePage /> }.to_html();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod error;
pub mod export;
pub mod metadata;
pub mod styles;

pub use content::PageContent;
pub use error::SiteError;
pub use export::{ExportReport, ExportedFile, export_site};
pub use metadata::{DOCUMENT_LANG, METADATA, Metadata};

use components::{HomePage, NotFoundPage, RootLayout};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// The landing page
    Home,
    /// Answer for paths without a page
    NotFound,
}

impl Page {
    /// Every page, in export order.
    pub const ALL: [Page; 2] = [Page::Home, Page::NotFound];

    /// Resolve a request path to a page.
    ///
    /// `/` and `/index.html` are the home page; anything else is not found.
    /// A query string or fragment is ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path {
            "" | "/" | "/index.html" => Page::Home,
            _ => Page::NotFound,
        }
    }

    /// File name used by the static export.
    pub fn file_name(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::NotFound => "404.html",
        }
    }

    fn view(self) -> AnyView {
        match self {
            Page::Home => view! { <HomePage /> }.into_any(),
            Page::NotFound => view! { <NotFoundPage /> }.into_any(),
        }
    }
}

/// Render a complete HTML document for `page`.
///
/// The page is nested inside [`RootLayout`], so the result carries the
/// site metadata in its head.
///
/// # Example
///
/// ```rust
/// use tgbot_site::{render_document, Page};
///
/// let html = render_document(Page::NotFound);
/// assert!(html.contains("404"));
/// ```
pub fn render_document(page: Page) -> String {
    let doc = view! {
        <RootLayout>{page.view()}</RootLayout>
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the landing page document.
pub fn render_home() -> String {
    render_document(Page::Home)
}

/// Render any view to HTML without the document shell.
pub fn render_fragment<V: RenderHtml>(view: V) -> String {
    view.to_html()
}

/// The home page copy as pretty-printed JSON.
pub fn page_content_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&PageContent::home())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_home_document() {
        let html = render_home();

        assert!(html.starts_with("<!DOCTYPE html>\n<html"));
        assert!(html.contains("<title>Telegram AI Bot</title>"));
        assert_eq!(html.matches("🤖 Telegram AI Bot").count(), 1);
        assert_eq!(html.matches("<li").count(), 13);
    }

    #[test]
    fn home_sits_inside_body() {
        let html = render_home();
        let body_start = html.find("<body").unwrap();
        let body_end = html.rfind("</body>").unwrap();
        let main = html.find("<main").unwrap();

        assert!(body_start < main && main < body_end);
        assert_eq!(html.matches("<main").count(), 1);
    }

    #[test]
    fn rendering_is_idempotent() {
        assert_eq!(render_home(), render_home());
        assert_eq!(
            render_document(Page::NotFound),
            render_document(Page::NotFound)
        );
    }

    #[test]
    fn not_found_keeps_layout_metadata() {
        let html = render_document(Page::NotFound);
        assert!(html.contains("<title>Telegram AI Bot</title>"));
        assert!(html.contains("Страница не найдена"));
        assert!(!html.contains("Возможности:"));
    }

    #[test]
    fn resolves_paths_to_pages() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/index.html"), Page::Home);
        assert_eq!(Page::from_path("/?utm_source=tg"), Page::Home);
        assert_eq!(Page::from_path("/#commands"), Page::Home);
        assert_eq!(Page::from_path("/about"), Page::NotFound);
        assert_eq!(Page::from_path("/index.htm"), Page::NotFound);
    }

    #[test]
    fn fragment_has_no_shell() {
        use components::FeatureList;

        let html = render_fragment(view! { <FeatureList /> });
        assert!(!html.contains("<html"));
        assert!(html.contains("Чтение файлов кода"));
    }

    #[test]
    fn content_json_round_trips_literals() {
        let json = page_content_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value["metadata"]["description"],
            "AI-powered Telegram bot with memory and internet access"
        );
        assert_eq!(value["commands"][5]["command"], "/help");
    }
}
