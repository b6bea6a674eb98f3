//! Leptos UI components for the site.
//!
//! Every component is a `#[component]` function rendered to static HTML
//! through Leptos SSR. No hydration, no reactive state.
//!
//! # Component Hierarchy
//!
//! ```text
//! RootLayout
//! ├── DocumentHead (title, description, inline CSS)
//! └── <body>
//!     ├── HomePage
//!     │   ├── FeatureList
//!     │   └── CommandList
//!     └── NotFoundPage
//! ```
//!
//! # Usage
//!
//! Pages are normally rendered via [`crate::render_document`], but the
//! components compose directly:
//!
//! ```rust
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//! use tgbot_site::components::{HomePage, RootLayout};
//!
//! let html = view! { <RootLayout><HomePage /></RootLayout> }.to_html();
//! assert!(html.contains("Telegram AI Bot"));
//! ```

mod home;
mod layout;
mod not_found;

pub use home::{CommandList, FeatureList, HomePage};
pub use layout::{DocumentHead, RootLayout};
pub use not_found::NotFoundPage;
