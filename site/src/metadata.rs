//! Document metadata published by the root layout.

use serde::Serialize;

/// Language attribute of the `<html>` element.
pub const DOCUMENT_LANG: &str = "ru";

/// Title and description placed into the document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// `<title>` text
    pub title: &'static str,
    /// `<meta name="description">` content
    pub description: &'static str,
}

/// Metadata shared by every page of the site.
pub const METADATA: Metadata = Metadata {
    title: "Telegram AI Bot",
    description: "AI-powered Telegram bot with memory and internet access",
};
