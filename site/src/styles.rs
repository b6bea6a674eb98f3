//! Global CSS for the site.
//!
//! The markup uses utility class names (`flex`, `p-24`, `list-disc`, ...).
//! This stylesheet defines exactly the utilities the pages use, so the
//! rendered document is self-contained and needs no asset pipeline.
//!
//! # Customization
//!
//! ```rust
//! use tgbot_site::styles::GLOBAL_CSS;
//!
//! let my_css = "main { background: #000; }";
//! let combined = format!("{}\n{}", GLOBAL_CSS, my_css);
//! assert!(combined.contains(".list-disc"));
//! ```

/// Complete CSS inlined into the document head.
pub const GLOBAL_CSS: &str = r#"
:root {
    --foreground-rgb: 0, 0, 0;
    --background-rgb: 255, 255, 255;
    --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
}

@media (prefers-color-scheme: dark) {
    :root {
        --foreground-rgb: 255, 255, 255;
        --background-rgb: 0, 0, 0;
    }
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: rgb(var(--foreground-rgb));
    background: rgb(var(--background-rgb));
    line-height: 1.5;
}

h1, h2, p, ul {
    margin: 0;
}

ul {
    padding: 0;
}

code {
    font-family: var(--font-mono);
    font-size: 0.95em;
}

a {
    color: inherit;
}

/* Layout */
.flex { display: flex; }
.flex-col { flex-direction: column; }
.items-center { align-items: center; }
.justify-center { justify-content: center; }
.min-h-screen { min-height: 100vh; }
.max-w-2xl { max-width: 42rem; }
.mx-auto { margin-left: auto; margin-right: auto; }

/* Spacing */
.p-24 { padding: 6rem; }
.mb-4 { margin-bottom: 1rem; }
.mb-8 { margin-bottom: 2rem; }
.mt-8 { margin-top: 2rem; }
.space-y-2 > * + * { margin-top: 0.5rem; }

/* Typography */
.text-center { text-align: center; }
.text-left { text-align: left; }
.text-xl { font-size: 1.25rem; line-height: 1.75rem; }
.text-2xl { font-size: 1.5rem; line-height: 2rem; }
.text-4xl { font-size: 2.25rem; line-height: 2.5rem; }
.font-semibold { font-weight: 600; }
.font-bold { font-weight: 700; }

/* Lists */
.list-disc { list-style-type: disc; }
.list-inside { list-style-position: inside; }

@media (max-width: 640px) {
    .p-24 { padding: 2rem 1rem; }
}
"#;
