//! # tgbot-web
//!
//! Hosts the Telegram AI Bot landing page.
//!
//! ## Usage
//!
//! ```bash
//! # Print the home page
//! tgbot-web render
//!
//! # Page copy as JSON
//! tgbot-web render --format json
//!
//! # Write index.html and 404.html
//! tgbot-web export --out dist
//!
//! # Serve over HTTP
//! tgbot-web serve --bind 0.0.0.0:3000
//! ```

mod config;
mod server;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tgbot_site::{Page, export_site, page_content_json, render_document};
use tracing::{debug, info};

use config::{Overrides, Settings};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "tgbot-web")]
#[command(about = "Render, export and serve the Telegram AI Bot landing page")]
#[command(version)]
struct Args {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a rendered page to stdout
    Render {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
        /// Page to render
        #[arg(long, value_enum, default_value_t = PageArg::Home)]
        page: PageArg,
    },
    /// Write every page into a directory
    Export {
        /// Output directory (default: dist)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Serve the site over HTTP
    Serve {
        /// Listen address (default: 127.0.0.1:3000)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PageArg {
    Home,
    NotFound,
}

impl From<PageArg> for Page {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Home => Page::Home,
            PageArg::NotFound => Page::NotFound,
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

fn render(format: Format, page: PageArg) -> Result<String> {
    match format {
        Format::Html => Ok(render_document(page.into())),
        Format::Json => {
            // only the home page has structured copy
            if page != PageArg::Home {
                bail!("--format json only supports --page home");
            }
            page_content_json().context("failed to serialize page content")
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config_path = args.config.as_deref();

    match args.command {
        Command::Render { format, page } => {
            debug!(?format, ?page, "rendering");
            let out = render(format, page)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{out}").context("failed to write to stdout")?;
        }
        Command::Export { out } => {
            let settings = Settings::load(
                config_path,
                Overrides {
                    out_dir: out,
                    ..Default::default()
                },
            )?;
            let report = export_site(&settings.out_dir)?;
            for file in &report.files {
                info!(path = %file.path.display(), bytes = file.bytes, "wrote");
            }
        }
        Command::Serve { bind } => {
            let settings = Settings::load(
                config_path,
                Overrides {
                    bind,
                    ..Default::default()
                },
            )?;
            server::serve(settings.bind).await?;
        }
    }
    Ok(())
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    debug!("tgbot-web v{}", env!("CARGO_PKG_VERSION"));

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[tgbot-web] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
