//! Static export - writes every page of the site into a directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, SiteError};
use crate::{Page, render_document};

/// One file written by [`export_site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    /// Destination path
    pub path: PathBuf,
    /// Bytes written
    pub bytes: usize,
}

/// Summary of an export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Files in the order they were written
    pub files: Vec<ExportedFile>,
}

impl ExportReport {
    /// Total bytes written across all files.
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

/// Render every page and write it into `out_dir`, creating the directory
/// if needed. Existing files with the same names are overwritten.
///
/// # Example
///
/// ```rust,no_run
/// let report = tgbot_site::export_site("dist").unwrap();
/// println!("{} bytes", report.total_bytes());
/// ```
pub fn export_site(out_dir: impl AsRef<Path>) -> Result<ExportReport> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir).map_err(|source| SiteError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut report = ExportReport::default();
    for page in Page::ALL {
        let path = out_dir.join(page.file_name());
        let html = render_document(page);
        fs::write(&path, &html).map_err(|source| SiteError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = html.len(), "page written");
        report.files.push(ExportedFile {
            path,
            bytes: html.len(),
        });
    }

    info!(
        dir = %out_dir.display(),
        files = report.files.len(),
        bytes = report.total_bytes(),
        "site exported"
    );
    Ok(report)
}
