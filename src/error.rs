//! Error types for the pdf2img library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`Pdf2ImgError`] — **Fatal**: the batch cannot run at all (output root
//!   cannot be created, invalid configuration). Returned as
//!   `Err(Pdf2ImgError)` from [`crate::process_directory`].
//!
//! * [`DocumentError`] — **Non-fatal**: a single PDF failed (corrupt file,
//!   unsupported format, write error, no pdfium library) and the batch
//!   carries on with the next one.
//!   Stored inside [`crate::output::FailedDocument`] so callers can inspect
//!   partial success rather than losing the whole run to one bad file.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the pdf2img library.
///
/// Per-document failures use [`DocumentError`] and are collected in
/// [`crate::output::BatchReport`] rather than propagated here.
#[derive(Debug, Error)]
pub enum Pdf2ImgError {
    /// The output root did not exist and could not be created.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Could not bind to a pdfium library. [`crate::process_directory`]
    /// logs this once and fails each document with
    /// [`DocumentError::EngineUnavailable`] instead of returning it.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
Download a prebuilt pdfium from https://github.com/bblanchon/pdfium-binaries\n\
and either:\n\
  • set PDFIUM_LIB_PATH=/path/to/libpdfium (file or containing directory),\n\
  • place the library next to the pdf2img executable, or\n\
  • install it on the system library search path.\n"
    )]
    PdfiumBindingFailed(String),
}

/// A non-fatal error for a single PDF document.
///
/// The batch logs it, records it and moves on to the next file.
#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    /// No pdfium library could be loaded for this run.
    #[error("pdfium is not available: {detail}")]
    EngineUnavailable { detail: String },

    /// The requested image format cannot be written by this build.
    #[error("unsupported image format '{format}'")]
    UnsupportedFormat { format: String },

    /// pdfium could not open the file (missing, unreadable or corrupt).
    #[error("failed to load '{path}': {detail}")]
    LoadFailed { path: PathBuf, detail: String },

    /// The PDF is encrypted; passwords are not supported.
    #[error("'{path}' is encrypted and requires a password")]
    PasswordRequired { path: PathBuf },

    /// The document opened but contains no pages.
    #[error("'{path}' contains no pages")]
    NoPages { path: PathBuf },

    /// pdfium returned an error for a specific page.
    #[error("rasterisation failed for page {page}: {detail}")]
    RasterisationFailed { page: usize, detail: String },

    /// The per-document page folder could not be created.
    #[error("failed to create directory '{path}': {detail}")]
    CreateDirFailed { path: PathBuf, detail: String },

    /// Encoding or writing an image file failed.
    #[error("failed to write '{path}': {detail}")]
    WriteFailed { path: PathBuf, detail: String },
}
