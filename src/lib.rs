//! # pdf2img
//!
//! Batch-convert every PDF under a directory tree into raster images.
//!
//! A single-page PDF becomes one image in the output root. A multi-page PDF
//! becomes a folder named after the document, holding one numbered image per
//! page. Rendering is delegated to [pdfium](https://pdfium.googlesource.com/pdfium/)
//! through `pdfium-render`; this crate walks the tree, names the files and
//! keeps one bad PDF from stopping the batch.
//!
//! ## Pipeline Overview
//!
//! ```text
//! directory
//!  │
//!  ├─ 1. Discover  walk top-down, skipping the output root
//!  ├─ 2. Render    rasterise every page via pdfium at the configured DPI
//!  ├─ 3. Place     <out>/doc.png  or  <out>/doc/doc_page_N.png
//!  └─ 4. Report    per-document status + BatchReport
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2img::{process_directory, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::builder().format("PNG").dpi(200).build()?;
//!     let report = process_directory("scans", "scans/converted_images", &config)?;
//!     for failed in &report.failed {
//!         eprintln!("{}: {}", failed.source.display(), failed.error);
//!     }
//!     println!("{} pages written", report.total_pages());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2img` binary (clap + anyhow + tracing-subscriber + indicatif) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod engine;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, DEFAULT_DPI, DEFAULT_FORMAT};
pub use convert::{
    convert_pdf_to_images, default_output_dir, pages_label, process_directory,
    process_directory_with,
};
pub use error::{DocumentError, Pdf2ImgError};
pub use output::{BatchReport, ConvertedDocument, FailedDocument, Placement};
pub use pipeline::discover::is_pdf;
pub use pipeline::render::{PageRenderer, PdfiumRenderer, UnavailableRenderer};
pub use progress::{BatchProgressCallback, NoopProgressCallback, ProgressCallback};
