//! Pipeline stages for batch PDF-to-image conversion.
//!
//! Each submodule implements exactly one step, so each is testable on its
//! own and the rendering backend can be swapped without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! discover ──▶ render ──▶ place
//! (walk tree)  (pdfium)   (write files)
//! ```
//!
//! 1. [`discover`] — list PDFs top-down, never entering the output root
//! 2. [`render`]   — rasterise every page at the configured DPI
//! 3. [`place`]    — single image at the root, or a numbered page folder

pub mod discover;
pub mod place;
pub mod render;
