//! PDF rasterisation: render every page of a document to `DynamicImage`.
//!
//! The rest of the pipeline only sees the [`PageRenderer`] trait, so the
//! batch logic can be driven by pdfium in production and by a fake renderer
//! in tests.
//!
//! ## DPI
//!
//! PDF geometry is measured in points (1/72 inch). Rendering at `dpi` scales
//! each page by `dpi / 72`, so a US-Letter page at 200 DPI comes out at
//! 1700 × 2200 px.

use crate::error::{DocumentError, Pdf2ImgError};
use crate::engine;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// The external rendering capability: PDF file + DPI → ordered page images.
pub trait PageRenderer {
    /// Rasterise every page of `pdf_path`, in page order.
    fn render_pages(&self, pdf_path: &Path, dpi: u32) -> Result<Vec<DynamicImage>, DocumentError>;
}

/// Scale factor applied to page dimensions (in points) for `dpi`.
pub fn scale_for_dpi(dpi: u32) -> f32 {
    dpi as f32 / 72.0
}

/// [`PageRenderer`] backed by a bound pdfium library.
pub struct PdfiumRenderer {
    pdfium: Pdfium,
}

impl PdfiumRenderer {
    pub fn new(pdfium: Pdfium) -> Self {
        Self { pdfium }
    }

    /// Locate and bind the pdfium library (see [`crate::engine`]).
    pub fn bind() -> Result<Self, Pdf2ImgError> {
        engine::bind_pdfium().map(Self::new)
    }
}

/// Stand-in used when pdfium could not be bound: every document fails with
/// [`DocumentError::EngineUnavailable`] and the batch still runs to the end.
#[derive(Debug, Clone)]
pub struct UnavailableRenderer {
    reason: String,
}

impl UnavailableRenderer {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PageRenderer for UnavailableRenderer {
    fn render_pages(&self, _pdf_path: &Path, _dpi: u32) -> Result<Vec<DynamicImage>, DocumentError> {
        Err(DocumentError::EngineUnavailable {
            detail: self.reason.clone(),
        })
    }
}

impl PageRenderer for PdfiumRenderer {
    fn render_pages(&self, pdf_path: &Path, dpi: u32) -> Result<Vec<DynamicImage>, DocumentError> {
        let document = self
            .pdfium
            .load_pdf_from_file(pdf_path, None)
            .map_err(|e| {
                let err_str = format!("{:?}", e);
                if err_str.contains("Password") || err_str.contains("password") {
                    DocumentError::PasswordRequired {
                        path: pdf_path.to_path_buf(),
                    }
                } else {
                    DocumentError::LoadFailed {
                        path: pdf_path.to_path_buf(),
                        detail: err_str,
                    }
                }
            })?;

        let pages = document.pages();
        let total_pages = pages.len() as usize;
        info!("PDF loaded: {} ({} pages)", pdf_path.display(), total_pages);

        let render_config = PdfRenderConfig::new().scale_page_by_factor(scale_for_dpi(dpi));

        let mut images = Vec::with_capacity(total_pages);
        for (idx, page) in pages.iter().enumerate() {
            let bitmap = page.render_with_config(&render_config).map_err(|e| {
                DocumentError::RasterisationFailed {
                    page: idx + 1,
                    detail: format!("{:?}", e),
                }
            })?;

            let image = bitmap.as_image();
            debug!(
                "Rendered page {} → {}x{} px",
                idx + 1,
                image.width(),
                image.height()
            );
            images.push(image);
        }

        Ok(images)
    }
}
