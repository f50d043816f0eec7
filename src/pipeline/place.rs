//! Placement: decide where each rendered page goes and write it there.
//!
//! ```text
//! doc.pdf    (1 page)  ──▶ <out>/doc.png
//! report.pdf (3 pages) ──▶ <out>/report/report_page_1.png
//!                          <out>/report/report_page_2.png
//!                          <out>/report/report_page_3.png
//! ```
//!
//! Existing files with the same names are overwritten.

use crate::error::DocumentError;
use crate::output::Placement;
use image::{DynamicImage, ImageFormat};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Filename of `pdf_path` without its extension.
pub fn document_basename(pdf_path: &Path) -> String {
    pdf_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Compute output paths for a document with `page_count` pages.
///
/// `page_count` must be at least 1.
pub fn plan_placement(output_dir: &Path, basename: &str, page_count: usize, ext: &str) -> Placement {
    if page_count == 1 {
        return Placement::SingleFile(output_dir.join(format!("{basename}.{ext}")));
    }

    let dir = output_dir.join(basename);
    let pages = (1..=page_count)
        .map(|n| dir.join(format!("{basename}_page_{n}.{ext}")))
        .collect();
    Placement::PageDirectory { dir, pages }
}

/// Write `images` to the paths in `placement`, creating the page folder
/// if needed. Stops at the first failure.
pub fn write_pages(
    images: &[DynamicImage],
    placement: &Placement,
    format: ImageFormat,
) -> Result<(), DocumentError> {
    if let Placement::PageDirectory { dir, .. } = placement {
        fs::create_dir_all(dir).map_err(|e| DocumentError::CreateDirFailed {
            path: dir.clone(),
            detail: e.to_string(),
        })?;
    }

    for (image, path) in images.iter().zip(placement.files()) {
        encodable(image, format)
            .save_with_format(path, format)
            .map_err(|e| DocumentError::WriteFailed {
                path: path.clone(),
                detail: e.to_string(),
            })?;
        debug!("Wrote {}", path.display());
    }

    Ok(())
}

/// pdfium hands back RGBA bitmaps; JPEG has no alpha channel.
fn encodable(image: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    if format == ImageFormat::Jpeg && image.color().has_alpha() {
        Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8()))
    } else {
        Cow::Borrowed(image)
    }
}
