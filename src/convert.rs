//! Batch entry points: convert one PDF, or every PDF under a directory.
//!
//! Failures are split in two. Anything that goes wrong with a single
//! document comes back as a [`DocumentError`]; the batch logs it, records it
//! in the [`BatchReport`] and moves on. Only creating the output root can
//! stop a run; a missing pdfium library fails each document instead.

use crate::config::ConversionConfig;
use crate::error::{DocumentError, Pdf2ImgError};
use crate::output::{BatchReport, ConvertedDocument, FailedDocument};
use crate::pipeline::render::{PageRenderer, PdfiumRenderer, UnavailableRenderer};
use crate::pipeline::{discover, place};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, warn};

/// Convert one PDF into images under `output_dir`.
///
/// `output_dir` must already exist. One page is written as
/// `<output_dir>/<basename>.<ext>`; several pages go to
/// `<output_dir>/<basename>/<basename>_page_<n>.<ext>`.
///
/// Success and failure are both logged; the error is also returned so the
/// caller can decide whether to continue.
pub fn convert_pdf_to_images<R: PageRenderer + ?Sized>(
    renderer: &R,
    pdf_path: &Path,
    output_dir: &Path,
    config: &ConversionConfig,
) -> Result<ConvertedDocument, DocumentError> {
    match convert_document(renderer, pdf_path, output_dir, config) {
        Ok(doc) => {
            info!("Converted: {} ({})", pdf_path.display(), pages_label(doc.page_count));
            Ok(doc)
        }
        Err(e) => {
            warn!("Error converting PDF {}: {}", pdf_path.display(), e);
            Err(e)
        }
    }
}

fn convert_document<R: PageRenderer + ?Sized>(
    renderer: &R,
    pdf_path: &Path,
    output_dir: &Path,
    config: &ConversionConfig,
) -> Result<ConvertedDocument, DocumentError> {
    let format = config
        .image_format()
        .ok_or_else(|| DocumentError::UnsupportedFormat {
            format: config.format.clone(),
        })?;

    let basename = place::document_basename(pdf_path);
    let images = renderer.render_pages(pdf_path, config.dpi)?;
    if images.is_empty() {
        return Err(DocumentError::NoPages {
            path: pdf_path.to_path_buf(),
        });
    }

    let placement = place::plan_placement(output_dir, &basename, images.len(), &config.extension());
    place::write_pages(&images, &placement, format)?;

    Ok(ConvertedDocument {
        source: pdf_path.to_path_buf(),
        page_count: images.len(),
        placement,
    })
}

/// Convert every PDF under `base_dir`, writing images into `output_dir`.
///
/// pdfium is bound only if at least one PDF is found. If it cannot be
/// loaded, the binding error is logged once and every document is recorded
/// as failed with [`DocumentError::EngineUnavailable`].
///
/// # Errors
/// Only when `output_dir` cannot be created. Per-document failures are in
/// [`BatchReport::failed`].
pub fn process_directory(
    base_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<BatchReport, Pdf2ImgError> {
    let start = Instant::now();
    let base_dir = base_dir.as_ref();
    let output_dir = output_dir.as_ref();

    prepare_output_root(output_dir)?;
    let pdfs = discover::discover_pdfs(base_dir, output_dir);

    if pdfs.is_empty() {
        start_batch(output_dir, 0, config);
        return Ok(finish_batch(BatchReport::new(output_dir.to_path_buf()), config, start));
    }

    match PdfiumRenderer::bind() {
        Ok(renderer) => Ok(run_batch(&renderer, pdfs, output_dir, config, start)),
        Err(e) => {
            error!("{e}");
            let reason = match e {
                Pdf2ImgError::PdfiumBindingFailed(reason) => reason,
                other => other.to_string(),
            };
            let renderer = UnavailableRenderer::new(reason);
            Ok(run_batch(&renderer, pdfs, output_dir, config, start))
        }
    }
}

/// [`process_directory`] with a caller-supplied renderer.
pub fn process_directory_with<R: PageRenderer + ?Sized>(
    renderer: &R,
    base_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<BatchReport, Pdf2ImgError> {
    let start = Instant::now();
    let base_dir = base_dir.as_ref();
    let output_dir = output_dir.as_ref();

    prepare_output_root(output_dir)?;
    let pdfs = discover::discover_pdfs(base_dir, output_dir);
    Ok(run_batch(renderer, pdfs, output_dir, config, start))
}

/// Default output root for a scanned directory: `<directory>/converted_images`.
pub fn default_output_dir(base_dir: &Path) -> PathBuf {
    base_dir.join("converted_images")
}

fn prepare_output_root(output_dir: &Path) -> Result<(), Pdf2ImgError> {
    fs::create_dir_all(output_dir).map_err(|e| Pdf2ImgError::OutputDirCreateFailed {
        path: output_dir.to_path_buf(),
        source: e,
    })
}

fn run_batch<R: PageRenderer + ?Sized>(
    renderer: &R,
    pdfs: Vec<PathBuf>,
    output_dir: &Path,
    config: &ConversionConfig,
    start: Instant,
) -> BatchReport {
    start_batch(output_dir, pdfs.len(), config);
    let cb = config.progress_callback.as_deref();

    let mut report = BatchReport::new(output_dir.to_path_buf());
    for pdf in pdfs {
        if let Some(cb) = cb {
            cb.on_document_start(&pdf);
        }
        match convert_pdf_to_images(renderer, &pdf, output_dir, config) {
            Ok(doc) => {
                if let Some(cb) = cb {
                    cb.on_document_complete(&pdf, doc.page_count);
                }
                report.converted.push(doc);
            }
            Err(error) => {
                if let Some(cb) = cb {
                    cb.on_document_error(&pdf, &error);
                }
                report.failed.push(FailedDocument { source: pdf, error });
            }
        }
    }

    finish_batch(report, config, start)
}

fn start_batch(output_dir: &Path, total: usize, config: &ConversionConfig) {
    info!("Found {} PDF(s); writing to {}", total, output_dir.display());
    if let Some(cb) = config.progress_callback.as_deref() {
        cb.on_batch_start(output_dir, total);
    }
}

fn finish_batch(mut report: BatchReport, config: &ConversionConfig, start: Instant) -> BatchReport {
    report.duration_ms = start.elapsed().as_millis() as u64;
    info!(
        "Batch complete: {}/{} documents, {} pages, {}ms",
        report.converted.len(),
        report.discovered(),
        report.total_pages(),
        report.duration_ms
    );
    if let Some(cb) = config.progress_callback.as_deref() {
        cb.on_batch_complete(&report);
    }
    report
}

/// "1 page" / "N pages".
pub fn pages_label(count: usize) -> String {
    if count == 1 {
        "1 page".to_string()
    } else {
        format!("{count} pages")
    }
}
