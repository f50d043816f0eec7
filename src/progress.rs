//! Progress-callback trait for per-document batch events.
//!
//! Inject an [`Arc<dyn BatchProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to receive
//! events as the batch walks the tree. The library itself only logs through
//! `tracing`; anything user-facing (status lines, spinners) lives in the
//! callback.
//!
//! # Example
//!
//! ```rust
//! use pdf2img::{BatchProgressCallback, ConversionConfig};
//! use std::path::Path;
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct PageCounter {
//!     pages: AtomicUsize,
//! }
//!
//! impl BatchProgressCallback for PageCounter {
//!     fn on_document_complete(&self, _pdf: &Path, page_count: usize) {
//!         self.pages.fetch_add(page_count, Ordering::SeqCst);
//!     }
//! }
//!
//! let config = ConversionConfig::builder()
//!     .progress_callback(Arc::new(PageCounter { pages: AtomicUsize::new(0) }))
//!     .build()
//!     .unwrap();
//! ```

use crate::error::DocumentError;
use crate::output::BatchReport;
use std::path::Path;
use std::sync::Arc;

/// Called by [`crate::process_directory`] as it processes each document.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Events arrive sequentially, in traversal order.
pub trait BatchProgressCallback: Send + Sync {
    /// Called once after discovery, before the first document is rendered.
    ///
    /// # Arguments
    /// * `output_root`     — directory images are written into
    /// * `total_documents` — number of PDFs found
    fn on_batch_start(&self, output_root: &Path, total_documents: usize) {
        let _ = (output_root, total_documents);
    }

    /// Called just before a document is rendered.
    fn on_document_start(&self, pdf_path: &Path) {
        let _ = pdf_path;
    }

    /// Called when every page of a document has been written.
    fn on_document_complete(&self, pdf_path: &Path, page_count: usize) {
        let _ = (pdf_path, page_count);
    }

    /// Called when a document fails; the batch continues afterwards.
    fn on_document_error(&self, pdf_path: &Path, error: &DocumentError) {
        let _ = (pdf_path, error);
    }

    /// Called once after every discovered document has been attempted.
    fn on_batch_complete(&self, report: &BatchReport) {
        let _ = report;
    }
}

/// A no-op implementation for callers that don't need progress events.
///
/// This is the default when no callback is configured.
pub struct NoopProgressCallback;

impl BatchProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type ProgressCallback = Arc<dyn BatchProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
    }

    impl BatchProgressCallback for Recorder {
        fn on_document_start(&self, pdf_path: &Path) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start {}", pdf_path.display()));
        }

        fn on_document_error(&self, pdf_path: &Path, error: &DocumentError) {
            self.events
                .lock()
                .unwrap()
                .push(format!("error {} {error}", pdf_path.display()));
        }
    }

    #[test]
    fn noop_accepts_all_events() {
        let cb = NoopProgressCallback;
        let path = PathBuf::from("a.pdf");
        cb.on_batch_start(Path::new("out"), 1);
        cb.on_document_start(&path);
        cb.on_document_complete(&path, 3);
        cb.on_batch_complete(&BatchReport::new(PathBuf::from("out")));
    }

    #[test]
    fn overridden_methods_receive_events() {
        let rec = Recorder::default();
        let path = PathBuf::from("bad.pdf");
        rec.on_document_start(&path);
        rec.on_document_complete(&path, 1); // default no-op
        rec.on_document_error(
            &path,
            &DocumentError::NoPages {
                path: path.clone(),
            },
        );
        let events = rec.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], "start bad.pdf");
        assert!(events[1].starts_with("error bad.pdf"));
    }

    #[test]
    fn callback_is_object_safe() {
        let cb: ProgressCallback = Arc::new(Recorder::default());
        cb.on_document_start(Path::new("x.pdf"));
    }
}
