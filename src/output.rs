//! Result types produced by a conversion run.

use crate::error::DocumentError;
use std::path::{Path, PathBuf};

/// Where the pages of one document were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Exactly one page: `<output_root>/<basename>.<ext>`.
    SingleFile(PathBuf),
    /// Several pages: `<output_root>/<basename>/<basename>_page_<n>.<ext>`.
    PageDirectory { dir: PathBuf, pages: Vec<PathBuf> },
}

impl Placement {
    /// Image files in page order.
    pub fn files(&self) -> &[PathBuf] {
        match self {
            Placement::SingleFile(path) => std::slice::from_ref(path),
            Placement::PageDirectory { pages, .. } => pages,
        }
    }
}

/// A document whose pages were all written.
#[derive(Debug, Clone)]
pub struct ConvertedDocument {
    pub source: PathBuf,
    pub page_count: usize,
    pub placement: Placement,
}

/// A document that failed; see [`DocumentError`].
#[derive(Debug, Clone)]
pub struct FailedDocument {
    pub source: PathBuf,
    pub error: DocumentError,
}

/// Outcome of [`crate::process_directory`].
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Directory every image was written under.
    pub output_root: PathBuf,
    /// Successfully converted documents, in traversal order.
    pub converted: Vec<ConvertedDocument>,
    /// Failed documents, in traversal order.
    pub failed: Vec<FailedDocument>,
    /// Wall-clock time for the whole batch.
    pub duration_ms: u64,
}

impl BatchReport {
    pub fn new(output_root: PathBuf) -> Self {
        Self {
            output_root,
            converted: Vec::new(),
            failed: Vec::new(),
            duration_ms: 0,
        }
    }

    /// Number of PDFs the traversal found.
    pub fn discovered(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    /// Pages written across all converted documents.
    pub fn total_pages(&self) -> usize {
        self.converted.iter().map(|d| d.page_count).sum()
    }

    /// `true` when no document failed.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Look up the failure recorded for `source`, if any.
    pub fn failure_for(&self, source: &Path) -> Option<&DocumentError> {
        self.failed
            .iter()
            .find(|f| f.source == source)
            .map(|f| &f.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converted(name: &str, pages: usize) -> ConvertedDocument {
        ConvertedDocument {
            source: PathBuf::from(format!("{name}.pdf")),
            page_count: pages,
            placement: Placement::SingleFile(PathBuf::from(format!("{name}.png"))),
        }
    }

    #[test]
    fn report_totals() {
        let mut report = BatchReport::new(PathBuf::from("out"));
        report.converted.push(converted("a", 1));
        report.converted.push(converted("b", 4));
        report.failed.push(FailedDocument {
            source: PathBuf::from("c.pdf"),
            error: DocumentError::NoPages {
                path: PathBuf::from("c.pdf"),
            },
        });

        assert_eq!(report.discovered(), 3);
        assert_eq!(report.total_pages(), 5);
        assert!(!report.is_clean());
        assert!(report.failure_for(Path::new("c.pdf")).is_some());
        assert!(report.failure_for(Path::new("a.pdf")).is_none());
    }

    #[test]
    fn placement_files_in_order() {
        let single = Placement::SingleFile(PathBuf::from("doc.png"));
        assert_eq!(single.files(), &[PathBuf::from("doc.png")]);

        let multi = Placement::PageDirectory {
            dir: PathBuf::from("r"),
            pages: vec![PathBuf::from("r/r_page_1.png"), PathBuf::from("r/r_page_2.png")],
        };
        assert_eq!(multi.files().len(), 2);
        assert_eq!(multi.files()[1], PathBuf::from("r/r_page_2.png"));
    }
}
