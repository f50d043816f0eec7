//! Locate and bind the pdfium shared library at runtime.
//!
//! pdfium is not linked at build time. On each run the library is looked up
//! in this order, first existing file wins:
//!
//! 1. `PDFIUM_LIB_PATH` — a library file, or a directory holding
//!    `libpdfium.so` / `libpdfium.dylib` / `pdfium.dll`.
//! 2. The directory containing the running executable.
//! 3. The user cache directory, e.g. `~/.cache/pdf2img/` on Linux.
//!
//! If none of those exist, the system library search path is tried.

use crate::error::Pdf2ImgError;
use pdfium_render::prelude::Pdfium;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an existing pdfium library (file or directory).
pub const LIB_PATH_ENV: &str = "PDFIUM_LIB_PATH";

/// Per-user directory searched for the pdfium library.
pub fn user_library_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("pdf2img"))
}

/// Candidate library paths in lookup order, before existence checks.
///
/// `lib_name` is the platform file name (e.g. `libpdfium.so`).
pub fn library_candidates(
    env_value: Option<OsString>,
    exe_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    lib_name: &Path,
) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        let p = PathBuf::from(value);
        if p.is_dir() {
            candidates.push(p.join(lib_name));
        } else {
            candidates.push(p);
        }
    }
    if let Some(dir) = exe_dir {
        candidates.push(dir.join(lib_name));
    }
    if let Some(dir) = user_dir {
        candidates.push(dir.join(lib_name));
    }

    candidates
}

/// Bind pdfium from the first existing candidate, falling back to the
/// system library.
pub fn bind_pdfium() -> Result<Pdfium, Pdf2ImgError> {
    let lib_name = PathBuf::from(Pdfium::pdfium_platform_library_name());
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));

    let candidates = library_candidates(
        std::env::var_os(LIB_PATH_ENV),
        exe_dir,
        user_library_dir(),
        &lib_name,
    );

    let mut failures = Vec::new();
    for path in candidates.iter().filter(|p| p.is_file()) {
        debug!("Trying pdfium at {}", path.display());
        match Pdfium::bind_to_library(path) {
            Ok(bindings) => {
                debug!("Bound pdfium from {}", path.display());
                return Ok(Pdfium::new(bindings));
            }
            Err(e) => failures.push(format!("{}: {}", path.display(), e)),
        }
    }

    debug!("Trying pdfium from the system library path");
    match Pdfium::bind_to_system_library() {
        Ok(bindings) => Ok(Pdfium::new(bindings)),
        Err(e) => {
            failures.push(format!("system library: {}", e));
            Err(Pdf2ImgError::PdfiumBindingFailed(failures.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const LIB: &str = "libpdfium.so";

    #[test]
    fn order_is_env_then_exe_then_user() {
        let c = library_candidates(
            Some(OsString::from("/opt/pdfium/libpdfium.so")),
            Some(PathBuf::from("/usr/local/bin")),
            Some(PathBuf::from("/home/u/.cache/pdf2img")),
            Path::new(LIB),
        );
        assert_eq!(
            c,
            vec![
                PathBuf::from("/opt/pdfium/libpdfium.so"),
                PathBuf::from("/usr/local/bin/libpdfium.so"),
                PathBuf::from("/home/u/.cache/pdf2img/libpdfium.so"),
            ]
        );
    }

    #[test]
    fn env_directory_gets_platform_name() {
        let tmp = TempDir::new().unwrap();
        let c = library_candidates(
            Some(tmp.path().as_os_str().to_owned()),
            None,
            None,
            Path::new(LIB),
        );
        assert_eq!(c, vec![tmp.path().join(LIB)]);
    }

    #[test]
    fn empty_env_is_ignored() {
        let c = library_candidates(Some(OsString::new()), None, None, Path::new(LIB));
        assert!(c.is_empty());
    }

    #[test]
    fn user_dir_is_namespaced() {
        if let Some(d) = user_library_dir() {
            assert!(d.ends_with("pdf2img"));
        }
    }
}
