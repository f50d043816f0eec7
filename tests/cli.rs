//! End-to-end tests for the `pdf2img` binary.
//!
//! These run the built executable with stdout piped, so they also cover
//! plain (uncoloured) output. None of them need pdfium to be loadable.
//!
//! Run with:
//!   cargo test --test cli

#![cfg(feature = "cli")]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// ── Test helpers ─────────────────────────────────────────────────────────────

fn pdf2img(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pdf2img"))
        .arg(dir)
        .args(args)
        .env_remove("PDF2IMG_OUTPUT")
        .env_remove("PDF2IMG_FORMAT")
        .env_remove("PDF2IMG_DPI")
        .env_remove("PDF2IMG_VERBOSE")
        .env_remove("PDF2IMG_QUIET")
        .env_remove("PDF2IMG_NO_PROGRESS")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn pdf2img")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn tree_without_pdfs() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("notes.txt"), "hello").unwrap();
    tmp
}

// ── Summary line ─────────────────────────────────────────────────────────────

#[test]
fn summary_names_output_directory() {
    let tmp = tree_without_pdfs();
    let out = tmp.path().join("converted_images");

    let output = pdf2img(tmp.path(), &[]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {stdout}");
    assert!(stdout.contains("Conversion complete"), "stdout: {stdout}");
    assert!(
        stdout.contains(&format!("Images saved to {}", out.display())),
        "stdout: {stdout}"
    );
    assert!(out.is_dir());
}

#[test]
fn quiet_still_names_output_directory() {
    let tmp = tree_without_pdfs();
    let out = tmp.path().join("converted_images");

    let output = pdf2img(tmp.path(), &["-q"]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {stdout}");
    assert!(!stdout.contains("Conversion complete"), "stdout: {stdout}");
    assert!(
        stdout.contains(&format!("Images saved to {}", out.display())),
        "stdout: {stdout}"
    );
}

#[test]
fn custom_output_directory_is_reported() {
    let tmp = tree_without_pdfs();
    let out = tmp.path().join("elsewhere/pages");

    let output = pdf2img(tmp.path(), &["-o", out.to_str().unwrap(), "--no-progress"]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {stdout}");
    assert!(
        stdout.contains(&format!("Images saved to {}", out.display())),
        "stdout: {stdout}"
    );
    assert!(out.is_dir());
}

// ── Exit status ──────────────────────────────────────────────────────────────

#[test]
fn failed_document_keeps_exit_status_zero() {
    // Fails at load time with pdfium, or as "pdfium is not available"
    // without it. Either way the run completes.
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("broken.pdf"), b"definitely not a pdf").unwrap();

    let output = pdf2img(tmp.path(), &["--no-progress"]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {stdout}");
    assert!(stdout.contains("Error converting PDF"), "stdout: {stdout}");
    assert!(stdout.contains("broken.pdf"), "stdout: {stdout}");
    assert!(stdout.contains("Images saved to"), "stdout: {stdout}");
}

#[test]
fn unwritable_output_root_exits_non_zero() {
    let tmp = tree_without_pdfs();
    let blocker = tmp.path().join("converted_images");
    fs::write(&blocker, "file in the way").unwrap();

    let output = pdf2img(tmp.path(), &[]);

    assert_ne!(output.status.code(), Some(0));
    assert!(!stdout_of(&output).contains("Images saved to"));
}

// ── Colour ───────────────────────────────────────────────────────────────────

#[test]
fn piped_output_has_no_ansi_escapes() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("broken.pdf"), b"definitely not a pdf").unwrap();

    let output = pdf2img(tmp.path(), &["--no-progress"]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {stdout}");
    assert!(!stdout.contains('\x1b'), "stdout: {stdout:?}");
}
