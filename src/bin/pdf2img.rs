//! CLI binary for pdf2img.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ConversionConfig` and prints per-document status lines.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf2img::{
    default_output_dir, pages_label, process_directory, BatchProgressCallback, BatchReport,
    ConversionConfig, DocumentError, ProgressCallback, DEFAULT_DPI, DEFAULT_FORMAT,
};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

/// Colour only when stdout is a terminal; piped output stays plain.
fn colour_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| io::stdout().is_terminal())
}

fn paint(code: &str, s: &str) -> String {
    if colour_enabled() {
        format!("\x1b[{code}m{s}\x1b[0m")
    } else {
        s.to_string()
    }
}

fn green(s: &str) -> String {
    paint("32", s)
}
fn red(s: &str) -> String {
    paint("31", s)
}
fn dim(s: &str) -> String {
    paint("2", s)
}
fn bold(s: &str) -> String {
    paint("1", s)
}
fn cyan(s: &str) -> String {
    paint("36", s)
}

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"];

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: a bar on stderr and one status line per
/// document on stdout. Status lines are printed with the bar suspended so
/// the two never interleave.
struct CliProgressCallback {
    bar: ProgressBar,
    /// Suppress success lines; errors are always printed.
    quiet: bool,
}

impl CliProgressCallback {
    fn new(show_bar: bool, quiet: bool) -> Arc<Self> {
        let bar = if show_bar {
            let bar = ProgressBar::new(0); // length set in on_batch_start
            bar.set_style(
                ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner())
                    .tick_strings(TICKS),
            );
            bar.set_prefix("Scanning");
            bar.enable_steady_tick(Duration::from_millis(80));
            bar
        } else {
            ProgressBar::hidden()
        };

        Arc::new(Self { bar, quiet })
    }

    fn status(&self, line: String) {
        self.bar.suspend(|| println!("{line}"));
    }
}

impl BatchProgressCallback for CliProgressCallback {
    fn on_batch_start(&self, output_root: &Path, total_documents: usize) {
        let style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} PDFs  {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(TICKS);

        self.bar.set_length(total_documents as u64);
        self.bar.set_style(style);
        self.bar.set_prefix("Converting");

        if !self.quiet {
            self.status(format!(
                "{} {}",
                cyan("◆"),
                bold(&format!(
                    "{total_documents} PDF(s) → {}",
                    output_root.display()
                ))
            ));
        }
    }

    fn on_document_start(&self, pdf_path: &Path) {
        let name = pdf_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.bar.set_message(name);
    }

    fn on_document_complete(&self, pdf_path: &Path, page_count: usize) {
        if !self.quiet {
            self.status(format!(
                "  {} Converted: {} {}",
                green("✓"),
                pdf_path.display(),
                dim(&format!("({})", pages_label(page_count))),
            ));
        }
        self.bar.inc(1);
    }

    fn on_document_error(&self, pdf_path: &Path, error: &DocumentError) {
        self.status(format!(
            "  {} Error converting PDF {}: {}",
            red("✗"),
            pdf_path.display(),
            red(&error.to_string()),
        ));
        self.bar.inc(1);
    }

    fn on_batch_complete(&self, _report: &BatchReport) {
        self.bar.finish_and_clear();
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert every PDF under ./scans into ./scans/converted_images
  pdf2img scans

  # Custom output directory, JPEG at 300 DPI
  pdf2img scans -o /tmp/pages -f JPEG -d 300

OUTPUT LAYOUT:
  doc.pdf     (1 page)   →  <output>/doc.png
  report.pdf  (3 pages)  →  <output>/report/report_page_1.png … report_page_3.png

  The output directory is never scanned, even when it lies inside <DIRECTORY>.
  Existing images with the same names are overwritten.

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH   Path to libpdfium (file or containing directory)
  RUST_LOG          Override log filtering (e.g. RUST_LOG=pdf2img=debug)

SETUP:
  pdf2img loads pdfium at runtime. Prebuilt libraries are available from
  https://github.com/bblanchon/pdfium-binaries — point PDFIUM_LIB_PATH at
  one, place it next to the pdf2img executable, or drop it in the user cache
  directory (~/.cache/pdf2img/ on Linux).
"#;

/// Batch-convert PDF files under a directory into images.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2img",
    version,
    about = "Convert every PDF under a directory into PNG/JPEG page images",
    long_about = "Recursively scan a directory for PDF files and rasterise each one. \
Single-page PDFs become one image in the output directory; multi-page PDFs get a folder \
of numbered page images. A PDF that fails to convert is reported and skipped.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Directory to scan for PDF files.
    directory: PathBuf,

    /// Output directory for images [default: <DIRECTORY>/converted_images].
    #[arg(short, long, env = "PDF2IMG_OUTPUT")]
    output: Option<PathBuf>,

    /// Image format (PNG, JPEG, WEBP, TIFF, BMP, GIF).
    #[arg(short, long, env = "PDF2IMG_FORMAT", default_value = DEFAULT_FORMAT)]
    format: String,

    /// Rendering resolution in DPI.
    #[arg(short, long, env = "PDF2IMG_DPI", default_value_t = DEFAULT_DPI,
          value_parser = clap::value_parser!(u32).range(1..))]
    dpi: u32,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2IMG_VERBOSE")]
    verbose: bool,

    /// Print only errors.
    #[arg(short, long, env = "PDF2IMG_QUIET")]
    quiet: bool,

    /// Disable progress bar.
    #[arg(long, env = "PDF2IMG_NO_PROGRESS")]
    no_progress: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // The status lines already say what happened to each PDF; library INFO
    // logs would only repeat them under the bar.
    let show_progress = !cli.quiet && !cli.no_progress;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let progress_cb = CliProgressCallback::new(show_progress, cli.quiet);
    let config = build_config(&cli, progress_cb)?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_dir(&cli.directory));

    // ── Run batch ────────────────────────────────────────────────────────
    let report = process_directory(&cli.directory, &output, &config)
        .context("Batch conversion could not start")?;

    // Per-document failures never change the exit status.
    if !cli.quiet {
        let mark = if report.is_clean() {
            green("✔")
        } else {
            cyan("⚠")
        };
        println!(
            "{mark} Conversion complete: {}/{} PDFs, {} pages in {}ms",
            report.converted.len(),
            report.discovered(),
            report.total_pages(),
            report.duration_ms,
        );
    }
    println!("Images saved to {}", bold(&output.display().to_string()));

    Ok(())
}

/// Map CLI args to `ConversionConfig`.
fn build_config(cli: &Cli, progress: Arc<CliProgressCallback>) -> Result<ConversionConfig> {
    ConversionConfig::builder()
        .format(cli.format.clone())
        .dpi(cli.dpi)
        .progress_callback(progress as ProgressCallback)
        .build()
        .context("Invalid configuration")
}
