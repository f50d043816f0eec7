//! Configuration types for batch PDF-to-image conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. The same config is shared by every
//! document in a batch.

use crate::error::Pdf2ImgError;
use crate::progress::ProgressCallback;
use image::ImageFormat;
use std::fmt;

/// Default output format identifier.
pub const DEFAULT_FORMAT: &str = "PNG";

/// Default render resolution in dots per inch.
pub const DEFAULT_DPI: u32 = 200;

/// Configuration for a batch conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2img::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .format("JPEG")
///     .dpi(300)
///     .build()
///     .unwrap();
/// assert_eq!(config.extension(), "jpeg");
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Image format identifier, e.g. "PNG", "JPEG", "webp". Default: "PNG".
    ///
    /// The lowercased identifier doubles as the file extension. It is not
    /// checked against a list up front; a format the `image` crate cannot
    /// write fails each document individually.
    pub format: String,

    /// Rendering DPI used when rasterising each page. Default: 200.
    ///
    /// A page of `w × h` points renders to `w·dpi/72 × h·dpi/72` pixels.
    pub dpi: u32,

    /// Receives per-document progress events. Default: None.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            dpi: DEFAULT_DPI,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("format", &self.format)
            .field("dpi", &self.dpi)
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn BatchProgressCallback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }

    /// File extension for written images: the format identifier, lowercased.
    pub fn extension(&self) -> String {
        self.format.to_lowercase()
    }

    /// Resolve the format identifier to an encoder the `image` crate can
    /// write, or `None` if this build has no such encoder.
    pub fn image_format(&self) -> Option<ImageFormat> {
        ImageFormat::from_extension(self.extension()).filter(|f| f.writing_enabled())
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.config.format = format.into();
        self
    }

    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Pdf2ImgError> {
        let c = &self.config;
        if c.dpi == 0 {
            return Err(Pdf2ImgError::InvalidConfig(
                "DPI must be a positive integer, got 0".into(),
            ));
        }
        if c.format.trim().is_empty() {
            return Err(Pdf2ImgError::InvalidConfig(
                "Image format must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let c = ConversionConfig::default();
        assert_eq!(c.format, "PNG");
        assert_eq!(c.dpi, 200);
        assert!(c.progress_callback.is_none());
    }

    #[test]
    fn extension_is_lowercased_identifier() {
        let c = ConversionConfig::builder().format("JPEG").build().unwrap();
        assert_eq!(c.extension(), "jpeg");
        assert_eq!(c.image_format(), Some(ImageFormat::Jpeg));
    }

    #[test]
    fn unknown_format_is_accepted_but_unresolvable() {
        let c = ConversionConfig::builder().format("XYZ").build().unwrap();
        assert_eq!(c.extension(), "xyz");
        assert_eq!(c.image_format(), None);
    }

    #[test]
    fn zero_dpi_rejected() {
        let err = ConversionConfig::builder().dpi(0).build().unwrap_err();
        assert!(matches!(err, Pdf2ImgError::InvalidConfig(_)));
    }

    #[test]
    fn blank_format_rejected() {
        let err = ConversionConfig::builder().format("  ").build().unwrap_err();
        assert!(matches!(err, Pdf2ImgError::InvalidConfig(_)));
    }

    #[test]
    fn debug_hides_callback() {
        let c = ConversionConfig::builder()
            .progress_callback(std::sync::Arc::new(crate::progress::NoopProgressCallback))
            .build()
            .unwrap();
        let s = format!("{c:?}");
        assert!(s.contains("<dyn BatchProgressCallback>"));
    }
}
