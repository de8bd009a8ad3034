//! Writing drawings to disk as SVG or PNG.

use anyhow::{bail, Context, Result};
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{error, info};

use super::scene::Scene;
use crate::models::{ViewMode, WallConfiguration};

/// Largest PNG edge we are willing to allocate, in pixels.
pub const MAX_CANVAS_PX: u32 = 16_384;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Standalone SVG document
    Svg,
    /// Rasterized PNG image
    #[default]
    Png,
}

impl ExportFormat {
    /// File extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }

    /// Format implied by a file extension, if recognized.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            other => bail!("Unknown export format '{other}' (expected svg or png)"),
        }
    }
}

/// Lowercases a name and joins runs of whitespace and file-name-reserved
/// characters (`"<>:/\|?*` and control characters) with dashes.
pub fn slug(name: &str) -> Result<String> {
    let separators = Regex::new(r#"[\s"<>:/\\|?*\x00-\x1f]+"#)
        .context("Failed to compile file name pattern")?;
    Ok(separators
        .replace_all(name.trim(), "-")
        .trim_matches('-')
        .to_lowercase())
}

/// `elevation-<view>-<display>.<ext>`
pub fn elevation_file_name(view: ViewMode, display_name: &str, format: ExportFormat) -> Result<String> {
    Ok(format!(
        "elevation-{}-{}.{}",
        view.id(),
        slug(display_name)?,
        format.extension()
    ))
}

/// `videowall-<view>-<cols>x<rows>.<ext>`
#[must_use]
pub fn videowall_file_name(view: ViewMode, config: &WallConfiguration, format: ExportFormat) -> String {
    format!(
        "videowall-{}-{}x{}.{}",
        view.id(),
        config.cols,
        config.rows,
        format.extension()
    )
}

/// Rasterizes an SVG document at `scale` pixels per drawing unit.
#[cfg(feature = "png")]
pub fn rasterize(svg: &str, scale: f32) -> Result<Vec<u8>> {
    use resvg::tiny_skia::{Pixmap, Transform};
    use resvg::usvg;

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &options)
        .context("Failed to parse generated SVG")?;

    let size = tree.size().to_int_size();
    let width = (size.width() as f32 * scale).ceil() as u32;
    let height = (size.height() as f32 * scale).ceil() as u32;
    if width == 0 || height == 0 {
        bail!("Drawing has no area at scale {scale}");
    }
    if width > MAX_CANVAS_PX || height > MAX_CANVAS_PX {
        bail!(
            "Image of {width}x{height} px exceeds the {MAX_CANVAS_PX} px limit; lower the export scale"
        );
    }

    let mut pixmap = Pixmap::new(width, height)
        .with_context(|| format!("Failed to allocate {width}x{height} canvas"))?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    pixmap.encode_png().context("Failed to encode PNG")
}

/// PNG output is compiled out; only SVG export is available.
#[cfg(not(feature = "png"))]
pub fn rasterize(_svg: &str, _scale: f32) -> Result<Vec<u8>> {
    tracing::warn!("PNG support disabled; enable feature \"png\" to rasterize drawings.");
    bail!("PNG export is not available in this build; use --format svg")
}

/// Writes `scene` to `path` in `format`, creating parent directories.
pub fn write_scene(scene: &Scene, path: &Path, format: ExportFormat, scale: f32) -> Result<()> {
    if !scene.has_area() {
        error!(title = %scene.title, "drawing has no renderable area");
        bail!("Nothing to export: the drawing has no area");
    }
    if !scale.is_finite() || scale <= 0.0 {
        bail!("Export scale must be a positive number, got {scale}");
    }

    let svg = scene.to_svg();
    let bytes = match format {
        ExportFormat::Svg => svg.into_bytes(),
        ExportFormat::Png => rasterize(&svg, scale)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, &bytes).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), %format, bytes = bytes.len(), "exported drawing");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::interaction::ViewBox;
    use tempfile::TempDir;

    fn small_scene() -> Scene {
        Scene::new(
            ViewBox {
                x: 0.0,
                y: 0.0,
                width: 40.0,
                height: 20.0,
            },
            "small",
        )
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("  Sony   FW-75BZ30L ").unwrap(), "sony-fw-75bz30l");
        assert_eq!(slug("Generic 65\" (Avg)").unwrap(), "generic-65-(avg)");
        assert_eq!(slug("a<b>c:d/e\\f|g?h*").unwrap(), "a-b-c-d-e-f-g-h");
        assert_eq!(slug("Panel 55\"").unwrap(), "panel-55");
    }

    #[test]
    fn test_file_names() {
        assert_eq!(
            elevation_file_name(ViewMode::Front, "Custom Size", ExportFormat::Png).unwrap(),
            "elevation-front-custom-size.png"
        );
        assert_eq!(
            elevation_file_name(ViewMode::Backing, "Generic 65\"", ExportFormat::Png).unwrap(),
            "elevation-backing-generic-65.png"
        );
        let mut config = WallConfiguration::default();
        config.rows = 2;
        config.cols = 3;
        assert_eq!(
            videowall_file_name(ViewMode::Backing, &config, ExportFormat::Svg),
            "videowall-backing-3x2.svg"
        );
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("SVG".parse::<ExportFormat>().unwrap(), ExportFormat::Svg);
        assert!("jpg".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::from_path(Path::new("a/b.png")), Some(ExportFormat::Png));
        assert_eq!(ExportFormat::from_path(Path::new("a/b")), None);
    }

    #[test]
    fn test_write_svg_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("drawing.svg");
        write_scene(&small_scene(), &path, ExportFormat::Svg, 2.0).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<?xml"));
    }

    #[test]
    fn test_write_rejects_empty_scene_and_bad_scale() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("drawing.svg");

        let mut empty = small_scene();
        empty.view_box.height = 0.0;
        assert!(write_scene(&empty, &path, ExportFormat::Svg, 2.0).is_err());
        assert!(write_scene(&small_scene(), &path, ExportFormat::Svg, 0.0).is_err());
        assert!(!path.exists());
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_rasterize_scales_canvas() {
        let png = rasterize(&small_scene().to_svg(), 2.0).unwrap();
        assert_eq!(&png[1..4], b"PNG");
        // IHDR width and height, big-endian
        assert_eq!(u32::from_be_bytes([png[16], png[17], png[18], png[19]]), 80);
        assert_eq!(u32::from_be_bytes([png[20], png[21], png[22], png[23]]), 40);
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_rasterize_rejects_oversized_canvas() {
        let mut scene = small_scene();
        scene.view_box.width = 20_000.0;
        assert!(rasterize(&scene.to_svg(), 1.0).is_err());
    }
}
