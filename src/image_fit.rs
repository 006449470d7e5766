//! Aspect-preserving image sizing with a maximum height ceiling.

use std::fmt;
use std::path::{Path, PathBuf};

use genpdf::elements::Image;
use image::{DynamicImage, GenericImageView};
use log::info;

use crate::elements::{decode_image_from_path, scaled_image};
use crate::error::ImageUnavailableError;

/// Default ceiling for auto-sized images, in millimetres (18 cm).
pub const DEFAULT_MAX_IMAGE_HEIGHT_MM: f64 = 180.0;

/// Final display size of an image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageLayout {
    /// Rendered width in millimetres.
    pub width_mm: f64,
    /// Rendered height in millimetres.
    pub height_mm: f64,
    /// Whether the height ceiling forced a downscale.
    pub resized: bool,
}

/// Computes the display size for an image of `intrinsic` pixels.
///
/// An explicit height is taken as-is, without applying the ceiling.  Otherwise the height
/// follows the aspect ratio, and if it exceeds `max_height_mm` both dimensions shrink until
/// the height equals the ceiling.
///
/// Returns `None` for an image without pixels or a non-positive width or height.
pub fn fit_dimensions(
    intrinsic: (u32, u32),
    width_mm: f64,
    explicit_height_mm: Option<f64>,
    max_height_mm: f64,
) -> Option<ImageLayout> {
    let (w0, h0) = intrinsic;
    if w0 == 0 || h0 == 0 || !is_positive(width_mm) || !is_positive(max_height_mm) {
        return None;
    }
    let aspect = f64::from(h0) / f64::from(w0);

    if let Some(height_mm) = explicit_height_mm {
        return is_positive(height_mm).then(|| ImageLayout {
            width_mm,
            height_mm,
            resized: false,
        });
    }

    let height_mm = width_mm * aspect;
    let layout = if height_mm > max_height_mm {
        ImageLayout {
            width_mm: max_height_mm / aspect,
            height_mm: max_height_mm,
            resized: true,
        }
    } else {
        ImageLayout {
            width_mm,
            height_mm,
            resized: false,
        }
    };
    Some(layout)
}

/// A request to place the image at `path`.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageRequest {
    pub path: PathBuf,
    /// Requested display width in millimetres.
    pub width_mm: f64,
    /// Explicit display height in millimetres.
    pub height_mm: Option<f64>,
}

impl ImageRequest {
    pub fn new(path: impl Into<PathBuf>, width_mm: f64) -> Self {
        Self {
            path: path.into(),
            width_mm,
            height_mm: None,
        }
    }

    pub fn with_height_mm(mut self, height_mm: Option<f64>) -> Self {
        self.height_mm = height_mm;
        self
    }
}

/// A decoded image together with its computed layout.
#[derive(Clone)]
pub struct FittedImage {
    pub path: PathBuf,
    /// Centered `genpdf` image already scaled to `layout`.
    pub element: Image,
    /// Intrinsic size in pixels.
    pub intrinsic: (u32, u32),
    pub layout: ImageLayout,
}

impl fmt::Debug for FittedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FittedImage")
            .field("path", &self.path)
            .field("intrinsic", &self.intrinsic)
            .field("layout", &self.layout)
            .finish()
    }
}

/// Reads images and sizes them for the page.
#[derive(Clone, Copy, Debug)]
pub struct ImageFitter {
    max_height_mm: f64,
}

impl Default for ImageFitter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IMAGE_HEIGHT_MM)
    }
}

impl ImageFitter {
    pub fn new(max_height_mm: f64) -> Self {
        Self { max_height_mm }
    }

    pub fn max_height_mm(&self) -> f64 {
        self.max_height_mm
    }

    /// Reads the image once and computes its display size.
    pub fn fit(&self, request: &ImageRequest) -> Result<FittedImage, ImageUnavailableError> {
        let path = request.path.as_path();
        if !path.is_file() {
            return Err(ImageUnavailableError::new(path, "file not found"));
        }
        if !is_positive(request.width_mm) {
            return Err(ImageUnavailableError::new(
                path,
                format!("requested width {} mm is not positive", request.width_mm),
            ));
        }
        if let Some(height) = request.height_mm.filter(|h| !is_positive(*h)) {
            return Err(ImageUnavailableError::new(
                path,
                format!("explicit height {height} mm is not positive"),
            ));
        }

        let image = decode_image_from_path(path)
            .map_err(|err| ImageUnavailableError::new(path, err.to_string()))?;
        let intrinsic = image.dimensions();
        let layout = fit_dimensions(
            intrinsic,
            request.width_mm,
            request.height_mm,
            self.max_height_mm,
        )
        .ok_or_else(|| ImageUnavailableError::new(path, "image has no pixels"))?;
        if layout.resized {
            info!(
                "Resizing {}: height {:.1} cm exceeds the {:.1} cm ceiling",
                display_name(path),
                request.width_mm * f64::from(intrinsic.1) / f64::from(intrinsic.0) / 10.0,
                self.max_height_mm / 10.0
            );
        }

        let element = scaled_image(without_alpha(image), &layout)
            .map_err(|err| ImageUnavailableError::new(path, err.to_string()))?;

        Ok(FittedImage {
            path: path.to_path_buf(),
            element,
            intrinsic,
            layout,
        })
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// genpdf rejects images with an alpha channel.
fn without_alpha(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => image,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn fits_below_ceiling_unchanged() {
        for &(w0, h0, width) in &[(1600, 900, 140.0), (800, 800, 120.0), (300, 500, 100.0)] {
            let layout = fit_dimensions((w0, h0), width, None, 180.0).expect("valid input");
            assert!(!layout.resized);
            assert!((layout.width_mm - width).abs() < EPSILON);
            let expected = f64::from(h0) / f64::from(w0) * width;
            assert!((layout.height_mm - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn tall_images_are_capped_at_the_ceiling() {
        for &(w0, h0, width) in &[(400, 1200, 140.0), (1000, 2000, 100.0), (90, 1000, 30.0)] {
            let layout = fit_dimensions((w0, h0), width, None, 180.0).expect("valid input");
            assert!(layout.resized);
            assert!((layout.height_mm - 180.0).abs() < EPSILON);
            assert!(layout.width_mm < width);
            let ratio = layout.width_mm / layout.height_mm;
            assert!((ratio - f64::from(w0) / f64::from(h0)).abs() < 1e-9);
        }
    }

    #[test]
    fn height_exactly_at_ceiling_is_not_resized() {
        let layout = fit_dimensions((100, 200), 90.0, None, 180.0).expect("valid input");
        assert!(!layout.resized);
        assert!((layout.height_mm - 180.0).abs() < EPSILON);
    }

    #[test]
    fn explicit_height_bypasses_the_ceiling() {
        let layout = fit_dimensions((100, 1000), 100.0, Some(250.0), 180.0);
        assert_eq!(
            layout,
            Some(ImageLayout {
                width_mm: 100.0,
                height_mm: 250.0,
                resized: false
            })
        );
    }

    #[test]
    fn degenerate_inputs_have_no_layout() {
        assert_eq!(fit_dimensions((0, 300), 140.0, None, 180.0), None);
        assert_eq!(fit_dimensions((300, 0), 140.0, None, 180.0), None);
        assert_eq!(fit_dimensions((300, 300), 0.0, None, 180.0), None);
        assert_eq!(fit_dimensions((300, 300), f64::NAN, None, 180.0), None);
        assert_eq!(fit_dimensions((300, 300), 140.0, Some(-1.0), 180.0), None);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let fitter = ImageFitter::default();
        let err = fitter
            .fit(&ImageRequest::new("/nonexistent/manual/splash.png", 120.0))
            .unwrap_err();
        assert_eq!(err.path, PathBuf::from("/nonexistent/manual/splash.png"));
        assert!(err.reason.contains("not found"));
    }

    #[test]
    fn fits_a_real_file_and_drops_alpha() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("tall.png");
        ImageBuffer::from_pixel(100, 300, Rgba([200u8, 100, 50, 128]))
            .save(&path)
            .expect("write png");

        let fitted = ImageFitter::new(180.0)
            .fit(&ImageRequest::new(&path, 140.0))
            .expect("image fits");
        assert_eq!(fitted.intrinsic, (100, 300));
        assert!(fitted.layout.resized);
        assert!((fitted.layout.width_mm - 60.0).abs() < 1e-9);
    }

    #[test]
    fn alpha_channels_are_flattened() {
        let rgba = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(2, 2, Rgba([1u8, 2, 3, 4])));
        assert!(matches!(without_alpha(rgba), DynamicImage::ImageRgb8(_)));
    }

    #[test]
    fn undecodable_file_is_unavailable() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").expect("write file");

        let err = ImageFitter::default()
            .fit(&ImageRequest::new(&path, 120.0))
            .unwrap_err();
        assert_eq!(err.path, path);
    }
}
