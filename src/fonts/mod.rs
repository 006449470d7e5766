//! Font discovery for the manual renderer.
//!
//! The proportional family is required, the monospace family used by code blocks is optional.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::{self, FontData, FontFamily};
use log::{debug, warn};

/// Name of the bundled proportional font family.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "Roboto";
/// Name of the bundled monospace font family.
pub const MONO_FONT_FAMILY_NAME: &str = "RobotoMono";

/// Environment variable pointing at a directory with the bundled fonts.
pub const FONTS_DIR_ENV: &str = "MANUAL_PDF_FONTS_DIR";
/// Environment variable pointing at the Windows fonts directory.
pub const WINDOWS_FONTS_DIR_ENV: &str = "MANUAL_PDF_WINDOWS_FONTS_DIR";

const FONT_FILES: &[&str] = &[
    "Roboto-Regular.ttf",
    "Roboto-Bold.ttf",
    "Roboto-Italic.ttf",
    "Roboto-BoldItalic.ttf",
];

struct WindowsFontFiles {
    family: &'static str,
    regular: &'static str,
    bold: &'static str,
    italic: &'static str,
    bold_italic: &'static str,
}

const WINDOWS_SANS: WindowsFontFiles = WindowsFontFiles {
    family: "Arial",
    regular: "arial.ttf",
    bold: "arialbd.ttf",
    italic: "ariali.ttf",
    bold_italic: "arialbi.ttf",
};

const WINDOWS_MONO: WindowsFontFiles = WindowsFontFiles {
    family: "Courier New",
    regular: "cour.ttf",
    bold: "courbd.ttf",
    italic: "couri.ttf",
    bold_italic: "courbi.ttf",
};

/// Font families used by one document.
pub struct ManualFonts {
    pub sans: FontFamily<FontData>,
    /// Monospace family for code blocks.  `None` means code uses the proportional family.
    pub mono: Option<FontFamily<FontData>>,
}

/// Explicit directories that take precedence over the default search path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontLocations {
    /// Directory holding the Roboto files.
    pub fonts_dir: Option<PathBuf>,
    /// Directory holding the Windows system fonts.
    pub windows_fonts_dir: Option<PathBuf>,
}

impl FontLocations {
    pub fn with_fonts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fonts_dir = Some(dir.into());
        self
    }

    pub fn with_windows_fonts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.windows_fonts_dir = Some(dir.into());
        self
    }

    fn candidates(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        let mut push = |candidate: PathBuf| {
            if !candidates.iter().any(|existing| existing == &candidate) {
                candidates.push(candidate);
            }
        };

        if let Some(dir) = &self.fonts_dir {
            push(dir.clone());
        }
        if let Some(dir) = env_path(FONTS_DIR_ENV) {
            push(dir);
        }
        if let Ok(current_exe) = env::current_exe() {
            if let Some(bin_dir) = current_exe.parent() {
                push(bin_dir.join("assets/fonts"));
            }
        }
        push(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts"));

        candidates
    }

    fn windows_directory(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.windows_fonts_dir {
            return Some(dir.clone());
        }
        if let Some(path) = env_path(WINDOWS_FONTS_DIR_ENV) {
            return Some(path);
        }

        #[cfg(windows)]
        {
            for var in ["WINDIR", "SystemRoot"] {
                if let Some(root) = env_path(var) {
                    let candidate = root.join("Fonts");
                    if candidate.is_dir() {
                        return Some(candidate);
                    }
                }
            }
        }

        None
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var).and_then(|value| {
        let path = PathBuf::from(value);
        if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        }
    })
}

fn missing_font_files(path: &Path) -> Vec<PathBuf> {
    FONT_FILES
        .iter()
        .map(|name| path.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect()
}

fn resolve_font_directory(locations: &FontLocations) -> Result<PathBuf, Error> {
    let mut attempts = Vec::new();

    for candidate in locations.candidates() {
        let exists = candidate.is_dir();
        let missing = missing_font_files(&candidate);

        if exists && missing.is_empty() {
            return Ok(candidate);
        }

        let reason = if !exists {
            format!("directory missing at {}", candidate.display())
        } else {
            let missing_list = missing
                .iter()
                .map(|path| path.file_name().unwrap_or_default().to_string_lossy())
                .collect::<Vec<_>>()
                .join(", ");
            format!("missing files [{}]", missing_list)
        };

        attempts.push(format!("{} ({})", candidate.display(), reason));
    }

    Err(Error::new(
        format!(
            "Unable to locate the font directory. Checked: {}. See assets/fonts/README.md or set {}.",
            attempts.join(", "),
            FONTS_DIR_ENV
        ),
        io::Error::new(io::ErrorKind::NotFound, "fonts directory not found"),
    ))
}

fn load_bundled_fonts(locations: &FontLocations) -> Result<ManualFonts, Error> {
    let directory = resolve_font_directory(locations)?;

    let sans = fonts::from_files(&directory, DEFAULT_FONT_FAMILY_NAME, None).map_err(|err| {
        Error::new(
            format!(
                "Failed to load font family '{}' from {}: {}",
                DEFAULT_FONT_FAMILY_NAME,
                directory.display(),
                err
            ),
            io::Error::new(io::ErrorKind::Other, err.to_string()),
        )
    })?;

    let mono = match fonts::from_files(&directory, MONO_FONT_FAMILY_NAME, None) {
        Ok(family) => Some(family),
        Err(err) => {
            warn!(
                "Monospace family '{}' unavailable in {} ({}); code blocks use '{}'",
                MONO_FONT_FAMILY_NAME,
                directory.display(),
                err,
                DEFAULT_FONT_FAMILY_NAME
            );
            None
        }
    };

    debug!("Loaded fonts from {}", directory.display());
    Ok(ManualFonts { sans, mono })
}

fn load_windows_font(directory: &Path, file: &str, style: &str) -> Result<FontData, Error> {
    let path = directory.join(file);
    FontData::load(&path, None).map_err(|err| {
        let io_kind = if path.is_file() {
            io::ErrorKind::Other
        } else {
            io::ErrorKind::NotFound
        };
        Error::new(
            format!(
                "Failed to load Windows fallback {} font at {}: {}",
                style,
                path.display(),
                err
            ),
            io::Error::new(io_kind, err.to_string()),
        )
    })
}

fn load_windows_family(
    directory: &Path,
    files: &WindowsFontFiles,
) -> Result<FontFamily<FontData>, Error> {
    Ok(FontFamily {
        regular: load_windows_font(directory, files.regular, "regular")?,
        bold: load_windows_font(directory, files.bold, "bold")?,
        italic: load_windows_font(directory, files.italic, "italic")?,
        bold_italic: load_windows_font(directory, files.bold_italic, "bold italic")?,
    })
}

fn windows_fallback_fonts(locations: &FontLocations) -> Result<ManualFonts, Error> {
    let directory = locations.windows_directory().ok_or_else(|| {
        Error::new(
            "Windows font directory not found for fallback",
            io::Error::new(io::ErrorKind::NotFound, "windows fonts directory not found"),
        )
    })?;

    let sans = load_windows_family(&directory, &WINDOWS_SANS)?;
    let mono = match load_windows_family(&directory, &WINDOWS_MONO) {
        Ok(family) => Some(family),
        Err(err) => {
            warn!(
                "Windows '{}' family unavailable ({}); code blocks use '{}'",
                WINDOWS_MONO.family, err, WINDOWS_SANS.family
            );
            None
        }
    };
    Ok(ManualFonts { sans, mono })
}

fn fonts_missing(err: &Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::IoError(io_err)
            if io_err.kind() == io::ErrorKind::NotFound
                || io_err.kind() == io::ErrorKind::PermissionDenied
    )
}

/// Loads the bundled Roboto families, falling back to the Windows Arial and Courier New
/// families when the bundled fonts are missing.
pub fn load_fonts(locations: &FontLocations) -> Result<ManualFonts, Error> {
    match load_bundled_fonts(locations) {
        Ok(fonts) => Ok(fonts),
        Err(err) if fonts_missing(&err) => match windows_fallback_fonts(locations) {
            Ok(fallback) => {
                warn!(
                    "Bundled fonts unavailable ({}); falling back to Windows '{}' family.",
                    err, WINDOWS_SANS.family
                );
                Ok(fallback)
            }
            Err(fallback_err) => {
                warn!(
                    "Bundled fonts unavailable ({}); Windows fallback failed: {}",
                    err, fallback_err
                );
                Err(Error::new(
                    format!(
                        "Bundled fonts unavailable and Windows fallback failed: {}",
                        fallback_err
                    ),
                    io::Error::new(io::ErrorKind::NotFound, "default fonts are not available"),
                ))
            }
        },
        Err(err) => Err(err),
    }
}

/// Indicates whether the bundled proportional family is present on disk.
pub fn default_fonts_available(locations: &FontLocations) -> bool {
    resolve_font_directory(locations).is_ok()
}
