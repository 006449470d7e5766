use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;
use manual_pdf::config::parse_positive_mm;
use manual_pdf::{FlowProfile, ManualConfig, RunReport};

/// Builds the Tramando user manual PDFs.
///
/// Fonts are looked up under `assets/fonts` next to the binary or the crate, or in the
/// directory named by `MANUAL_PDF_FONTS_DIR`.  Screenshots are read from
/// `<assets-dir>/<it|en>/`.
#[derive(Parser)]
#[command(author, version, about = "Builds the Tramando user manual PDFs")]
struct Cli {
    /// Languages to build: `primary`/`it`, `secondary`/`en`.  Builds both when omitted.
    languages: Vec<String>,

    /// Directory the PDFs are written to.
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Root of the per-language screenshot directories.
    #[arg(long, value_name = "DIR")]
    assets_dir: Option<PathBuf>,

    /// Directory holding the Roboto font files.
    #[arg(long, value_name = "DIR")]
    fonts_dir: Option<PathBuf>,

    /// Maximum rendered image height in millimetres.
    #[arg(long, value_name = "MM", value_parser = parse_height)]
    max_image_height: Option<f64>,

    /// Use ASCII bullets and render inline markup as plain text.
    #[arg(long)]
    plain: bool,
}

fn parse_height(value: &str) -> Result<f64, String> {
    parse_positive_mm(value).ok_or_else(|| format!("`{value}` is not a positive length"))
}

impl Cli {
    fn config(&self) -> ManualConfig {
        let mut config = ManualConfig::from_env();
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir);
        }
        if let Some(dir) = &self.assets_dir {
            config = config.with_assets_dir(dir);
        }
        if let Some(dir) = &self.fonts_dir {
            config = config.with_fonts_dir(dir);
        }
        if let Some(height) = self.max_image_height {
            config = config.with_max_image_height_mm(height);
        }
        if self.plain {
            config = config.with_profile(FlowProfile::plain());
        }
        config
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.config();

    let report = match manual_pdf::pipeline::run(&cli.languages, &config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {}", err);
            print_error_sources(&err);
            process::exit(1);
        }
    };

    print_report(&report);
    if !report.is_success() {
        process::exit(1);
    }
}

fn print_report(report: &RunReport) {
    for artifact in &report.produced {
        println!("{} ({} bytes)", artifact.path.display(), artifact.size);
        for omitted in &artifact.omitted_images {
            println!("  omitted: {}", omitted);
        }
    }
    for skipped in &report.skipped {
        eprintln!("Skipped: {}", skipped);
    }
    for (language, err) in &report.failed {
        eprintln!("Error building {}: {}", language.code(), err);
        print_error_sources(err);
    }
    info!(
        "{} produced, {} skipped, {} failed",
        report.produced.len(),
        report.skipped.len(),
        report.failed.len()
    );
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
