//! Per-language build orchestration.
//!
//! Languages are built one after the other.  A failing build is recorded in the
//! [`RunReport`] and never stops the remaining ones.

use std::fs;
use std::path::PathBuf;

use log::{error, info, warn};

use crate::builder::ManualRenderer;
use crate::config::ManualConfig;
use crate::content;
use crate::error::{BuildError, ImageUnavailableError, UnsupportedLanguageError};
use crate::flow::FlowAssembler;
use crate::model::{DocumentPlan, Language};
use crate::style::StyleRegistry;

/// Languages selected by the invocation tags.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LanguageRequests {
    /// Languages to build, in request order and without duplicates.
    pub languages: Vec<Language>,
    /// Tags that did not name a supported language.
    pub unsupported: Vec<UnsupportedLanguageError>,
}

/// Maps invocation tags onto languages.  No tags at all selects every language.
pub fn parse_requests<S: AsRef<str>>(tags: &[S]) -> LanguageRequests {
    if tags.is_empty() {
        return LanguageRequests {
            languages: Language::ALL.to_vec(),
            unsupported: Vec::new(),
        };
    }

    let mut requests = LanguageRequests::default();
    for tag in tags {
        let tag = tag.as_ref();
        match Language::from_tag(tag) {
            Some(language) if !requests.languages.contains(&language) => {
                requests.languages.push(language)
            }
            Some(_) => {}
            None => requests
                .unsupported
                .push(UnsupportedLanguageError(tag.to_owned())),
        }
    }
    requests
}

/// A written manual.
#[derive(Debug)]
pub struct Artifact {
    pub language: Language,
    pub path: PathBuf,
    /// Size of the written file in bytes.
    pub size: usize,
    pub omitted_images: Vec<ImageUnavailableError>,
}

/// Outcome of a whole run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub produced: Vec<Artifact>,
    pub skipped: Vec<UnsupportedLanguageError>,
    pub failed: Vec<(Language, BuildError)>,
}

impl RunReport {
    /// True if nothing failed and at least one artifact was written.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && !self.produced.is_empty()
    }
}

/// Assembles, renders and writes the manual described by `plan`.
///
/// The PDF is rendered fully into memory first, so a failing build leaves no file behind.
pub fn build_plan(
    plan: &DocumentPlan,
    styles: &StyleRegistry,
    config: &ManualConfig,
) -> Result<Artifact, BuildError> {
    let assembled = FlowAssembler::new(
        styles,
        config.image_fitter(),
        config.asset_resolver(),
        config.profile().clone(),
    )
    .assemble(plan)?;
    let omitted_images = assembled.omitted_images.clone();

    let bytes = ManualRenderer::new(config).render(assembled)?;

    let output_dir = config.output_dir();
    fs::create_dir_all(output_dir).map_err(|source| BuildError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let path = output_dir.join(plan.file_name());
    fs::write(&path, &bytes).map_err(|source| BuildError::Io {
        path: path.clone(),
        source,
    })?;
    info!("Generated {} ({} bytes)", path.display(), bytes.len());

    Ok(Artifact {
        language: plan.language(),
        path,
        size: bytes.len(),
        omitted_images,
    })
}

/// Builds the bundled manual for `language`.
pub fn build_language(
    language: Language,
    styles: &StyleRegistry,
    config: &ManualConfig,
) -> Result<Artifact, BuildError> {
    info!("Building {} manual", language.code());
    build_plan(&content::plan_for(language), styles, config)
}

/// Runs `build` for every requested language and collects the outcomes.
pub fn run_with<S, F>(tags: &[S], mut build: F) -> RunReport
where
    S: AsRef<str>,
    F: FnMut(Language) -> Result<Artifact, BuildError>,
{
    let requests = parse_requests(tags);
    for unsupported in &requests.unsupported {
        warn!("Skipping: {unsupported}");
    }

    let mut report = RunReport {
        skipped: requests.unsupported,
        ..RunReport::default()
    };
    for language in requests.languages {
        match build(language) {
            Ok(artifact) => report.produced.push(artifact),
            Err(err) => {
                error!("Building the {} manual failed: {err}", language.code());
                report.failed.push((language, err));
            }
        }
    }
    report
}

/// Builds the bundled manuals for the requested tags.
pub fn run<S: AsRef<str>>(tags: &[S], config: &ManualConfig) -> Result<RunReport, BuildError> {
    let styles = StyleRegistry::manual_defaults()?;
    Ok(run_with(tags, |language| {
        build_language(language, &styles, config)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_tags_selects_every_language() {
        let requests = parse_requests::<&str>(&[]);
        assert_eq!(requests.languages, vec![Language::Italian, Language::English]);
        assert!(requests.unsupported.is_empty());
    }

    #[test]
    fn duplicates_and_aliases_collapse() {
        let requests = parse_requests(&["en", "secondary", "primary", "EN"]);
        assert_eq!(requests.languages, vec![Language::English, Language::Italian]);
    }

    #[test]
    fn unknown_tags_are_collected() {
        let requests = parse_requests(&["fr", "primary"]);
        assert_eq!(requests.languages, vec![Language::Italian]);
        assert_eq!(
            requests.unsupported,
            vec![UnsupportedLanguageError("fr".into())]
        );
    }

    #[test]
    fn only_unknown_tags_select_nothing() {
        let requests = parse_requests(&["de"]);
        assert!(requests.languages.is_empty());
    }
}
