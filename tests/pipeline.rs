use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::PathBuf;

use manual_pdf::pipeline::{run_with, Artifact};
use manual_pdf::{BuildError, Language, UnsupportedLanguageError};

fn fake_artifact(language: Language) -> Artifact {
    Artifact {
        language,
        path: PathBuf::from(format!("manual_{}.pdf", language.code())),
        size: 1024,
        omitted_images: Vec::new(),
    }
}

#[test]
fn unsupported_tags_are_skipped_and_the_rest_is_built() {
    let built = RefCell::new(Vec::new());
    let report = run_with(&["fr", "primary"], |language| {
        built.borrow_mut().push(language);
        Ok(fake_artifact(language))
    });

    assert_eq!(built.into_inner(), vec![Language::Italian]);
    assert_eq!(report.produced.len(), 1);
    assert_eq!(report.produced[0].language, Language::Italian);
    assert_eq!(report.skipped, vec![UnsupportedLanguageError("fr".into())]);
    assert!(report.failed.is_empty());
    assert!(report.is_success());
}

#[test]
fn a_failing_language_does_not_stop_the_others() {
    let report = run_with::<&str, _>(&[], |language| match language {
        Language::Italian => Err(BuildError::Io {
            path: PathBuf::from("/read-only/Tramando_Manuale_Italiano.pdf"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        }),
        Language::English => Ok(fake_artifact(language)),
    });

    assert_eq!(report.produced.len(), 1);
    assert_eq!(report.produced[0].language, Language::English);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, Language::Italian);
    assert!(!report.is_success());
}

#[test]
fn only_unknown_tags_produce_nothing() {
    let report = run_with(&["de", "fr"], |language| Ok(fake_artifact(language)));
    assert!(report.produced.is_empty());
    assert_eq!(report.skipped.len(), 2);
    assert!(!report.is_success());
}

#[test]
fn build_plan_reports_output_io_errors() {
    let dir = tempfile::tempdir().expect("temp dir");
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, b"file").expect("write blocker");

    let config = manual_pdf::ManualConfig::new()
        .with_output_dir(blocker.join("out"))
        .with_assets_dir(dir.path());
    if !manual_pdf::fonts::default_fonts_available(&config.font_locations()) {
        eprintln!("Skipping build_plan_reports_output_io_errors: bundled fonts missing.");
        return;
    }

    let styles = manual_pdf::StyleRegistry::manual_defaults().expect("default styles");
    let plan = manual_pdf::content::plan_for(Language::English);
    let err = manual_pdf::pipeline::build_plan(&plan, &styles, &config).unwrap_err();
    assert!(matches!(err, BuildError::Io { .. }));
}
