use std::path::Path;

use image::{ImageBuffer, Rgb};
use manual_pdf::builder::ManualRenderer;
use manual_pdf::fonts::{self, FontLocations};
use manual_pdf::image_fit::ImageFitter;
use manual_pdf::model::{ImageRef, TableSpec};
use manual_pdf::{
    AssetResolver, ContentBlock, ContentChapter, DocumentPlan, FlowAssembler, FlowProfile,
    FrontMatter, Language, ManualConfig, StyleRegistry,
};
use sha2::{Digest, Sha256};

const SKIP_REASON: &str =
    "bundled fonts missing. Set MANUAL_PDF_FONTS_DIR or copy assets/fonts next to the binary.";

fn front() -> FrontMatter {
    FrontMatter::new("Tramando", "Weave your story", "User Manual", "v1", "Contents")
}

fn single_chapter(blocks: Vec<ContentBlock>) -> DocumentPlan {
    DocumentPlan::new(Language::English, "single.pdf", front())
        .with_chapter(ContentChapter::new("one", "1. Sample").with_blocks(blocks))
}

fn sample_plan() -> DocumentPlan {
    DocumentPlan::new(Language::English, "sample.pdf", front())
        .with_chapter(ContentChapter::new("one", "1. Sample").with_blocks([
            ContentBlock::section("Hello"),
            ContentBlock::paragraph("Hello, **PDF**!"),
            ContentBlock::bullets(["*First*", "Second"]),
            ContentBlock::code("[C:id\"Title\"]\n  nested line"),
            ContentBlock::note("A note"),
        ]))
        .with_chapter(ContentChapter::new("two", "2. Tables").with_block(
            ContentBlock::Table(
                TableSpec::new([
                    ["Shortcut", "Action"],
                    ["Ctrl/Cmd + Z", "Undo"],
                    ["Ctrl/Cmd + Shift + Z", "Redo"],
                    ["Escape", "Close modals and search bar"],
                ])
                .with_column_widths_mm([60.0, 80.0]),
            ),
        ))
}

fn render_plan(plan: &DocumentPlan, assets_dir: &Path) -> Option<Vec<u8>> {
    if !fonts::default_fonts_available(&FontLocations::default()) {
        return None;
    }

    let config = ManualConfig::new().with_assets_dir(assets_dir);
    let styles = StyleRegistry::manual_defaults().expect("default styles");
    let assembled = FlowAssembler::new(
        &styles,
        ImageFitter::default(),
        AssetResolver::new(config.assets_dir()),
        FlowProfile::rich(),
    )
    .assemble(plan)
    .expect("assemble plan");

    let bytes = ManualRenderer::new(&config)
        .render(assembled)
        .expect("render pdf");
    Some(bytes)
}

fn render_sample_pdf() -> Option<Vec<u8>> {
    render_plan(&sample_plan(), Path::new("/nonexistent-assets"))
}

/// Largest `/Count` entry, which is the page count of the root page tree.
fn page_count(bytes: &[u8]) -> usize {
    const TAG: &[u8] = b"/Count";
    bytes
        .windows(TAG.len())
        .enumerate()
        .filter(|(_, window)| *window == TAG)
        .filter_map(|(index, _)| {
            let digits: String = bytes[index + TAG.len()..]
                .iter()
                .skip_while(|byte| byte.is_ascii_whitespace())
                .take_while(|byte| byte.is_ascii_digit())
                .map(|&byte| char::from(byte))
                .collect();
            digits.parse().ok()
        })
        .max()
        .unwrap_or(0)
}

/// Number of image XObjects; `/ImageB`-style procedure set names do not count.
fn image_count(bytes: &[u8]) -> usize {
    const TAG: &[u8] = b"/Image";
    bytes
        .windows(TAG.len() + 1)
        .filter(|window| window.starts_with(TAG) && !window[TAG.len()].is_ascii_alphanumeric())
        .count()
}

fn scrub_pdf(bytes: &[u8]) -> Vec<u8> {
    fn scrub_segment(data: &mut [u8], tag: &[u8], terminator: u8) {
        let mut index = 0;
        while index + tag.len() < data.len() {
            if data[index..].starts_with(tag) {
                let mut cursor = index + tag.len();
                while cursor < data.len() {
                    let byte = data[cursor];
                    if byte == terminator {
                        break;
                    }
                    if terminator == b')' {
                        data[cursor] = b'0';
                    } else if !matches!(byte, b'<' | b'>' | b' ' | b'\n' | b'\r' | b'\t') {
                        data[cursor] = b'0';
                    }
                    cursor += 1;
                }
                index = cursor;
            } else {
                index += 1;
            }
        }
    }

    fn scrub_xml(data: &mut [u8], start: &[u8], end: &[u8]) {
        let mut offset = 0;
        while offset + start.len() < data.len() {
            if let Some(start_pos) = data[offset..]
                .windows(start.len())
                .position(|window| window == start)
            {
                let start_index = offset + start_pos + start.len();
                if let Some(end_pos) = data[start_index..]
                    .windows(end.len())
                    .position(|window| window == end)
                {
                    for byte in &mut data[start_index..start_index + end_pos] {
                        if !matches!(*byte, b'<' | b'>' | b'/' | b' ' | b'\n' | b'\r' | b'\t') {
                            *byte = b'0';
                        }
                    }
                    offset = start_index + end_pos + end.len();
                } else {
                    break;
                }
            } else {
                break;
            }
        }
    }

    let mut normalized = bytes.to_vec();
    scrub_segment(&mut normalized, b"/CreationDate(", b')');
    scrub_segment(&mut normalized, b"/ModDate(", b')');
    scrub_segment(&mut normalized, b"/ID[", b']');
    scrub_segment(&mut normalized, b"/Producer(", b')');
    scrub_xml(&mut normalized, b"<xmp:CreateDate>", b"</xmp:CreateDate>");
    scrub_xml(&mut normalized, b"<xmp:ModifyDate>", b"</xmp:ModifyDate>");
    scrub_xml(
        &mut normalized,
        b"<xmp:MetadataDate>",
        b"</xmp:MetadataDate>",
    );
    scrub_xml(
        &mut normalized,
        b"<xmpMM:DocumentID>",
        b"</xmpMM:DocumentID>",
    );
    scrub_xml(
        &mut normalized,
        b"<xmpMM:InstanceID>",
        b"</xmpMM:InstanceID>",
    );
    scrub_xml(&mut normalized, b"<xmpMM:VersionID>", b"</xmpMM:VersionID>");
    normalized
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    let normalized = scrub_pdf(bytes);
    let digest = Sha256::digest(&normalized);
    digest.into()
}

#[test]
fn renders_non_empty_output() {
    let Some(bytes) = render_sample_pdf() else {
        eprintln!("Skipping renders_non_empty_output: {SKIP_REASON}");
        return;
    };
    assert!(bytes.starts_with(b"%PDF"), "rendered output should be a PDF");
}

#[test]
fn rendering_is_deterministic() {
    let (Some(bytes_a), Some(bytes_b)) = (render_sample_pdf(), render_sample_pdf()) else {
        eprintln!("Skipping rendering_is_deterministic: {SKIP_REASON}");
        return;
    };

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");

    let hash_a = normalized_hash(&bytes_a);
    let hash_b = normalized_hash(&bytes_b);

    assert_eq!(
        hash_a, hash_b,
        "PDF renders must be deterministic after metadata normalization"
    );
}

#[test]
fn renders_the_bundled_manual_without_screenshots() {
    if !fonts::default_fonts_available(&FontLocations::default()) {
        eprintln!("Skipping renders_the_bundled_manual_without_screenshots: {SKIP_REASON}");
        return;
    }

    let dir = tempfile::tempdir().expect("temp dir");
    let config = ManualConfig::new()
        .with_output_dir(dir.path())
        .with_assets_dir(dir.path().join("images"));
    let report = manual_pdf::pipeline::run(&["secondary"], &config).expect("default styles");

    assert!(report.is_success());
    let artifact = &report.produced[0];
    assert_eq!(artifact.path, dir.path().join("Tramando_Manual_English.pdf"));
    assert_eq!(artifact.omitted_images.len(), 6);
    let written = std::fs::read(&artifact.path).expect("artifact written");
    assert_eq!(written.len(), artifact.size);
}

#[test]
fn tables_and_code_are_painted_with_fills() {
    let plain = single_chapter(vec![ContentBlock::paragraph("Just text")]);
    let tinted = single_chapter(vec![
        ContentBlock::paragraph("Just text"),
        ContentBlock::Table(TableSpec::new([
            ["Key", "Action"],
            ["Ctrl+Z", "Undo"],
            ["Ctrl+Y", "Redo"],
        ])),
        ContentBlock::code("[C:id\"Title\"]"),
    ]);
    let (Some(without), Some(with)) = (
        render_plan(&plain, Path::new("/nonexistent-assets")),
        render_plan(&tinted, Path::new("/nonexistent-assets")),
    ) else {
        eprintln!("Skipping tables_and_code_are_painted_with_fills: {SKIP_REASON}");
        return;
    };

    // Header row, the second body row and the code background.
    assert_eq!(image_count(&with), image_count(&without) + 3);
}

#[test]
fn images_that_do_not_fit_move_to_the_next_page() {
    let assets = tempfile::tempdir().expect("temp dir");
    let dir = assets.path().join("en");
    std::fs::create_dir_all(&dir).expect("language dir");
    ImageBuffer::from_pixel(1000, 3000, Rgb([240u8, 230, 210]))
        .save(dir.join("tall.png"))
        .expect("write png");

    let image = || ContentBlock::Image(ImageRef::new("tall.png", 60.0));
    let (Some(top), Some(low)) = (
        render_plan(&single_chapter(vec![image()]), assets.path()),
        render_plan(
            &single_chapter(vec![ContentBlock::Spacer(150.0), image()]),
            assets.path(),
        ),
    ) else {
        eprintln!("Skipping images_that_do_not_fit_move_to_the_next_page: {SKIP_REASON}");
        return;
    };

    // Cover, contents and the chapter page.
    assert_eq!(page_count(&top), 3);
    assert_eq!(page_count(&low), 4);
}

#[test]
fn oversized_table_rows_continue_on_the_next_pages() {
    let long_cell = vec!["word"; 4000].join(" ");
    let plan = single_chapter(vec![ContentBlock::Table(TableSpec::new([
        ["Field".to_owned(), "Value".to_owned()],
        ["Notes".to_owned(), long_cell],
    ]))]);
    let Some(bytes) = render_plan(&plan, Path::new("/nonexistent-assets")) else {
        eprintln!("Skipping oversized_table_rows_continue_on_the_next_pages: {SKIP_REASON}");
        return;
    };

    assert!(page_count(&bytes) > 4, "the long row spans several pages");
}
