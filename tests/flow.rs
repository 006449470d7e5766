use std::fs;

use image::{ImageBuffer, Rgb};
use manual_pdf::content;
use manual_pdf::flow::LayoutBlock;
use manual_pdf::image_fit::ImageFitter;
use manual_pdf::model::{ImageRef, TableSpec};
use manual_pdf::style::{names, COLOR_LIGHT, COLOR_PRIMARY};
use manual_pdf::{
    AssembledDocument, AssetResolver, ContentBlock, ContentChapter, DocumentPlan, FlowAssembler,
    FlowProfile, FrontMatter, Language, StyleRegistry,
};

fn front() -> FrontMatter {
    FrontMatter::new("Tramando", "Weave your story", "User Manual", "Version 1.1", "Contents")
}

fn assemble(plan: &DocumentPlan, assets: AssetResolver) -> AssembledDocument {
    let styles = StyleRegistry::manual_defaults().expect("default styles");
    FlowAssembler::new(&styles, ImageFitter::default(), assets, FlowProfile::rich())
        .assemble(plan)
        .expect("plan assembles")
}

fn texts(doc: &AssembledDocument, style: &str) -> Vec<String> {
    doc.blocks
        .iter()
        .filter_map(LayoutBlock::as_text)
        .filter(|text| text.style().name() == style)
        .map(|text| text.plain_text())
        .collect()
}

/// Chapter headings printed in the body, after the cover and table of contents pages.
fn body_chapter_titles(doc: &AssembledDocument) -> Vec<String> {
    let mut breaks = 0;
    doc.blocks
        .iter()
        .filter(|block| {
            if block.is_page_break() {
                breaks += 1;
            }
            breaks >= 2
        })
        .filter_map(LayoutBlock::as_text)
        .filter(|text| text.style().name() == names::CHAPTER_TITLE)
        .map(|text| text.plain_text())
        .collect()
}

#[test]
fn two_chapter_manual_with_missing_image_and_table() {
    let assets = tempfile::tempdir().expect("temp dir");
    let plan = DocumentPlan::new(Language::English, "Tramando_Manual_English.pdf", front())
        .with_chapter(
            ContentChapter::new("introduction", "1. Introduction").with_blocks([
                ContentBlock::section("What is Tramando"),
                ContentBlock::Image(
                    ImageRef::new("absent.png", 140.0).with_caption("The welcome screen"),
                ),
                ContentBlock::Table(TableSpec::new([["Key", "Action"], ["Ctrl+Z", "Undo"]])),
            ]),
        )
        .with_chapter(
            ContentChapter::new("steps", "2. Getting Started").with_block(ContentBlock::numbered([
                "Open the file",
                "Edit the text",
                "Save",
            ])),
        );

    let doc = assemble(&plan, AssetResolver::new(assets.path()));

    assert_eq!(doc.toc, vec!["1. Introduction", "2. Getting Started"]);
    assert_eq!(texts(&doc, names::TOC_ENTRY), doc.toc);
    assert_eq!(body_chapter_titles(&doc), doc.toc);
    assert_eq!(doc.title, "Tramando - User Manual");

    assert_eq!(doc.omitted_images.len(), 1);
    assert!(doc.omitted_images[0].path.ends_with("en/absent.png"));
    assert!(texts(&doc, names::CAPTION).is_empty());

    let table = doc
        .blocks
        .iter()
        .find_map(|block| match block {
            LayoutBlock::Table(table) => Some(table),
            _ => None,
        })
        .expect("table emitted");
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.header().background(), Some(COLOR_PRIMARY));
    assert!(table.banded_rows().is_empty());

    assert_eq!(
        texts(&doc, names::BULLET_ITEM),
        vec!["1. Open the file", "2. Edit the text", "3. Save"]
    );

    let breaks = doc.blocks.iter().filter(|b| b.is_page_break()).count();
    assert_eq!(breaks, 3);
}

#[test]
fn bundled_manuals_list_every_chapter_in_the_toc() {
    let assets = tempfile::tempdir().expect("temp dir");
    for language in Language::ALL {
        let plan = content::plan_for(language);
        let doc = assemble(&plan, AssetResolver::new(assets.path()));
        let toc_lines = texts(&doc, names::TOC_ENTRY);
        assert_eq!(toc_lines, plan.table_of_contents(), "{:?}", language);
        assert_eq!(body_chapter_titles(&doc), toc_lines, "{:?}", language);
        // Cover, five screenshots; no assets are present in the temp dir.
        assert_eq!(doc.omitted_images.len(), 6);
    }
}

#[test]
fn bundled_tables_band_every_other_body_row() {
    let assets = tempfile::tempdir().expect("temp dir");
    let doc = assemble(
        &content::plan_for(Language::Italian),
        AssetResolver::new(assets.path()),
    );
    for block in &doc.blocks {
        if let LayoutBlock::Table(table) = block {
            for (index, row) in table.body().iter().enumerate() {
                let expected = (index + 1) >= 2 && (index + 1) % 2 == 0;
                assert_eq!(row.background() == Some(COLOR_LIGHT), expected);
            }
        }
    }
}

#[test]
fn present_images_are_fitted_and_captioned() {
    let assets = tempfile::tempdir().expect("temp dir");
    let dir = assets.path().join("it");
    fs::create_dir_all(&dir).expect("language dir");
    // 1000x3000 px at 140 mm wide would be 420 mm tall.
    ImageBuffer::from_pixel(1000, 3000, Rgb([240u8, 230, 210]))
        .save(dir.join("tall.png"))
        .expect("write png");

    let plan = DocumentPlan::new(Language::Italian, "test.pdf", front()).with_chapter(
        ContentChapter::new("images", "1. Immagini").with_block(ContentBlock::Image(
            ImageRef::new("tall.png", 140.0).with_caption("Una schermata"),
        )),
    );
    let doc = assemble(&plan, AssetResolver::new(assets.path()));

    assert!(doc.omitted_images.is_empty());
    let fitted = doc
        .blocks
        .iter()
        .find_map(|block| match block {
            LayoutBlock::Image(image) => Some(image),
            _ => None,
        })
        .expect("image emitted");
    assert!(fitted.layout.resized);
    assert!((fitted.layout.height_mm - 180.0).abs() < 1e-9);
    assert!((fitted.layout.width_mm - 60.0).abs() < 1e-9);
    assert_eq!(texts(&doc, names::CAPTION), vec!["Una schermata"]);
}
