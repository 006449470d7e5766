//! Turns a [`DocumentPlan`] into the ordered sequence of layout blocks handed to the renderer.
//!
//! The assembler owns every ordering decision: cover, table of contents, then the chapters in
//! declaration order, each starting on a fresh page.  It resolves styles by block kind, sizes
//! images through the [`ImageFitter`] and validates tables through the [`TableBuilder`].
//! Image failures are recovered from; table failures abort the build.

use std::path::PathBuf;

use log::{debug, info, warn};

use crate::error::{BuildError, ImageUnavailableError};
use crate::image_fit::{FittedImage, ImageFitter, ImageRequest};
use crate::model::{ContentBlock, DocumentPlan, HeadingLevel, ImageRef, Language};
use crate::richtext::{parse_or_plain, plain_text, Span};
use crate::style::{names, StyleRegistry, StyleSpec};
use crate::table::{TableBlock, TableBuilder};

/// A run of styled text rendered as one paragraph.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    style: StyleSpec,
    prefix: Option<String>,
    spans: Vec<Span>,
}

impl TextBlock {
    pub fn new(style: StyleSpec, spans: Vec<Span>) -> Self {
        Self {
            style,
            prefix: None,
            spans,
        }
    }

    /// Adds a list marker printed before the spans in the block's base style.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn style(&self) -> &StyleSpec {
        &self.style
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Prefix and text without any styling.
    pub fn plain_text(&self) -> String {
        let mut text = self.prefix.clone().unwrap_or_default();
        text.push_str(&plain_text(&self.spans));
        text
    }
}

/// One entry of the assembled flow.
#[derive(Clone, Debug)]
pub enum LayoutBlock {
    Text(TextBlock),
    /// Vertical gap in millimetres.
    Spacer(f64),
    Image(FittedImage),
    Table(TableBlock),
    /// Literal text, one line per source line.
    Code { text: String, style: StyleSpec },
    PageBreak,
}

impl LayoutBlock {
    /// The text block, if this is one.
    pub fn as_text(&self) -> Option<&TextBlock> {
        match self {
            LayoutBlock::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_page_break(&self) -> bool {
        matches!(self, LayoutBlock::PageBreak)
    }
}

/// Switches that select between the rich and the plain rendition of the manual.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowProfile {
    inline_markup: bool,
    bullet: String,
    cover_top_mm: f64,
    cover_image_width_mm: f64,
    table_space_before_mm: f64,
    table_space_after_mm: f64,
}

impl Default for FlowProfile {
    fn default() -> Self {
        Self::rich()
    }
}

impl FlowProfile {
    /// Emphasis markup enabled, bullet glyph markers.
    pub fn rich() -> Self {
        Self {
            inline_markup: true,
            bullet: "\u{2022} ".to_owned(),
            cover_top_mm: 40.0,
            cover_image_width_mm: 120.0,
            table_space_before_mm: 2.0,
            table_space_after_mm: 3.0,
        }
    }

    /// Markup stripped to plain text, dash markers.
    pub fn plain() -> Self {
        Self {
            inline_markup: false,
            bullet: "- ".to_owned(),
            ..Self::rich()
        }
    }

    pub fn inline_markup(&self) -> bool {
        self.inline_markup
    }

    pub fn bullet(&self) -> &str {
        &self.bullet
    }

    pub fn cover_image_width_mm(&self) -> f64 {
        self.cover_image_width_mm
    }

    pub fn with_bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullet = bullet.into();
        self
    }

    pub fn with_cover_image_width_mm(mut self, width_mm: f64) -> Self {
        self.cover_image_width_mm = width_mm;
        self
    }

    /// Gaps placed above and below every table, in millimetres.
    pub fn with_table_spacing(mut self, before_mm: f64, after_mm: f64) -> Self {
        self.table_space_before_mm = before_mm;
        self.table_space_after_mm = after_mm;
        self
    }

    pub fn with_cover_top_mm(mut self, top_mm: f64) -> Self {
        self.cover_top_mm = top_mm;
        self
    }
}

/// Maps image file names onto `<root>/<language code>/<file>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    pub fn resolve(&self, language: Language, file: &str) -> PathBuf {
        self.root.join(language.code()).join(file)
    }
}

/// Output of [`FlowAssembler::assemble`].
#[derive(Debug)]
pub struct AssembledDocument {
    pub language: Language,
    pub file_name: String,
    /// Document title, also printed in the running header.
    pub title: String,
    pub blocks: Vec<LayoutBlock>,
    /// Table of contents entries as emitted.
    pub toc: Vec<String>,
    /// Chapter headings as emitted in the body.
    pub chapter_headings: Vec<String>,
    /// Images that were skipped.
    pub omitted_images: Vec<ImageUnavailableError>,
}

/// Strips a literal enumerator such as `3.` or `2)` from the start of a list item.
pub fn strip_enumerator(item: &str) -> &str {
    let trimmed = item.trim_start();
    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return item;
    }
    let rest = &trimmed[digits..];
    match rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
        Some(after) if after.is_empty() || after.starts_with(char::is_whitespace) => {
            after.trim_start()
        }
        _ => item,
    }
}

/// Marker for the item at zero-based `index` of a numbered list.
pub fn numbered_prefix(index: usize) -> String {
    format!("{}. ", index + 1)
}

/// Walks a [`DocumentPlan`] and emits the layout flow.
pub struct FlowAssembler<'a> {
    styles: &'a StyleRegistry,
    fitter: ImageFitter,
    assets: AssetResolver,
    profile: FlowProfile,
}

impl<'a> FlowAssembler<'a> {
    pub fn new(
        styles: &'a StyleRegistry,
        fitter: ImageFitter,
        assets: AssetResolver,
        profile: FlowProfile,
    ) -> Self {
        Self {
            styles,
            fitter,
            assets,
            profile,
        }
    }

    pub fn assemble(&self, plan: &DocumentPlan) -> Result<AssembledDocument, BuildError> {
        let tables = TableBuilder::new(self.styles)?;
        let front = plan.front();
        let mut flow = Flow {
            assembler: self,
            language: plan.language(),
            blocks: Vec::new(),
            omitted_images: Vec::new(),
        };
        info!(
            "Assembling {} ({} chapters)",
            plan.file_name(),
            plan.chapters().len()
        );

        flow.spacer(self.profile.cover_top_mm);
        flow.text(names::COVER_TITLE, front.title())?;
        flow.text(names::COVER_SUBTITLE, front.tagline())?;
        flow.spacer(5.0);
        flow.text(names::COVER_SUBTITLE, front.subtitle())?;
        flow.spacer(10.0);
        if let Some(cover) = front.cover_image() {
            let cover = ImageRef::new(cover.file(), self.profile.cover_image_width_mm);
            flow.image(&cover)?;
        }
        flow.spacer(10.0);
        flow.text(names::BODY, front.version())?;
        flow.page_break();

        let toc: Vec<String> = plan
            .table_of_contents()
            .into_iter()
            .map(str::to_owned)
            .collect();
        flow.text(names::CHAPTER_TITLE, front.toc_title())?;
        flow.spacer(5.0);
        for entry in &toc {
            flow.literal(names::TOC_ENTRY, entry)?;
        }
        flow.page_break();

        let mut chapter_headings = Vec::with_capacity(plan.chapters().len());
        for (index, chapter) in plan.chapters().iter().enumerate() {
            flow.literal(names::CHAPTER_TITLE, chapter.title())?;
            chapter_headings.push(chapter.title().to_owned());

            for block in chapter.blocks() {
                match block {
                    ContentBlock::Heading { level, text } => {
                        let style = match level {
                            HeadingLevel::Section => names::SECTION_TITLE,
                            HeadingLevel::Subsection => names::SUBSECTION_TITLE,
                        };
                        flow.text(style, text)?;
                    }
                    ContentBlock::Paragraph(text) => flow.text(names::BODY, text)?,
                    ContentBlock::BulletList(items) => {
                        for item in items {
                            flow.list_item(self.profile.bullet(), item)?;
                        }
                    }
                    ContentBlock::NumberedList(items) => {
                        for (position, item) in items.iter().enumerate() {
                            flow.list_item(&numbered_prefix(position), strip_enumerator(item))?;
                        }
                    }
                    ContentBlock::CodeBlock(text) => {
                        let style = self.styles.resolve(names::CODE_BLOCK)?.clone();
                        flow.blocks.push(LayoutBlock::Code {
                            text: text.clone(),
                            style,
                        });
                    }
                    ContentBlock::Table(spec) => {
                        let table = tables.build(spec).map_err(|source| BuildError::Table {
                            chapter: chapter.identifier().to_owned(),
                            source,
                        })?;
                        flow.spacer(self.profile.table_space_before_mm);
                        flow.blocks.push(LayoutBlock::Table(table));
                        flow.spacer(self.profile.table_space_after_mm);
                    }
                    ContentBlock::Image(image) => flow.image(image)?,
                    ContentBlock::Note(text) => flow.text(names::NOTE, text)?,
                    ContentBlock::PageBreakMarker => flow.page_break(),
                    ContentBlock::Spacer(height_mm) => flow.spacer(*height_mm),
                    ContentBlock::Caption(text) => flow.text(names::CAPTION, text)?,
                }
            }

            if index + 1 < plan.chapters().len() {
                flow.page_break();
            }
        }

        debug!(
            "{} layout blocks, {} images omitted",
            flow.blocks.len(),
            flow.omitted_images.len()
        );

        Ok(AssembledDocument {
            language: plan.language(),
            file_name: plan.file_name().to_owned(),
            title: format!("{} - {}", front.title(), front.subtitle()),
            blocks: flow.blocks,
            toc,
            chapter_headings,
            omitted_images: flow.omitted_images,
        })
    }

    fn spans(&self, text: &str) -> Vec<Span> {
        let spans = parse_or_plain(text);
        if self.profile.inline_markup() {
            spans
        } else {
            vec![Span::new(plain_text(&spans))]
        }
    }
}

struct Flow<'s, 'a> {
    assembler: &'s FlowAssembler<'a>,
    language: Language,
    blocks: Vec<LayoutBlock>,
    omitted_images: Vec<ImageUnavailableError>,
}

impl Flow<'_, '_> {
    fn style(&self, name: &str) -> Result<StyleSpec, BuildError> {
        Ok(self.assembler.styles.resolve(name)?.clone())
    }

    fn text(&mut self, style: &str, text: &str) -> Result<(), BuildError> {
        let block = TextBlock::new(self.style(style)?, self.assembler.spans(text));
        self.blocks.push(LayoutBlock::Text(block));
        Ok(())
    }

    // Headings and TOC lines must match exactly, so they bypass markup.
    fn literal(&mut self, style: &str, text: &str) -> Result<(), BuildError> {
        let block = TextBlock::new(self.style(style)?, vec![Span::new(text)]);
        self.blocks.push(LayoutBlock::Text(block));
        Ok(())
    }

    fn list_item(&mut self, prefix: &str, text: &str) -> Result<(), BuildError> {
        let block = TextBlock::new(self.style(names::BULLET_ITEM)?, self.assembler.spans(text))
            .with_prefix(prefix);
        self.blocks.push(LayoutBlock::Text(block));
        Ok(())
    }

    fn image(&mut self, image: &ImageRef) -> Result<(), BuildError> {
        let path = self.assembler.assets.resolve(self.language, image.file());
        let request = ImageRequest::new(path, image.width_mm()).with_height_mm(image.height_mm());
        match self.assembler.fitter.fit(&request) {
            Ok(fitted) => {
                self.blocks.push(LayoutBlock::Image(fitted));
                if let Some(caption) = image.caption().filter(|c| !c.is_empty()) {
                    self.text(names::CAPTION, caption)?;
                }
            }
            Err(err) => {
                warn!("Image omitted: {err}");
                self.omitted_images.push(err);
            }
        }
        Ok(())
    }

    fn spacer(&mut self, height_mm: f64) {
        self.blocks.push(LayoutBlock::Spacer(height_mm));
    }

    fn page_break(&mut self) {
        self.blocks.push(LayoutBlock::PageBreak);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentChapter, FrontMatter, TableSpec};

    fn plan() -> DocumentPlan {
        DocumentPlan::new(
            Language::English,
            "test.pdf",
            FrontMatter::new("Tramando", "Weave your story", "User Manual", "v1", "Contents"),
        )
    }

    fn assemble_with(plan: &DocumentPlan, profile: FlowProfile) -> AssembledDocument {
        let styles = StyleRegistry::manual_defaults().expect("defaults");
        FlowAssembler::new(
            &styles,
            ImageFitter::default(),
            AssetResolver::new("/nonexistent-assets"),
            profile,
        )
        .assemble(plan)
        .expect("assembles")
    }

    fn texts_in(doc: &AssembledDocument, style: &str) -> Vec<String> {
        doc.blocks
            .iter()
            .filter_map(LayoutBlock::as_text)
            .filter(|text| text.style().name() == style)
            .map(TextBlock::plain_text)
            .collect()
    }

    #[test]
    fn strips_literal_enumerators() {
        assert_eq!(strip_enumerator("3. Open the file"), "Open the file");
        assert_eq!(strip_enumerator("2) Save"), "Save");
        assert_eq!(strip_enumerator("10.Export"), "10.Export");
        assert_eq!(strip_enumerator("2024 was a year"), "2024 was a year");
        assert_eq!(strip_enumerator("Plain item"), "Plain item");
    }

    #[test]
    fn numbered_lists_are_renumbered_from_position() {
        let plan = plan().with_chapter(
            ContentChapter::new("ch1", "1. Steps")
                .with_block(ContentBlock::numbered(["7. First", "Second", "1) Third"])),
        );
        let doc = assemble_with(&plan, FlowProfile::rich());
        assert_eq!(
            texts_in(&doc, names::BULLET_ITEM),
            vec!["1. First", "2. Second", "3. Third"]
        );
    }

    #[test]
    fn bullets_use_the_profile_glyph() {
        let plan = plan().with_chapter(
            ContentChapter::new("ch1", "1. List").with_block(ContentBlock::bullets(["**One**"])),
        );
        let rich = assemble_with(&plan, FlowProfile::rich());
        assert_eq!(texts_in(&rich, names::BULLET_ITEM), vec!["\u{2022} One"]);

        let plain = assemble_with(&plan, FlowProfile::plain());
        assert_eq!(texts_in(&plain, names::BULLET_ITEM), vec!["- One"]);
        let item = plain.blocks.iter().filter_map(LayoutBlock::as_text).last();
        assert!(item.map_or(false, |t| t.spans().iter().all(|s| !s.is_bold())));
    }

    #[test]
    fn missing_images_are_omitted_with_their_caption() {
        let plan = plan().with_chapter(
            ContentChapter::new("ch1", "1. Images")
                .with_block(ContentBlock::Image(
                    ImageRef::new("missing.png", 140.0).with_caption("Never shown"),
                ))
                .with_block(ContentBlock::paragraph("After")),
        );
        let doc = assemble_with(&plan, FlowProfile::rich());
        assert_eq!(doc.omitted_images.len(), 1);
        assert_eq!(
            doc.omitted_images[0].path,
            PathBuf::from("/nonexistent-assets/en/missing.png")
        );
        assert!(texts_in(&doc, names::CAPTION).is_empty());
        assert!(texts_in(&doc, names::BODY).contains(&"After".to_owned()));
    }

    #[test]
    fn chapters_are_separated_by_page_breaks_only() {
        let plan = plan()
            .with_chapter(ContentChapter::new("a", "1. A"))
            .with_chapter(ContentChapter::new("b", "2. B"));
        let doc = assemble_with(&plan, FlowProfile::rich());
        let breaks = doc.blocks.iter().filter(|b| b.is_page_break()).count();
        // cover, toc, between the two chapters
        assert_eq!(breaks, 3);
        assert!(!doc.blocks.last().map_or(false, LayoutBlock::is_page_break));
        assert_eq!(doc.toc, doc.chapter_headings);
        assert_eq!(texts_in(&doc, names::TOC_ENTRY), vec!["1. A", "2. B"]);
    }

    #[test]
    fn tables_are_wrapped_in_spacers() {
        let table = TableSpec::new(vec![vec!["Key", "Action"], vec!["Ctrl+S", "Save"]]);
        let plan = plan().with_chapter(
            ContentChapter::new("keys", "1. Keys").with_block(ContentBlock::Table(table)),
        );
        let doc = assemble_with(&plan, FlowProfile::rich());
        let position = doc
            .blocks
            .iter()
            .position(|b| matches!(b, LayoutBlock::Table(_)))
            .expect("table emitted");
        assert!(matches!(doc.blocks[position - 1], LayoutBlock::Spacer(h) if h == 2.0));
        assert!(matches!(doc.blocks[position + 1], LayoutBlock::Spacer(h) if h == 3.0));
    }

    #[test]
    fn ragged_table_aborts_the_build() {
        let table = TableSpec::new(vec![vec!["Key", "Action"], vec!["Ctrl+S"]]);
        let plan = plan().with_chapter(
            ContentChapter::new("keys", "1. Keys").with_block(ContentBlock::Table(table)),
        );
        let styles = StyleRegistry::manual_defaults().expect("defaults");
        let err = FlowAssembler::new(
            &styles,
            ImageFitter::default(),
            AssetResolver::new("images"),
            FlowProfile::rich(),
        )
        .assemble(&plan)
        .unwrap_err();
        assert!(matches!(err, BuildError::Table { ref chapter, .. } if chapter == "keys"));
    }

    #[test]
    fn unknown_styles_surface_immediately() {
        let styles = StyleRegistry::builder().build();
        let err = FlowAssembler::new(
            &styles,
            ImageFitter::default(),
            AssetResolver::new("images"),
            FlowProfile::rich(),
        )
        .assemble(&plan())
        .unwrap_err();
        assert!(matches!(err, BuildError::Style(_)));
    }
}
