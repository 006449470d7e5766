//! Data structures describing the content of a manual.
//!
//! The model carries no styling at all: the flow assembler resolves styles from the block
//! kind when it walks a [`DocumentPlan`].  Text fields may contain the inline markup
//! understood by [`crate::richtext`], except for table cells and code blocks which are
//! always rendered literally.

use crate::error::InvalidTableShapeError;

/// Supported manual languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    /// Italian, the primary edition.
    Italian,
    /// English, the secondary edition.
    English,
}

impl Language {
    /// All languages in build order.
    pub const ALL: [Language; 2] = [Language::Italian, Language::English];

    /// Canonical invocation tag.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Italian => "primary",
            Language::English => "secondary",
        }
    }

    /// ISO 639-1 code, also used as the asset sub-directory.
    pub fn code(self) -> &'static str {
        match self {
            Language::Italian => "it",
            Language::English => "en",
        }
    }

    /// Parses an invocation tag (`primary`/`secondary`, or the `it`/`en` aliases).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "primary" | "it" => Some(Language::Italian),
            "secondary" | "en" => Some(Language::English),
            _ => None,
        }
    }
}

/// Level of an in-chapter heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    Section,
    Subsection,
}

/// Reference to an image asset inside the language's asset directory.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageRef {
    file: String,
    caption: Option<String>,
    width_mm: f64,
    height_mm: Option<f64>,
}

impl ImageRef {
    /// Creates a reference to `file` displayed `width_mm` wide.
    pub fn new(file: impl Into<String>, width_mm: f64) -> Self {
        Self {
            file: file.into(),
            caption: None,
            width_mm,
            height_mm: None,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Requested display width in millimetres.
    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    /// Explicit display height in millimetres.  When set, the height ceiling is not applied.
    pub fn height_mm(&self) -> Option<f64> {
        self.height_mm
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_height_mm(mut self, height_mm: f64) -> Self {
        self.height_mm = Some(height_mm);
        self
    }
}

/// A grid of text cells whose first row is the header.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableSpec {
    rows: Vec<Vec<String>>,
    column_widths_mm: Option<Vec<f64>>,
}

impl TableSpec {
    /// Creates a table from rows of cells.  Shape is validated by the table builder.
    pub fn new<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            column_widths_mm: None,
        }
    }

    /// Sets explicit column widths in millimetres.
    pub fn with_column_widths_mm(mut self, widths: impl Into<Vec<f64>>) -> Self {
        self.column_widths_mm = Some(widths.into());
        self
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_widths_mm(&self) -> Option<&[f64]> {
        self.column_widths_mm.as_deref()
    }

    /// Number of columns, taken from the header row.
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Checks that every row, and the explicit widths if any, match the header.
    pub fn validate(&self) -> Result<(), InvalidTableShapeError> {
        let header = self.rows.first().ok_or(InvalidTableShapeError::Empty)?;
        let expected = header.len();
        if let Some((row, cells)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(InvalidTableShapeError::RaggedRow {
                row,
                expected,
                found: cells.len(),
            });
        }
        if let Some(widths) = &self.column_widths_mm {
            if widths.len() != expected {
                return Err(InvalidTableShapeError::ColumnWidths {
                    expected,
                    found: widths.len(),
                });
            }
        }
        Ok(())
    }
}

/// One entry of a chapter.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentBlock {
    /// In-chapter heading.
    Heading { level: HeadingLevel, text: String },
    /// Body paragraph.
    Paragraph(String),
    /// Bulleted list, one entry per item.
    BulletList(Vec<String>),
    /// Numbered list.  Numbers are derived from position, never from the item text.
    NumberedList(Vec<String>),
    /// Literal monospace text; line breaks are preserved.
    CodeBlock(String),
    /// Reference table.
    Table(TableSpec),
    /// Image with optional caption.
    Image(ImageRef),
    /// Muted, indented remark.
    Note(String),
    /// Forces the next block onto a new page.
    PageBreakMarker,
    /// Vertical gap in millimetres.
    Spacer(f64),
    /// Standalone caption line.
    Caption(String),
}

impl ContentBlock {
    pub fn section(text: impl Into<String>) -> Self {
        Self::Heading {
            level: HeadingLevel::Section,
            text: text.into(),
        }
    }

    pub fn subsection(text: impl Into<String>) -> Self {
        Self::Heading {
            level: HeadingLevel::Subsection,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(text.into())
    }

    pub fn bullets<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::BulletList(items.into_iter().map(Into::into).collect())
    }

    pub fn numbered<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::NumberedList(items.into_iter().map(Into::into).collect())
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::CodeBlock(text.into())
    }

    pub fn note(text: impl Into<String>) -> Self {
        Self::Note(text.into())
    }

    pub fn caption(text: impl Into<String>) -> Self {
        Self::Caption(text.into())
    }
}

/// A chapter of the manual.  Every chapter starts on a new page.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentChapter {
    identifier: String,
    title: String,
    blocks: Vec<ContentBlock>,
}

impl ContentChapter {
    pub fn new(identifier: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    /// Appends a block and returns the updated chapter.
    pub fn with_block(mut self, block: ContentBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// Extends the chapter with multiple blocks and returns the updated instance.
    pub fn with_blocks<I>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = ContentBlock>,
    {
        self.blocks.extend(blocks);
        self
    }
}

/// Cover page and table of contents metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct FrontMatter {
    title: String,
    tagline: String,
    subtitle: String,
    version: String,
    toc_title: String,
    cover_image: Option<ImageRef>,
}

impl FrontMatter {
    pub fn new(
        title: impl Into<String>,
        tagline: impl Into<String>,
        subtitle: impl Into<String>,
        version: impl Into<String>,
        toc_title: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            tagline: tagline.into(),
            subtitle: subtitle.into(),
            version: version.into(),
            toc_title: toc_title.into(),
            cover_image: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn toc_title(&self) -> &str {
        &self.toc_title
    }

    pub fn cover_image(&self) -> Option<&ImageRef> {
        self.cover_image.as_ref()
    }

    pub fn with_cover_image(mut self, image: ImageRef) -> Self {
        self.cover_image = Some(image);
        self
    }
}

/// Everything needed to build one language's manual.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentPlan {
    language: Language,
    file_name: String,
    front: FrontMatter,
    chapters: Vec<ContentChapter>,
}

impl DocumentPlan {
    pub fn new(language: Language, file_name: impl Into<String>, front: FrontMatter) -> Self {
        Self {
            language,
            file_name: file_name.into(),
            front,
            chapters: Vec::new(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// File name of the artifact written for this plan.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn front(&self) -> &FrontMatter {
        &self.front
    }

    pub fn chapters(&self) -> &[ContentChapter] {
        &self.chapters
    }

    /// Table of contents: the chapter titles in declaration order.
    pub fn table_of_contents(&self) -> Vec<&str> {
        self.chapters.iter().map(ContentChapter::title).collect()
    }

    /// Appends a chapter and returns the updated plan.
    pub fn with_chapter(mut self, chapter: ContentChapter) -> Self {
        self.chapters.push(chapter);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_tags_and_aliases() {
        assert_eq!(Language::from_tag("primary"), Some(Language::Italian));
        assert_eq!(Language::from_tag("IT"), Some(Language::Italian));
        assert_eq!(Language::from_tag("secondary"), Some(Language::English));
        assert_eq!(Language::from_tag(" en "), Some(Language::English));
        assert_eq!(Language::from_tag("fr"), None);
        assert_eq!(Language::English.code(), "en");
    }

    #[test]
    fn uniform_tables_validate() {
        for (rows, cols) in [(1, 1), (1, 4), (5, 2), (12, 3)] {
            let table = TableSpec::new((0..rows).map(|r| (0..cols).map(move |c| format!("{r}:{c}"))));
            assert!(table.validate().is_ok(), "{rows}x{cols} should validate");
        }
    }

    #[test]
    fn ragged_row_is_reported_with_position() {
        let table = TableSpec::new(vec![vec!["a", "b"], vec!["1", "2"], vec!["3"]]);
        assert_eq!(
            table.validate(),
            Err(InvalidTableShapeError::RaggedRow {
                row: 2,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn empty_table_and_width_mismatch_are_invalid() {
        let empty = TableSpec::new(Vec::<Vec<String>>::new());
        assert_eq!(empty.validate(), Err(InvalidTableShapeError::Empty));

        let widths = TableSpec::new(vec![vec!["a", "b"]]).with_column_widths_mm(vec![40.0]);
        assert_eq!(
            widths.validate(),
            Err(InvalidTableShapeError::ColumnWidths {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn toc_lists_chapter_titles_in_order() {
        let plan = DocumentPlan::new(
            Language::English,
            "manual.pdf",
            FrontMatter::new("T", "tag", "sub", "v1", "Contents"),
        )
        .with_chapter(ContentChapter::new("ch1", "1. Intro"))
        .with_chapter(ContentChapter::new("ch2", "2. Next"));
        assert_eq!(plan.table_of_contents(), vec!["1. Intro", "2. Next"]);
    }
}
