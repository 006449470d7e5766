//! Named paragraph and table styles.
//!
//! Styles are registered once on a [`StyleRegistryBuilder`] and then frozen into a
//! [`StyleRegistry`], which only supports lookups.  The frozen registry is passed by
//! reference to the flow assembler and the renderer.

use std::collections::HashMap;

use genpdf::style::{Color, Style};
use genpdf::{Alignment, Margins};

use crate::elements::mm_from_f64;
use crate::error::StyleError;

/// Primary accent ("Tramando red").
pub const COLOR_PRIMARY: Color = Color::Rgb(0xc4, 0x4a, 0x4a);
/// Main text color.
pub const COLOR_TEXT: Color = Color::Rgb(0x3d, 0x32, 0x25);
/// Secondary, muted text color.
pub const COLOR_MUTED: Color = Color::Rgb(0x7a, 0x6f, 0x5d);
/// Background of code blocks.
pub const COLOR_BEIGE: Color = Color::Rgb(0xf5, 0xf0, 0xe6);
/// Background tint of banded table rows.
pub const COLOR_LIGHT: Color = Color::Rgb(0xfa, 0xf8, 0xf5);
/// Inverse text color used on accent backgrounds.
pub const COLOR_WHITE: Color = Color::Rgb(0xff, 0xff, 0xff);

/// Style names registered by [`StyleRegistry::manual_defaults`].
pub mod names {
    pub const COVER_TITLE: &str = "CoverTitle";
    pub const COVER_SUBTITLE: &str = "CoverSubtitle";
    pub const CHAPTER_TITLE: &str = "ChapterTitle";
    pub const SECTION_TITLE: &str = "SectionTitle";
    pub const SUBSECTION_TITLE: &str = "SubsectionTitle";
    pub const BODY: &str = "Body";
    pub const BODY_LEFT: &str = "BodyLeft";
    pub const BULLET_ITEM: &str = "BulletItem";
    pub const CODE_BLOCK: &str = "CodeBlock";
    pub const NOTE: &str = "Note";
    pub const CAPTION: &str = "Caption";
    pub const TOC_ENTRY: &str = "TOCEntry";
    pub const TABLE_HEADER: &str = "TableHeader";
    pub const TABLE_CELL: &str = "TableCell";
}

/// Horizontal alignment of a text block.
///
/// `genpdf` cannot justify text, so [`HorizontalAlignment::Justified`] is rendered
/// left-aligned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Left aligned content.
    #[default]
    Left,
    /// Center aligned content.
    Center,
    /// Right aligned content.
    Right,
    /// Fully justified paragraphs.
    Justified,
}

impl HorizontalAlignment {
    /// Maps the alignment onto the closest [`genpdf::Alignment`].
    pub fn to_genpdf(self) -> Alignment {
        match self {
            HorizontalAlignment::Left | HorizontalAlignment::Justified => Alignment::Left,
            HorizontalAlignment::Center => Alignment::Center,
            HorizontalAlignment::Right => Alignment::Right,
        }
    }
}

/// Font family role a style draws from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontRole {
    /// The document's proportional family.
    #[default]
    Sans,
    /// The monospace family used for code.
    Mono,
}

/// Typographic settings for one kind of block.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSpec {
    name: String,
    font: FontRole,
    size: u8,
    color: Color,
    alignment: HorizontalAlignment,
    bold: bool,
    italic: bool,
    space_before_mm: f64,
    space_after_mm: f64,
    indent_left_mm: f64,
    indent_right_mm: f64,
    background: Option<Color>,
}

impl StyleSpec {
    /// Creates a left-aligned style with the given point size in the main text color.
    pub fn new(size: u8) -> Self {
        Self {
            name: String::new(),
            font: FontRole::Sans,
            size,
            color: COLOR_TEXT,
            alignment: HorizontalAlignment::Left,
            bold: false,
            italic: false,
            space_before_mm: 0.0,
            space_after_mm: 0.0,
            indent_left_mm: 0.0,
            indent_right_mm: 0.0,
            background: None,
        }
    }

    /// Name under which the style was registered (empty before registration).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn font(&self) -> FontRole {
        self.font
    }

    /// Point size.
    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn is_italic(&self) -> bool {
        self.italic
    }

    /// Vertical space above the block, in millimetres.
    pub fn space_before_mm(&self) -> f64 {
        self.space_before_mm
    }

    /// Vertical space below the block, in millimetres.
    pub fn space_after_mm(&self) -> f64 {
        self.space_after_mm
    }

    pub fn indent_left_mm(&self) -> f64 {
        self.indent_left_mm
    }

    pub fn indent_right_mm(&self) -> f64 {
        self.indent_right_mm
    }

    /// Background tint painted behind the block, if any.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn with_font(mut self, font: FontRole) -> Self {
        self.font = font;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Sets the space above and below the block, in millimetres.
    pub fn with_spacing(mut self, before_mm: f64, after_mm: f64) -> Self {
        self.space_before_mm = before_mm;
        self.space_after_mm = after_mm;
        self
    }

    /// Sets the left and right indentation, in millimetres.
    pub fn with_indent(mut self, left_mm: f64, right_mm: f64) -> Self {
        self.indent_left_mm = left_mm;
        self.indent_right_mm = right_mm;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    /// Character-level style for `genpdf`.  The font family is applied by the renderer
    /// because it depends on the fonts loaded into the document.
    pub fn text_style(&self) -> Style {
        let mut style = Style::new()
            .with_font_size(self.size)
            .with_color(self.color);
        if self.bold {
            style.set_bold();
        }
        if self.italic {
            style.set_italic();
        }
        style
    }

    /// Spacing and indentation expressed as element padding.
    pub fn margins(&self) -> Margins {
        Margins::trbl(
            mm_from_f64(self.space_before_mm),
            mm_from_f64(self.indent_right_mm),
            mm_from_f64(self.space_after_mm),
            mm_from_f64(self.indent_left_mm),
        )
    }
}

/// Mutable registration phase of the style registry.
#[derive(Debug, Default)]
pub struct StyleRegistryBuilder {
    styles: HashMap<String, StyleSpec>,
}

impl StyleRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `spec` under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        mut spec: StyleSpec,
    ) -> Result<(), StyleError> {
        let name = name.into();
        if self.styles.contains_key(&name) {
            return Err(StyleError::Duplicate(name));
        }
        spec.name = name.clone();
        self.styles.insert(name, spec);
        Ok(())
    }

    /// Freezes the registered styles.
    pub fn build(self) -> StyleRegistry {
        StyleRegistry {
            styles: self.styles,
        }
    }
}

/// Frozen, read-only lookup of named styles.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: HashMap<String, StyleSpec>,
}

impl StyleRegistry {
    pub fn builder() -> StyleRegistryBuilder {
        StyleRegistryBuilder::new()
    }

    /// Looks up a style by name.
    pub fn resolve(&self, name: &str) -> Result<&StyleSpec, StyleError> {
        self.styles
            .get(name)
            .ok_or_else(|| StyleError::Unknown(name.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// The standard style set of the manual.
    pub fn manual_defaults() -> Result<Self, StyleError> {
        use names::*;

        let mut builder = Self::builder();
        builder.register(
            COVER_TITLE,
            StyleSpec::new(36)
                .bold()
                .with_color(COLOR_PRIMARY)
                .with_alignment(HorizontalAlignment::Center)
                .with_spacing(0.0, 7.0),
        )?;
        builder.register(
            COVER_SUBTITLE,
            StyleSpec::new(16)
                .with_color(COLOR_MUTED)
                .with_alignment(HorizontalAlignment::Center)
                .with_spacing(0.0, 10.5),
        )?;
        builder.register(
            CHAPTER_TITLE,
            StyleSpec::new(24)
                .bold()
                .with_color(COLOR_PRIMARY)
                .with_spacing(10.5, 7.0),
        )?;
        builder.register(
            SECTION_TITLE,
            StyleSpec::new(16).bold().with_spacing(7.0, 3.5),
        )?;
        builder.register(
            SUBSECTION_TITLE,
            StyleSpec::new(13).bold().with_spacing(5.3, 2.8),
        )?;
        builder.register(
            BODY,
            StyleSpec::new(11)
                .with_alignment(HorizontalAlignment::Justified)
                .with_spacing(0.0, 3.5),
        )?;
        builder.register(BODY_LEFT, StyleSpec::new(11).with_spacing(0.0, 3.5))?;
        builder.register(
            BULLET_ITEM,
            StyleSpec::new(11).with_spacing(0.0, 2.1).with_indent(7.0, 0.0),
        )?;
        builder.register(
            CODE_BLOCK,
            StyleSpec::new(10)
                .with_font(FontRole::Mono)
                .with_background(COLOR_BEIGE)
                .with_spacing(2.8, 2.8)
                .with_indent(5.3, 5.3),
        )?;
        builder.register(
            NOTE,
            StyleSpec::new(10)
                .with_color(COLOR_MUTED)
                .with_spacing(3.5, 3.5)
                .with_indent(7.0, 7.0),
        )?;
        builder.register(
            CAPTION,
            StyleSpec::new(9)
                .with_color(COLOR_MUTED)
                .with_alignment(HorizontalAlignment::Center)
                .with_spacing(1.8, 5.3),
        )?;
        builder.register(
            TOC_ENTRY,
            StyleSpec::new(12).with_spacing(1.4, 1.4).with_indent(3.5, 0.0),
        )?;
        builder.register(
            TABLE_HEADER,
            StyleSpec::new(10).bold().with_color(COLOR_WHITE),
        )?;
        builder.register(TABLE_CELL, StyleSpec::new(10))?;

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut builder = StyleRegistry::builder();
        builder.register("Body", StyleSpec::new(11)).expect("first registration");
        let err = builder.register("Body", StyleSpec::new(12)).unwrap_err();
        assert_eq!(err, StyleError::Duplicate("Body".into()));
    }

    #[test]
    fn unknown_style_is_reported() {
        let registry = StyleRegistry::builder().build();
        let err = registry.resolve("Missing").unwrap_err();
        assert_eq!(err, StyleError::Unknown("Missing".into()));
    }

    #[test]
    fn registration_records_the_name() {
        let mut builder = StyleRegistry::builder();
        builder
            .register("Caption", StyleSpec::new(9).italic())
            .expect("register");
        let registry = builder.build();
        let spec = registry.resolve("Caption").expect("resolve");
        assert_eq!(spec.name(), "Caption");
        assert!(spec.is_italic());
        assert_eq!(spec.size(), 9);
    }

    #[test]
    fn manual_defaults_cover_every_block_kind() {
        let registry = StyleRegistry::manual_defaults().expect("defaults");
        for name in [
            names::COVER_TITLE,
            names::COVER_SUBTITLE,
            names::CHAPTER_TITLE,
            names::SECTION_TITLE,
            names::SUBSECTION_TITLE,
            names::BODY,
            names::BODY_LEFT,
            names::BULLET_ITEM,
            names::CODE_BLOCK,
            names::NOTE,
            names::CAPTION,
            names::TOC_ENTRY,
            names::TABLE_HEADER,
            names::TABLE_CELL,
        ] {
            assert!(registry.resolve(name).is_ok(), "missing style {name}");
        }
        assert_eq!(registry.len(), 14);

        let code = registry.resolve(names::CODE_BLOCK).expect("code style");
        assert_eq!(code.font(), FontRole::Mono);
        assert_eq!(code.background(), Some(COLOR_BEIGE));
    }

    #[test]
    fn justified_falls_back_to_left() {
        assert!(matches!(
            HorizontalAlignment::Justified.to_genpdf(),
            Alignment::Left
        ));
        assert!(matches!(
            HorizontalAlignment::Center.to_genpdf(),
            Alignment::Center
        ));
    }
}
