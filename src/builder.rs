//! Document construction and rendering of an assembled manual.

use genpdf::elements::{PageBreak, Paragraph};
use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::{Font, FontFamily};
use genpdf::style::{self, Style, StyledString};
use genpdf::{self, Alignment, Element, Margins, Mm, PageDecorator, Position, Size};
use log::debug;

use crate::config::ManualConfig;
use crate::elements::{mm_from_f64, BandedTable, FittedImageElement, ShadedBlock, Spacer};
use crate::error::BuildError;
use crate::flow::{AssembledDocument, LayoutBlock, TextBlock};
use crate::fonts::{self, FontLocations};
use crate::style::{FontRole, COLOR_BEIGE, COLOR_MUTED};

const HEADER_FONT_SIZE: u8 = 8;
const HEADER_GAP_MM: f64 = 4.0;
const FOOTER_FONT_SIZE: u8 = 9;
const FOOTER_HEIGHT_MM: f64 = 10.0;

/// Builder for `genpdf::Document` instances pre-configured with the manual defaults.
#[derive(Default)]
pub struct DocumentBuilder {
    title: Option<String>,
    paper_size: Option<Size>,
    margins: Option<Margins>,
    line_spacing: Option<f64>,
    fonts: FontLocations,
    header: Option<Box<HeaderFactory>>,
    footer: Option<FooterSpec>,
    #[cfg(feature = "hyphenation")]
    hyphenator: Option<hyphenation::Standard>,
}

type HeaderFactory = dyn Fn(usize) -> Box<dyn Element>;

/// A configured document together with the font handles its elements need.
pub struct PreparedDocument {
    pub document: genpdf::Document,
    /// Monospace family registered on the document, if one was found.
    pub mono: Option<FontFamily<Font>>,
}

impl DocumentBuilder {
    /// Creates a new builder instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document title stored in the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the paper size used for newly created documents.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = Some(paper_size.into());
        self
    }

    /// Sets the margins applied through the page decorator.
    pub fn with_margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    pub fn with_line_spacing(mut self, line_spacing: f64) -> Self {
        self.line_spacing = Some(line_spacing);
        self
    }

    /// Overrides where fonts are looked up.
    pub fn with_font_locations(mut self, fonts: FontLocations) -> Self {
        self.fonts = fonts;
        self
    }

    /// Configures a header callback that is invoked for every page.
    pub fn with_header<F, E>(mut self, header: F) -> Self
    where
        F: Fn(usize) -> E + 'static,
        E: Element + 'static,
    {
        self.header = Some(Box::new(move |page| {
            Box::new(header(page)) as Box<dyn Element>
        }));
        self
    }

    /// Configures a footer callback with a fixed height that is invoked for every page.
    pub fn with_footer<F, E>(mut self, height: impl Into<Mm>, footer: F) -> Self
    where
        F: Fn(usize) -> E + 'static,
        E: Element + 'static,
    {
        self.footer = Some(FooterSpec::new(height, footer));
        self
    }

    /// Enables hyphenation using the provided hyphenation dictionary.
    #[cfg(feature = "hyphenation")]
    pub fn with_hyphenator(mut self, hyphenator: hyphenation::Standard) -> Self {
        self.hyphenator = Some(hyphenator);
        self
    }

    /// Loads the fonts and builds a fully configured `genpdf::Document`.
    pub fn build(self) -> Result<PreparedDocument, Error> {
        let fonts = fonts::load_fonts(&self.fonts)?;
        let mut document = genpdf::Document::new(fonts.sans);
        let mono = fonts.mono.map(|family| document.add_font_family(family));

        if let Some(title) = self.title {
            document.set_title(title);
        }
        if let Some(paper_size) = self.paper_size {
            document.set_paper_size(paper_size);
        }
        if let Some(line_spacing) = self.line_spacing {
            document.set_line_spacing(line_spacing);
        }

        let decorator = ConfiguredPageDecorator::new(self.margins, self.header, self.footer);
        document.set_page_decorator(decorator);

        #[cfg(feature = "hyphenation")]
        if let Some(hyphenator) = self.hyphenator {
            document.set_hyphenator(hyphenator);
        }

        Ok(PreparedDocument { document, mono })
    }
}

/// Definition of a footer rendered through the page decorator.
pub struct FooterSpec {
    height: Mm,
    factory: Box<HeaderFactory>,
}

impl FooterSpec {
    /// Creates a new footer specification.
    pub fn new<F, E>(height: impl Into<Mm>, factory: F) -> Self
    where
        F: Fn(usize) -> E + 'static,
        E: Element + 'static,
    {
        Self {
            height: height.into(),
            factory: Box::new(move |page| Box::new(factory(page)) as Box<dyn Element>),
        }
    }
}

struct ConfiguredPageDecorator {
    page: usize,
    margins: Option<Margins>,
    header: Option<Box<HeaderFactory>>,
    footer: Option<FooterSpec>,
}

impl ConfiguredPageDecorator {
    fn new(
        margins: Option<Margins>,
        header: Option<Box<HeaderFactory>>,
        footer: Option<FooterSpec>,
    ) -> Self {
        Self {
            page: 0,
            margins,
            header,
            footer,
        }
    }
}

impl PageDecorator for ConfiguredPageDecorator {
    fn decorate_page<'a>(
        &mut self,
        context: &genpdf::Context,
        mut area: genpdf::render::Area<'a>,
        style: style::Style,
    ) -> Result<genpdf::render::Area<'a>, Error> {
        self.page += 1;

        if let Some(margins) = self.margins {
            area.add_margins(margins);
        }

        if let Some(header_cb) = &self.header {
            let mut element = header_cb(self.page);
            let result = element.render(context, area.clone(), style)?;
            area.add_offset(Position::new(0, result.size.height));
        }

        if let Some(footer) = &self.footer {
            let available = area.size().height;
            if footer.height > available {
                return Err(Error::new(
                    "Footer height exceeds available space",
                    ErrorKind::InvalidData,
                ));
            }

            let mut footer_area = area.clone();
            footer_area.add_offset(Position::new(0, available - footer.height));
            let mut element = (footer.factory)(self.page);
            let result = element.render(context, footer_area, style)?;
            if result.has_more {
                return Err(Error::new(
                    "Footer element does not fit into the reserved space",
                    ErrorKind::PageSizeExceeded,
                ));
            }

            area.set_height(available - footer.height);
        }

        Ok(area)
    }
}

/// Lays out an [`AssembledDocument`] with `genpdf` and returns the PDF bytes.
pub struct ManualRenderer<'c> {
    config: &'c ManualConfig,
}

impl<'c> ManualRenderer<'c> {
    pub fn new(config: &'c ManualConfig) -> Self {
        Self { config }
    }

    /// Document builder with page geometry, running header and page-number footer.
    pub fn document_builder(&self, document: &AssembledDocument) -> DocumentBuilder {
        let running_title = document.title.clone();
        let builder = DocumentBuilder::new()
            .with_title(document.title.clone())
            .with_paper_size(self.config.paper_size())
            .with_margins(Margins::trbl(
                mm_from_f64(self.config.margin_mm()),
                mm_from_f64(self.config.margin_mm()),
                mm_from_f64(self.config.margin_mm()),
                mm_from_f64(self.config.margin_mm()),
            ))
            .with_line_spacing(self.config.line_spacing())
            .with_font_locations(self.config.font_locations())
            .with_header(move |page| {
                // The cover carries no running header.
                let text = if page > 1 { running_title.as_str() } else { "" };
                Paragraph::new(StyledString::new(text.to_owned(), header_style()))
                    .aligned(Alignment::Right)
                    .padded(Margins::trbl(
                        Mm::default(),
                        Mm::default(),
                        mm_from_f64(HEADER_GAP_MM),
                        Mm::default(),
                    ))
            })
            .with_footer(mm_from_f64(FOOTER_HEIGHT_MM), |page| {
                Paragraph::new(StyledString::new(page.to_string(), footer_style()))
                    .aligned(Alignment::Center)
            });

        #[cfg(feature = "hyphenation")]
        let builder = match hyphenator_for(document.language) {
            Some(hyphenator) => builder.with_hyphenator(hyphenator),
            None => builder,
        };

        builder
    }

    /// Renders the document fully into memory.
    pub fn render(&self, document: AssembledDocument) -> Result<Vec<u8>, BuildError> {
        let PreparedDocument {
            document: mut pdf,
            mono,
        } = self
            .document_builder(&document)
            .build()
            .map_err(BuildError::FontLoad)?;

        let block_count = document.blocks.len();
        for block in document.blocks {
            push_block(&mut pdf, block, mono);
        }
        debug!("Pushed {} blocks for {}", block_count, document.file_name);

        let mut bytes = Vec::new();
        pdf.render(&mut bytes).map_err(BuildError::Render)?;
        Ok(bytes)
    }
}

fn header_style() -> Style {
    Style::new()
        .with_font_size(HEADER_FONT_SIZE)
        .with_color(COLOR_MUTED)
}

fn footer_style() -> Style {
    Style::new()
        .with_font_size(FOOTER_FONT_SIZE)
        .with_color(COLOR_MUTED)
}

fn paragraph(text: &TextBlock) -> impl Element {
    let spec = text.style();
    let base = spec.text_style();
    let mut paragraph = Paragraph::default();
    paragraph.set_alignment(spec.alignment().to_genpdf());
    if let Some(prefix) = text.prefix() {
        paragraph.push(StyledString::new(prefix.to_owned(), base));
    }
    for span in text.spans() {
        paragraph.push(span.to_styled_string(base));
    }
    paragraph.padded(spec.margins())
}

fn push_block(pdf: &mut genpdf::Document, block: LayoutBlock, mono: Option<FontFamily<Font>>) {
    match block {
        LayoutBlock::Text(text) => pdf.push(paragraph(&text)),
        LayoutBlock::Spacer(height_mm) => pdf.push(Spacer::new(height_mm)),
        LayoutBlock::Image(fitted) => {
            pdf.push(FittedImageElement::new(fitted.element, &fitted.layout))
        }
        LayoutBlock::Table(table) => pdf.push(BandedTable::new(table, Style::new())),
        LayoutBlock::Code { text, style } => {
            let mut text_style = style.text_style();
            if let (FontRole::Mono, Some(family)) = (style.font(), mono) {
                text_style = text_style.with_font_family(family);
            }
            let background = style.background().unwrap_or(COLOR_BEIGE);
            pdf.push(ShadedBlock::new(&text, text_style, background).padded(style.margins()));
        }
        LayoutBlock::PageBreak => pdf.push(PageBreak::new()),
    }
}

#[cfg(feature = "hyphenation")]
fn hyphenator_for(language: crate::model::Language) -> Option<hyphenation::Standard> {
    use hyphenation::Load;

    let dictionary = match language {
        crate::model::Language::Italian => hyphenation::Language::Italian,
        crate::model::Language::English => hyphenation::Language::EnglishUS,
    };
    match hyphenation::Standard::from_embedded(dictionary) {
        Ok(hyphenator) => Some(hyphenator),
        Err(err) => {
            log::warn!("Hyphenation disabled: {err}");
            None
        }
    }
}

#[cfg(all(test, feature = "hyphenation"))]
mod tests {
    use super::*;
    use crate::model::Language;

    #[test]
    fn every_language_has_an_embedded_dictionary() {
        for language in Language::ALL {
            assert!(hyphenator_for(language).is_some(), "{:?}", language);
        }
    }
}
