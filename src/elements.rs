//! Custom element implementations built on top of `genpdf` primitives.
//!
//! `genpdf` cannot fill rectangles and only draws hairlines, so the tinted table rows and code
//! blocks are painted with a single-pixel image stretched over the tinted area.  The fill is
//! added before the text so the glyphs end up on top of it.

use std::path::Path;

use image::{DynamicImage, GenericImageView, Rgb, RgbImage};

use genpdf::elements::Image;
use genpdf::error::{Context as _, Error, ErrorKind};
use genpdf::fonts::FontCache;
use genpdf::style::{Color, Style, StyledString};
use genpdf::{render, Alignment, Element, Mm, Position, RenderResult, Rotation, Scale, Size};

use crate::image_fit::ImageLayout;
use crate::table::{
    pt_to_mm, TableBlock, BODY_PADDING_PT, HEADER_PADDING_PT, HORIZONTAL_PADDING_PT,
};

const DEFAULT_IMAGE_DPI: f64 = 300.0;
const MM_PER_INCH: f64 = 25.4;
const CODE_PADDING_MM: f64 = 2.5;
const TAB_WIDTH: usize = 4;

pub(crate) fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

pub(crate) fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

/// Size `genpdf` gives an unscaled pixel, in millimetres.
fn pixel_mm() -> f64 {
    MM_PER_INCH / DEFAULT_IMAGE_DPI
}

/// Size `genpdf` gives an unscaled image, in millimetres.
fn natural_size_mm(image: &DynamicImage) -> (f64, f64) {
    let (px_width, px_height) = image.dimensions();
    (
        pixel_mm() * f64::from(px_width),
        pixel_mm() * f64::from(px_height),
    )
}

/// Loads an image from the given path using the [`image`] crate with descriptive errors.
pub fn decode_image_from_path(path: impl AsRef<Path>) -> Result<DynamicImage, Error> {
    let path = path.as_ref();
    let reader = image::io::Reader::open(path)
        .with_context(|| format!("Failed to open image file {}", path.display()))?;
    reader
        .with_guessed_format()
        .context("Unable to determine image format")?
        .decode()
        .with_context(|| format!("Failed to decode image file {}", path.display()))
}

/// Creates a centered `genpdf` image scaled to exactly the fitted size.
pub fn scaled_image(image: DynamicImage, layout: &ImageLayout) -> Result<Image, Error> {
    let (natural_width, natural_height) = natural_size_mm(&image);
    let mut element = Image::from_dynamic_image(image)?;
    if natural_width > f64::EPSILON && natural_height > f64::EPSILON {
        element.set_scale(Scale::new(
            layout.width_mm / natural_width,
            layout.height_mm / natural_height,
        ));
    }
    element.set_alignment(Alignment::Center);
    Ok(element)
}

/// RGB components of a `genpdf` colour.
pub fn rgb(color: Color) -> [u8; 3] {
    match color {
        Color::Rgb(r, g, b) => [r, g, b],
        Color::Greyscale(v) => [v, v, v],
        Color::Cmyk(c, m, y, k) => {
            let channel = |v: u8| {
                let value = 255.0 * (1.0 - f64::from(v) / 255.0) * (1.0 - f64::from(k) / 255.0);
                value.round() as u8
            };
            [channel(c), channel(m), channel(y)]
        }
    }
}

/// A single pixel of `color`.
pub fn solid_pixel(color: Color) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb(rgb(color))))
}

/// Paints the rectangle at `origin` with `color`.
fn fill(area: &render::Area<'_>, color: Color, origin: Position, size: Size) {
    let scale = Scale::new(
        mm_to_f64(size.width) / pixel_mm(),
        mm_to_f64(size.height) / pixel_mm(),
    );
    // Images are anchored at their lower left corner.
    let anchor = Position::new(origin.x, origin.y + size.height);
    area.add_image(
        &solid_pixel(color),
        anchor,
        scale,
        Rotation::default(),
        None,
    );
}

/// An image that moves to the next page instead of running past the bottom of the area.
pub struct FittedImageElement {
    image: Image,
    height: Mm,
}

impl FittedImageElement {
    pub fn new(image: Image, layout: &ImageLayout) -> Self {
        Self {
            image,
            height: mm_from_f64(layout.height_mm),
        }
    }
}

impl Element for FittedImageElement {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        if self.height > area.size().height {
            return Ok(RenderResult {
                size: Size::new(0, 0),
                has_more: true,
            });
        }
        self.image.render(context, area, style)
    }
}

/// Distributes `available_mm` across `columns`.
///
/// Explicit widths are used as given unless their sum exceeds the available width, in which
/// case they are scaled down proportionally.  Without explicit widths the columns share the
/// width evenly.
pub fn resolve_column_widths(
    explicit_mm: Option<&[f64]>,
    columns: usize,
    available_mm: f64,
) -> Vec<f64> {
    if columns == 0 {
        return Vec::new();
    }
    match explicit_mm {
        Some(widths) if widths.len() == columns => {
            let total: f64 = widths.iter().sum();
            if total > available_mm && total > 0.0 {
                let factor = available_mm / total;
                widths.iter().map(|w| w * factor).collect()
            } else {
                widths.to_vec()
            }
        }
        _ => vec![available_mm / columns as f64; columns],
    }
}

/// Greedy word wrap.  Words wider than `max_width` are split between characters.
pub fn wrap_words<F>(text: &str, max_width: f64, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_owned()
        } else {
            format!("{current} {word}")
        };
        if measure(&candidate) <= max_width {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if measure(word) <= max_width {
            current = word.to_owned();
        } else {
            let mut pieces = wrap_chars(word, max_width, &measure);
            current = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits `text` between characters so that every piece fits `max_width`.
///
/// Whitespace is kept, which preserves the indentation of code lines.  Every piece holds at
/// least one character, even if that character alone is too wide.
pub fn wrap_chars<F>(text: &str, max_width: f64, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    let mut pieces = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        current.push(ch);
        if measure(&current) > max_width && current.chars().count() > 1 {
            current.pop();
            pieces.push(std::mem::replace(&mut current, ch.to_string()));
        }
    }
    pieces.push(current);
    pieces
}

fn text_width(font_cache: &FontCache, style: Style, text: &str) -> f64 {
    mm_to_f64(StyledString::new(text.to_owned(), style).width(font_cache))
}

/// A fixed vertical gap.  A gap taller than the remaining space ends at the page bottom.
pub struct Spacer {
    height: Mm,
}

impl Spacer {
    pub fn new(height_mm: f64) -> Self {
        Self {
            height: mm_from_f64(height_mm.max(0.0)),
        }
    }
}

impl Element for Spacer {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        let height = if self.height > area.size().height {
            area.size().height
        } else {
            self.height
        };
        result.size = Size::new(0, height);
        Ok(result)
    }
}

/// Literal monospace text on a tinted background.
///
/// Line breaks and leading whitespace are preserved; lines wider than the area are wrapped
/// between characters.  The block may be split across pages.
pub struct ShadedBlock {
    lines: Vec<String>,
    style: Style,
    background: Color,
    next_line: usize,
}

impl ShadedBlock {
    pub fn new(text: &str, style: Style, background: Color) -> Self {
        let tab = " ".repeat(TAB_WIDTH);
        Self {
            lines: text
                .lines()
                .map(|line| line.trim_end().replace('\t', &tab))
                .collect(),
            style,
            background,
            next_line: 0,
        }
    }

    fn wrapped(&self, font_cache: &FontCache, style: Style, width_mm: f64) -> Vec<String> {
        self.lines
            .iter()
            .flat_map(|line| {
                if line.is_empty() {
                    vec![String::new()]
                } else {
                    wrap_chars(line, width_mm, |s| text_width(font_cache, style, s))
                }
            })
            .collect()
    }
}

impl Element for ShadedBlock {
    fn render(
        &mut self,
        context: &genpdf::Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        let style = style.and(self.style);
        let padding = mm_from_f64(CODE_PADDING_MM);
        let width = area.size().width;
        let text_width_mm = mm_to_f64(width) - 2.0 * CODE_PADDING_MM;
        let lines = self.wrapped(&context.font_cache, style, text_width_mm);

        let line_height = style.line_height(&context.font_cache);
        let available = mm_to_f64(area.size().height) - 2.0 * CODE_PADDING_MM;
        let fitting = (available / mm_to_f64(line_height)).floor().max(0.0) as usize;
        let remaining = lines.len().saturating_sub(self.next_line);
        let count = fitting.min(remaining);
        if count == 0 && remaining > 0 {
            result.has_more = true;
            return Ok(result);
        }

        let height = line_height * count as f64 + padding + padding;
        fill(
            &area,
            self.background,
            Position::default(),
            Size::new(width, height),
        );
        for (offset, line) in lines[self.next_line..self.next_line + count].iter().enumerate() {
            let position = Position::new(padding, padding + line_height * offset as f64);
            area.print_str(&context.font_cache, position, style, line)?;
        }

        self.next_line += count;
        result.size = Size::new(width, height);
        result.has_more = self.next_line < lines.len();
        area.add_offset(Position::new(0, height));
        Ok(result)
    }
}

/// Renders a [`TableBlock`] with a tinted header, banded rows and a full cell grid.
///
/// A row that does not fit moves to the next page together with the remaining rows.  Only a
/// row taller than a whole page is split between pages.
pub struct BandedTable {
    table: TableBlock,
    font_style: Style,
    next_row: usize,
    /// Lines of `next_row` printed on earlier pages.
    next_line: usize,
    /// Set once `has_more` was returned; the next area starts a fresh page.
    resumed: bool,
}

/// One table row wrapped to its column widths.
struct WrappedRow<'a> {
    cells: Vec<Vec<String>>,
    text_style: Style,
    line_height: Mm,
    vertical_padding: Mm,
    background: Option<Color>,
    widths_mm: &'a [f64],
}

impl WrappedRow<'_> {
    fn line_count(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(1).max(1)
    }

    fn height(&self, lines: usize) -> Mm {
        self.line_height * lines as f64 + self.vertical_padding + self.vertical_padding
    }

    /// Draws `lines` lines starting at `first` and returns the height used.
    fn draw(
        &self,
        context: &genpdf::Context,
        area: &render::Area<'_>,
        top: Mm,
        first: usize,
        lines: usize,
        grid: Style,
    ) -> Result<Mm, Error> {
        let height = self.height(lines);
        let width = mm_from_f64(self.widths_mm.iter().sum());
        if let Some(color) = self.background {
            fill(area, color, Position::new(0, top), Size::new(width, height));
        }

        let horizontal_padding_mm = pt_to_mm(HORIZONTAL_PADDING_PT);
        let mut x_mm = 0.0;
        for (cell, width_mm) in self.cells.iter().zip(self.widths_mm) {
            for (index, line) in cell.iter().skip(first).take(lines).enumerate() {
                let position = Position::new(
                    mm_from_f64(x_mm + horizontal_padding_mm),
                    top + self.vertical_padding + self.line_height * index as f64,
                );
                area.print_str(&context.font_cache, position, self.text_style, line)?;
            }
            x_mm += width_mm;
        }

        let bottom = top + height;
        area.draw_line(vec![Position::new(0, top), Position::new(width, top)], grid);
        area.draw_line(vec![Position::new(0, bottom), Position::new(width, bottom)], grid);
        let mut x_mm = 0.0;
        for width_mm in std::iter::once(&0.0).chain(self.widths_mm) {
            x_mm += width_mm;
            let x = mm_from_f64(x_mm);
            area.draw_line(vec![Position::new(x, top), Position::new(x, bottom)], grid);
        }
        Ok(height)
    }
}

impl BandedTable {
    /// `font_style` carries the font family applied beneath the table's own styles.
    pub fn new(table: TableBlock, font_style: Style) -> Self {
        Self {
            table,
            font_style,
            next_row: 0,
            next_line: 0,
            resumed: false,
        }
    }
}

impl Element for BandedTable {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        let base = style.and(self.font_style);
        let available_mm = mm_to_f64(area.size().width);
        let widths_mm = resolve_column_widths(
            self.table.column_widths_mm(),
            self.table.column_count(),
            available_mm,
        );
        let table_width_mm: f64 = widths_mm.iter().sum();
        let left = mm_from_f64(((available_mm - table_width_mm) / 2.0).max(0.0));
        let horizontal_padding_mm = pt_to_mm(HORIZONTAL_PADDING_PT);
        let grid = Style::new().with_color(self.table.grid_color());

        let mut area = area;
        area.add_offset(Position::new(left, 0));
        let mut top = Mm::default();
        let fresh_page = std::mem::take(&mut self.resumed);

        let rows: Vec<_> = self.table.rows().collect();
        while let Some(row) = rows.get(self.next_row) {
            let (spec, vertical_padding_pt) = if self.next_row == 0 {
                (self.table.header_style(), HEADER_PADDING_PT)
            } else {
                (self.table.cell_style(), BODY_PADDING_PT)
            };
            let text_style = base.and(spec.text_style());
            let wrapped = WrappedRow {
                cells: row
                    .cells()
                    .iter()
                    .zip(&widths_mm)
                    .map(|(cell, width)| {
                        wrap_words(cell, width - 2.0 * horizontal_padding_mm, |s| {
                            text_width(&context.font_cache, text_style, s)
                        })
                    })
                    .collect(),
                text_style,
                line_height: text_style.line_height(&context.font_cache),
                vertical_padding: mm_from_f64(pt_to_mm(vertical_padding_pt)),
                background: row.background(),
                widths_mm: &widths_mm,
            };

            let line_count = wrapped.line_count();
            let pending = line_count.saturating_sub(self.next_line).max(1);
            let room = area.size().height - top;
            let shown = if wrapped.height(pending) <= room {
                pending
            } else if top > Mm::default() || !fresh_page {
                // Retry the row at the top of the next page.
                result.has_more = true;
                break;
            } else {
                let spare = mm_to_f64(room) - 2.0 * pt_to_mm(vertical_padding_pt);
                let fitting = (spare / mm_to_f64(wrapped.line_height)).floor().max(0.0) as usize;
                if fitting == 0 {
                    return Err(Error::new(
                        "Table row does not fit on an empty page",
                        ErrorKind::PageSizeExceeded,
                    ));
                }
                fitting.min(pending)
            };

            top += wrapped.draw(context, &area, top, self.next_line, shown, grid)?;
            if self.next_line + shown < line_count {
                self.next_line += shown;
                result.has_more = true;
                break;
            }
            self.next_line = 0;
            self.next_row += 1;
        }

        self.resumed = result.has_more;
        if top > Mm::default() {
            result.size = Size::new(mm_from_f64(table_width_mm), top);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> f64 {
        s.chars().count() as f64
    }

    #[test]
    fn mm_conversion_round_trips() {
        assert!((mm_to_f64(mm_from_f64(42.5)) - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn fills_use_the_requested_colour() {
        assert_eq!(rgb(Color::Rgb(196, 74, 74)), [196, 74, 74]);
        assert_eq!(rgb(Color::Greyscale(40)), [40, 40, 40]);
        assert_eq!(rgb(Color::Cmyk(0, 0, 0, 0)), [255, 255, 255]);
        assert_eq!(rgb(Color::Cmyk(0, 0, 0, 255)), [0, 0, 0]);

        let pixel = solid_pixel(Color::Rgb(250, 248, 245));
        assert_eq!(pixel.dimensions(), (1, 1));
        assert!(!pixel.color().has_alpha());
        assert_eq!(pixel.to_rgb8().get_pixel(0, 0), &Rgb([250, 248, 245]));
    }

    #[test]
    fn even_split_without_explicit_widths() {
        assert_eq!(resolve_column_widths(None, 4, 160.0), vec![40.0; 4]);
        assert!(resolve_column_widths(None, 0, 160.0).is_empty());
    }

    #[test]
    fn explicit_widths_shrink_to_fit() {
        let widths = resolve_column_widths(Some(&[100.0, 100.0]), 2, 150.0);
        assert_eq!(widths, vec![75.0, 75.0]);

        let narrow = resolve_column_widths(Some(&[40.0, 60.0]), 2, 150.0);
        assert_eq!(narrow, vec![40.0, 60.0]);
    }

    #[test]
    fn words_wrap_greedily() {
        let lines = wrap_words("Weave your story one chunk at a time", 12.0, chars);
        assert_eq!(lines, vec!["Weave your", "story one", "chunk at a", "time"]);
    }

    #[test]
    fn long_words_are_split() {
        let lines = wrap_words("a supercalifragilistic word", 8.0, chars);
        assert_eq!(lines, vec!["a", "supercal", "ifragili", "stic", "word"]);
    }

    #[test]
    fn empty_text_yields_one_empty_line() {
        assert_eq!(wrap_words("", 10.0, chars), vec![String::new()]);
    }

    #[test]
    fn char_wrap_keeps_indentation() {
        let pieces = wrap_chars("    [C:Name]", 6.0, chars);
        assert_eq!(pieces, vec!["    [C", ":Name]"]);
    }
}
