//! Inline emphasis markup used by the manual prose.
//!
//! Paragraphs, list items, notes and captions may contain a small markdown-inspired
//! syntax.  It is parsed into [`Span`]s which the renderer turns into `genpdf` styled
//! strings on top of the block's resolved style.  Table cells and code blocks are never
//! parsed, since they frequently show the markup literally.

use std::fmt;

use genpdf::style::{Color, Style, StyledString};
use log::warn;

/// A slice of text together with inline style attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    text: String,
    bold: bool,
    italic: bool,
    color: Option<Color>,
}

impl Span {
    /// Creates a new span with the provided text and no styles applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns the raw text contained in this span.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn is_italic(&self) -> bool {
        self.italic
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Marks the span as bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Marks the span as italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Assigns a color to the span.
    pub fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Builds a [`StyledString`] whose style layers the span attributes over `base`.
    pub fn to_styled_string(&self, base: Style) -> StyledString {
        let mut style = base;
        if let Some(color) = self.color {
            style.set_color(color);
        }
        if self.bold {
            style.set_bold();
        }
        if self.italic {
            style.set_italic();
        }
        StyledString::new(self.text.clone(), style)
    }
}

/// Concatenates the text of `spans`, dropping all styling.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}

/// Parse errors produced by [`parse_markup`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    index: usize,
    message: String,
}

impl ParseError {
    fn new(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            message: message.into(),
        }
    }

    /// Byte index in the original input string where the error was detected.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Human-readable description of the parsing error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.message, self.index)
    }
}

impl std::error::Error for ParseError {}

#[derive(Clone, Copy, Debug, Default)]
struct StyleState {
    bold: bool,
    italic: bool,
    color: Option<Color>,
}

impl StyleState {
    fn to_span(self, text: impl Into<String>) -> Span {
        Span {
            text: text.into(),
            bold: self.bold,
            italic: self.italic,
            color: self.color,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Marker {
    Bold,
    Italic,
    Color,
}

impl Marker {
    fn closing_token(self) -> &'static str {
        match self {
            Marker::Bold => "**",
            Marker::Italic => "*",
            Marker::Color => "}",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Marker::Bold => "bold span",
            Marker::Italic => "italic span",
            Marker::Color => "color span",
        }
    }
}

const COLOR_PREFIX: &str = "[color=";
const ESCAPABLE: &[char] = &['*', '\\', '[', ']', '{', '}'];

/// Parses the inline markup into a list of [`Span`]s.
///
/// The supported constructs are:
///
/// - `**bold**` for bold text
/// - `*italic*` for italic text
/// - `[color=#RRGGBB]{text}` for colored text
/// - `\*`, `\\`, `\[`, `\]`, `\{`, `\}` for literal characters
///
/// Brackets and braces that do not form a color directive are kept as literal text, so
/// references such as `[@elena]` need no escaping.
pub fn parse_markup(input: &str) -> Result<Vec<Span>, ParseError> {
    let (spans, idx) = parse_inner(input, 0, StyleState::default(), None)?;
    debug_assert_eq!(idx, input.len());
    Ok(spans)
}

/// Parses `input`, falling back to a single unstyled span when the markup is malformed.
pub fn parse_or_plain(input: &str) -> Vec<Span> {
    match parse_markup(input) {
        Ok(spans) => spans,
        Err(err) => {
            warn!("Rendering text literally, inline markup is malformed: {err}");
            vec![Span::new(input)]
        }
    }
}

fn parse_inner(
    input: &str,
    mut index: usize,
    state: StyleState,
    closing_marker: Option<Marker>,
) -> Result<(Vec<Span>, usize), ParseError> {
    let mut spans = Vec::new();
    let mut buffer = String::new();

    while let Some(ch) = input[index..].chars().next() {
        let rest = &input[index..];

        if ch == '\\' {
            if let Some(escaped) = rest[1..].chars().next().filter(|c| ESCAPABLE.contains(c)) {
                buffer.push(escaped);
                index += 1 + escaped.len_utf8();
                continue;
            }
        }

        if let Some(marker) = closing_marker {
            if rest.starts_with(marker.closing_token()) {
                flush_buffer(&mut buffer, &mut spans, state);
                index += marker.closing_token().len();
                return Ok((spans, index));
            }
        }

        if rest.starts_with("**") {
            flush_buffer(&mut buffer, &mut spans, state);
            let mut nested_state = state;
            nested_state.bold = true;
            let (nested, new_index) =
                parse_inner(input, index + 2, nested_state, Some(Marker::Bold))?;
            spans.extend(nested);
            index = new_index;
            continue;
        }

        if ch == '*' {
            flush_buffer(&mut buffer, &mut spans, state);
            let mut nested_state = state;
            nested_state.italic = true;
            let (nested, new_index) =
                parse_inner(input, index + 1, nested_state, Some(Marker::Italic))?;
            spans.extend(nested);
            index = new_index;
            continue;
        }

        if rest.starts_with(COLOR_PREFIX) {
            let (color, after_directive) = parse_color_directive(input, index)?;
            flush_buffer(&mut buffer, &mut spans, state);
            let mut nested_state = state;
            nested_state.color = Some(color);
            let (nested, new_index) =
                parse_inner(input, after_directive, nested_state, Some(Marker::Color))?;
            spans.extend(nested);
            index = new_index;
            continue;
        }

        buffer.push(ch);
        index += ch.len_utf8();
    }

    if let Some(marker) = closing_marker {
        Err(ParseError::new(
            index,
            format!("unterminated {}", marker.description()),
        ))
    } else {
        flush_buffer(&mut buffer, &mut spans, state);
        Ok((spans, index))
    }
}

fn flush_buffer(buffer: &mut String, spans: &mut Vec<Span>, state: StyleState) {
    if buffer.is_empty() {
        return;
    }
    spans.push(state.to_span(std::mem::take(buffer)));
}

fn parse_color_directive(input: &str, index: usize) -> Result<(Color, usize), ParseError> {
    let start_hex = index + COLOR_PREFIX.len();
    if !input[start_hex..].starts_with('#') {
        return Err(ParseError::new(
            start_hex,
            "expected `#` followed by a hexadecimal RGB value",
        ));
    }

    let hex_start = start_hex + 1;
    let hex = input
        .get(hex_start..hex_start + 6)
        .ok_or_else(|| {
            ParseError::new(
                hex_start,
                "incomplete color specification; expected 6 hexadecimal digits",
            )
        })?;
    let invalid = || {
        ParseError::new(
            hex_start,
            "invalid RGB specification; use hexadecimal digits only",
        )
    };
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };
    let (r, g, b) = (channel(0..2)?, channel(2..4)?, channel(4..6)?);

    let bracket_index = hex_start + 6;
    if !input[bracket_index..].starts_with(']') {
        return Err(ParseError::new(
            bracket_index,
            "expected `]` to close color directive",
        ));
    }

    let brace_index = bracket_index + 1;
    if !input[brace_index..].starts_with('{') {
        return Err(ParseError::new(
            brace_index,
            "expected `{` to start the colored text",
        ));
    }

    Ok((Color::Rgb(r, g, b), brace_index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_layers_over_base_style() {
        let base = Style::new().with_font_size(11);
        let styled = Span::new("Hello")
            .bold()
            .italic()
            .colored(Color::Rgb(10, 20, 30))
            .to_styled_string(base);
        assert_eq!(styled.s, "Hello");
        assert!(styled.style.is_bold());
        assert!(styled.style.is_italic());
        assert_eq!(styled.style.font_size(), 11);
        assert_eq!(styled.style.color(), Some(Color::Rgb(10, 20, 30)));
    }

    #[test]
    fn parse_plain_text() {
        let spans = parse_markup("Hello world").expect("parse succeeds");
        assert_eq!(spans, vec![Span::new("Hello world")]);
    }

    #[test]
    fn parse_nested_styles() {
        let spans = parse_markup("This is **very *cool***!").expect("parse succeeds");
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].text(), "This is ");
        assert!(!spans[0].is_bold());
        assert!(spans[1].is_bold());
        assert_eq!(spans[1].text(), "very ");
        assert!(spans[2].is_bold());
        assert!(spans[2].is_italic());
        assert_eq!(spans[2].text(), "cool");
        assert_eq!(spans[3].text(), "!");
        assert!(!spans[3].is_bold());
    }

    #[test]
    fn aspect_references_stay_literal() {
        let spans = parse_markup("Write [@elena] or {x} in a scene").expect("parse succeeds");
        assert_eq!(plain_text(&spans), "Write [@elena] or {x} in a scene");
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn escapes_produce_literal_characters() {
        let spans = parse_markup(r"**[.\*]** - regular expressions").expect("parse succeeds");
        assert_eq!(spans[0].text(), "[.*]");
        assert!(spans[0].is_bold());
        assert_eq!(spans[1].text(), " - regular expressions");
    }

    #[test]
    fn parse_color_directive() {
        let spans = parse_markup("[color=#ff0000]{Red} text").expect("parse succeeds");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text(), "Red");
        assert_eq!(spans[0].color(), Some(Color::Rgb(0xff, 0x00, 0x00)));
        assert_eq!(spans[1].text(), " text");
    }

    #[test]
    fn error_on_unterminated_bold() {
        let err = parse_markup("**oops").unwrap_err();
        assert!(err.message().contains("unterminated bold"));
    }

    #[test]
    fn error_on_invalid_color() {
        let err = parse_markup("[color=#12FG34]{x}").unwrap_err();
        assert!(err.message().contains("invalid RGB"));
    }

    #[test]
    fn malformed_markup_falls_back_to_plain_text() {
        let spans = parse_or_plain("Scenes separated by ***");
        assert_eq!(spans, vec![Span::new("Scenes separated by ***")]);
    }
}
