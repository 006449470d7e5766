//! Styled tables with a highlighted header and banded body rows.

use genpdf::style::Color;

use crate::error::{InvalidTableShapeError, StyleError};
use crate::model::TableSpec;
use crate::style::{names, StyleRegistry, StyleSpec, COLOR_LIGHT, COLOR_MUTED, COLOR_PRIMARY};

const POINT_MM: f64 = 25.4 / 72.0;

/// Vertical padding of header cells, in points.
pub const HEADER_PADDING_PT: f64 = 10.0;
/// Vertical padding of body cells, in points.
pub const BODY_PADDING_PT: f64 = 8.0;
/// Horizontal padding of every cell, in points.
pub const HORIZONTAL_PADDING_PT: f64 = 8.0;

/// Converts typographic points to millimetres.
pub fn pt_to_mm(points: f64) -> f64 {
    points * POINT_MM
}

/// Whether the row at absolute index `row` (0 is the header) is tinted.
///
/// Rows at an even index of at least 2 are banded, that is the second, fourth, ... body row.
pub fn is_banded(row: usize) -> bool {
    row >= 2 && row % 2 == 0
}

/// One row of a [`TableBlock`].
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    cells: Vec<String>,
    background: Option<Color>,
}

impl TableRow {
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Fill painted behind the row.
    pub fn background(&self) -> Option<Color> {
        self.background
    }
}

/// A validated table ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct TableBlock {
    header: TableRow,
    body: Vec<TableRow>,
    column_widths_mm: Option<Vec<f64>>,
    header_style: StyleSpec,
    cell_style: StyleSpec,
    grid_color: Color,
}

impl TableBlock {
    pub fn header(&self) -> &TableRow {
        &self.header
    }

    pub fn body(&self) -> &[TableRow] {
        &self.body
    }

    /// Header first, then the body rows.
    pub fn rows(&self) -> impl Iterator<Item = &TableRow> {
        std::iter::once(&self.header).chain(self.body.iter())
    }

    /// Total number of rows including the header.
    pub fn row_count(&self) -> usize {
        self.body.len() + 1
    }

    pub fn column_count(&self) -> usize {
        self.header.cells.len()
    }

    pub fn column_widths_mm(&self) -> Option<&[f64]> {
        self.column_widths_mm.as_deref()
    }

    pub fn header_style(&self) -> &StyleSpec {
        &self.header_style
    }

    pub fn cell_style(&self) -> &StyleSpec {
        &self.cell_style
    }

    pub fn grid_color(&self) -> Color {
        self.grid_color
    }

    /// Zero-based indices of the body rows that carry the band tint.
    pub fn banded_rows(&self) -> Vec<usize> {
        self.body
            .iter()
            .enumerate()
            .filter(|(_, row)| row.background == Some(COLOR_LIGHT))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Turns [`TableSpec`]s into [`TableBlock`]s using the registry's table styles.
#[derive(Clone, Debug)]
pub struct TableBuilder {
    header_style: StyleSpec,
    cell_style: StyleSpec,
}

impl TableBuilder {
    /// Resolves the `TableHeader` and `TableCell` styles from `styles`.
    pub fn new(styles: &StyleRegistry) -> Result<Self, StyleError> {
        Ok(Self {
            header_style: styles.resolve(names::TABLE_HEADER)?.clone(),
            cell_style: styles.resolve(names::TABLE_CELL)?.clone(),
        })
    }

    /// Validates the grid and applies header colors and banding.
    pub fn build(&self, spec: &TableSpec) -> Result<TableBlock, InvalidTableShapeError> {
        spec.validate()?;

        let mut rows = spec.rows().iter().enumerate().map(|(index, cells)| TableRow {
            cells: cells.clone(),
            background: if index == 0 {
                Some(COLOR_PRIMARY)
            } else if is_banded(index) {
                Some(COLOR_LIGHT)
            } else {
                None
            },
        });
        let header = rows.next().ok_or(InvalidTableShapeError::Empty)?;

        Ok(TableBlock {
            header,
            body: rows.collect(),
            column_widths_mm: spec.column_widths_mm().map(<[f64]>::to_vec),
            header_style: self.header_style.clone(),
            cell_style: self.cell_style.clone(),
            grid_color: COLOR_MUTED,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> TableBuilder {
        let styles = StyleRegistry::manual_defaults().expect("defaults");
        TableBuilder::new(&styles).expect("table styles")
    }

    fn grid(rows: usize, cols: usize) -> TableSpec {
        TableSpec::new((0..rows).map(|r| (0..cols).map(move |c| format!("r{r}c{c}"))))
    }

    #[test]
    fn three_rows_band_only_the_second_body_row() {
        let table = builder().build(&grid(3, 2)).expect("valid table");
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.banded_rows(), vec![1]);
        assert_eq!(table.header().background(), Some(COLOR_PRIMARY));
        assert_eq!(table.body()[0].background(), None);
    }

    #[test]
    fn header_only_table_has_no_bands() {
        let table = builder().build(&grid(1, 3)).expect("valid table");
        assert!(table.body().is_empty());
        assert!(table.banded_rows().is_empty());
    }

    #[test]
    fn banding_alternates_through_long_tables() {
        let table = builder().build(&grid(8, 2)).expect("valid table");
        assert_eq!(table.banded_rows(), vec![1, 3, 5]);
    }

    #[test]
    fn shape_errors_iff_a_row_differs_from_the_header() {
        let builder = builder();
        for (rows, cols) in [(1, 1), (2, 5), (6, 3)] {
            assert!(builder.build(&grid(rows, cols)).is_ok());
        }

        let ragged = TableSpec::new(vec![vec!["Key", "Action"], vec!["Ctrl+S"]]);
        assert_eq!(
            builder.build(&ragged).unwrap_err(),
            InvalidTableShapeError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn header_uses_inverse_text() {
        let table = builder().build(&grid(2, 2)).expect("valid table");
        assert!(table.header_style().is_bold());
        assert_eq!(table.header_style().color(), crate::style::COLOR_WHITE);
        assert_eq!(table.grid_color(), COLOR_MUTED);
    }

    #[test]
    fn explicit_widths_are_kept() {
        let spec = grid(2, 2).with_column_widths_mm(vec![50.0, 90.0]);
        let table = builder().build(&spec).expect("valid table");
        assert_eq!(table.column_widths_mm(), Some(&[50.0, 90.0][..]));
    }
}
