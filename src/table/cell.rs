// src/table/cell.rs

use crate::error::{Error, Result};

/// One `<td>` as the crawler saw it.
///
/// A span of `0` is the HTML "extend to the end" form: `row_span == 0` runs to
/// the last row, `col_span == 0` to the last column. Both are turned into
/// concrete counts by [`super::resolve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row_span: u32,
    pub col_span: u32,
    pub text: String,
}

impl Cell {
    pub fn new(row_span: u32, col_span: u32, text: impl Into<String>) -> Self {
        Self { row_span, col_span, text: text.into() }
    }

    /// Plain 1×1 cell.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(1, 1, text)
    }

    /// Build a cell from raw attribute values. Absent attributes default to 1.
    ///
    /// `row`/`cell` only locate the offending attribute in the error.
    pub fn from_attrs(
        row: usize,
        cell: usize,
        rowspan: Option<&str>,
        colspan: Option<&str>,
        text: impl Into<String>,
    ) -> Result<Self> {
        let row_span = parse_span(row, cell, "rowspan", rowspan)?;
        let col_span = parse_span(row, cell, "colspan", colspan)?;
        Ok(Self::new(row_span, col_span, text))
    }
}

fn parse_span(row: usize, cell: usize, attr: &'static str, value: Option<&str>) -> Result<u32> {
    let Some(raw) = value else { return Ok(1) };
    raw.trim().parse::<u32>().map_err(|_| Error::MalformedSpan {
        row,
        cell,
        attr,
        value: s!(raw),
    })
}
