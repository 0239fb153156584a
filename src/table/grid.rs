// src/table/grid.rs
//
// Sparse → dense table expansion.
//
// Two passes over the rows:
//   1. count the columns the widest row needs (open rowspans included),
//   2. fill a rows × cols matrix, skipping columns still covered by a
//      rowspan from above.
//
// Span 0 means "to the end" and is converted to a concrete count here, so
// nothing downstream ever sees a zero span.

use super::Cell;

/// Rectangular matrix of cell texts. Every row has `col_count()` entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
    cols: usize,
}

impl Grid {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn col_count(&self) -> usize { self.cols }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn rows(&self) -> &[Vec<String>] { &self.rows }

    pub fn row(&self, i: usize) -> Option<&[String]> {
        self.rows.get(i).map(|r| r.as_slice())
    }

    pub fn into_rows(self) -> Vec<Vec<String>> { self.rows }
}

/// Expand `rows` into a dense grid.
///
/// Positions no cell reaches are `""`. Rowspans that would run past the last
/// row are cut off; no phantom rows are added.
pub fn resolve(rows: &[Vec<Cell>]) -> Grid {
    let row_count = rows.len();
    let col_count = count_columns(rows);

    let mut table = vec![vec![s!(); col_count]; row_count];

    // Rows (current one included) each column is still covered for.
    let mut pending = vec![0usize; col_count];

    for (row_ix, row) in rows.iter().enumerate() {
        let mut cursor = 0usize;

        for cell in row {
            // Columns held by a rowspan from a previous row are not ours.
            let mut col = cursor;
            while pending.get(col).is_some_and(|&p| p > 0) {
                col += 1;
            }

            let row_span = concrete_span(cell.row_span, row_count - row_ix);
            let col_span = concrete_span(cell.col_span, col_count.saturating_sub(col));

            let row_end = (row_ix + row_span).min(row_count);
            let col_end = (col + col_span).min(col_count);
            for r in row_ix..row_end {
                for c in col..col_end {
                    table[r][c].clone_from(&cell.text);
                }
            }
            for p in pending.iter_mut().take(col_end).skip(col) {
                *p = row_span;
            }

            cursor = col + col_span;
        }

        for p in pending.iter_mut() {
            *p = p.saturating_sub(1);
        }
    }

    Grid { rows: table, cols: col_count }
}

/// Width of the widest row.
///
/// A row claims the colspans of all but its last cell, plus one for the last
/// cell (its own colspan is ignored so an extended trailing cell never adds
/// phantom columns), plus one per rowspan still open from rows above. A
/// non-last `colspan == 0` counts as a plain single column.
fn count_columns(rows: &[Vec<Cell>]) -> usize {
    let row_count = rows.len();
    let mut open: Vec<usize> = Vec::new();
    let mut cols = 0;

    for (row_ix, row) in rows.iter().enumerate() {
        let own = match row.split_last() {
            Some((_, init)) => init.iter().map(|c| c.col_span.max(1) as usize).sum::<usize>() + 1,
            None => 0,
        };
        cols = cols.max(own + open.len());

        open.extend(row.iter().map(|c| concrete_span(c.row_span, row_count - row_ix)));
        open = open.into_iter().filter(|&s| s > 1).map(|s| s - 1).collect();
    }

    cols
}

#[inline]
fn concrete_span(span: u32, to_end: usize) -> usize {
    if span == 0 { to_end } else { span as usize }
}
