// src/specs/mod.rs
//! # Table “specs” module
//!
//! One spec per table kind on a service's authorization page. Each spec knows
//! the **column layout** of its table and turns rows of a resolved
//! [`Grid`](crate::table::Grid) into typed records.
//!
//! ## What lives here
//! - **Column layouts** (`TableKind::columns`) and the width check that backs them.
//! - **Cell cleanup**: scalar cells are trimmed, multi-value cells are split on
//!   newlines (see `core::sanitize`).
//! - **Marker handling**, e.g. the `*` that flags a required resource type.
//!
//! ## What does **not** live here
//! - **Span resolution** – that is `table::resolve`; specs only see dense rows.
//! - **Cross-referencing** between tables – that is `catalog`.
//!
//! ## Conventions & invariants
//! - Output order == row order. Display order depends on it.
//! - A row narrower than the layout is an error (`Error::ColumnShape`), never
//!   padded: a short row means span resolution or the source page drifted.
//! - Extra columns are ignored.
//!
//! ## Typical call chain
//! ```text
//! ingest::PageCollector → table::resolve → specs::<kind>::extract → Service
//! ```
use std::fmt;

use crate::error::{Error, Result};
use crate::table::Grid;

pub mod actions;
pub mod condition_keys;
pub mod resource_types;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    Actions,
    ResourceTypes,
    ConditionKeys,
}

impl TableKind {
    /// Minimum number of grid columns a row of this table must have.
    pub fn columns(self) -> usize {
        match self {
            TableKind::Actions => 6,
            TableKind::ResourceTypes | TableKind::ConditionKeys => 3,
        }
    }

    /// Pick the table kind from the text of its header row.
    pub fn classify(header_text: &str) -> Option<TableKind> {
        let h = header_text.trim_start().to_lowercase();
        if h.starts_with("actions") {
            Some(TableKind::Actions)
        } else if h.starts_with("resource types") {
            Some(TableKind::ResourceTypes)
        } else if h.starts_with("condition keys") {
            Some(TableKind::ConditionKeys)
        } else {
            None
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TableKind::Actions => "actions",
            TableKind::ResourceTypes => "resource types",
            TableKind::ConditionKeys => "condition keys",
        })
    }
}

/// Iterate the rows of `grid`, failing on the first one narrower than `kind` allows.
pub(crate) fn checked_rows(
    grid: &Grid,
    kind: TableKind,
) -> impl Iterator<Item = Result<&[String]>> {
    let expected = kind.columns();
    grid.rows().iter().enumerate().map(move |(row, cells)| {
        if cells.len() < expected {
            Err(Error::ColumnShape { table: kind, row, expected, found: cells.len() })
        } else {
            Ok(cells.as_slice())
        }
    })
}
