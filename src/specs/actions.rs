// src/specs/actions.rs
//! Actions table: `[Action, Description, Access level, Resource types,
//! Condition keys, Dependent actions]`.
//!
//! An action that applies to several resource types is spread over several
//! rows with the first three columns rowspanned, so after resolution the same
//! action name shows up on consecutive rows. Those rows stay separate here and
//! are merged at lookup time (`resolve`).

use crate::core::sanitize::{split_lines, trim_cell};
use crate::error::Result;
use crate::model::{Action, ResourceTypeReference};
use crate::table::Grid;

use super::{checked_rows, TableKind};

const REQUIRED_MARKER: char = '*';

pub fn extract(grid: &Grid) -> Result<Vec<Action>> {
    checked_rows(grid, TableKind::Actions)
        .map(|row| {
            let row = row?;
            Ok(Action {
                name: trim_cell(&row[0]),
                description: trim_cell(&row[1]),
                access_level: trim_cell(&row[2]),
                resource_type_references: split_lines(&row[3])
                    .iter()
                    .map(|e| parse_reference(e))
                    .collect(),
                condition_keys: split_lines(&row[4]),
                dependent_actions: split_lines(&row[5]),
            })
        })
        .collect()
}

/// `"bucket*"` → `bucket`, required.
pub fn parse_reference(entry: &str) -> ResourceTypeReference {
    match entry.split_once(REQUIRED_MARKER) {
        Some((name, _)) => ResourceTypeReference { name: s!(name.trim_end()), required: true },
        None => ResourceTypeReference { name: s!(entry), required: false },
    }
}
