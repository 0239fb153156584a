// src/specs/resource_types.rs
//! Resource types table: `[Resource types, ARN, Condition keys]`.

use crate::core::sanitize::{split_lines, trim_cell};
use crate::error::Result;
use crate::model::ResourceType;
use crate::table::Grid;

use super::{checked_rows, TableKind};

pub fn extract(grid: &Grid) -> Result<Vec<ResourceType>> {
    checked_rows(grid, TableKind::ResourceTypes)
        .map(|row| {
            let row = row?;
            Ok(ResourceType {
                name: trim_cell(&row[0]),
                arn: trim_cell(&row[1]),
                condition_keys: split_lines(&row[2]),
            })
        })
        .collect()
}
