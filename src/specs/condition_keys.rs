// src/specs/condition_keys.rs
//! Condition keys table: `[Condition keys, Description, Type]`.

use crate::core::sanitize::trim_cell;
use crate::error::Result;
use crate::model::ConditionKey;
use crate::table::Grid;

use super::{checked_rows, TableKind};

pub fn extract(grid: &Grid) -> Result<Vec<ConditionKey>> {
    checked_rows(grid, TableKind::ConditionKeys)
        .map(|row| {
            let row = row?;
            Ok(ConditionKey {
                name: trim_cell(&row[0]),
                description: trim_cell(&row[1]),
                kind: trim_cell(&row[2]),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{resolve, Cell};

    #[test]
    fn extracts_trimmed_fields() {
        let grid = resolve(&[vec![
            Cell::text("\n s3:authType \n"),
            Cell::text(" Filters access by authentication method "),
            Cell::text("String\n"),
        ]]);

        let keys = extract(&grid).unwrap();
        assert_eq!(keys, vec![ConditionKey {
            name: s!("s3:authType"),
            description: s!("Filters access by authentication method"),
            kind: s!("String"),
        }]);
    }

    #[test]
    fn empty_table_yields_nothing() {
        assert!(extract(&resolve(&[])).unwrap().is_empty());
    }
}
