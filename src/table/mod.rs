// src/table/mod.rs
//! Sparse HTML tables → dense grids.
//!
//! The crawler flattens each `<tr>` into a `Vec<Cell>` carrying the cell's
//! `rowspan`/`colspan` and text. Nothing here looks at markup; `resolve` only
//! expands spans so every later stage can index rows by column position.

pub mod cell;
pub mod grid;

pub use cell::Cell;
pub use grid::{resolve, Grid};
