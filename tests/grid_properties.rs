// tests/grid_properties.rs
//
// Shape guarantees of table::resolve over arbitrary span layouts.
//
use iam_policy_helper::table::{resolve, Cell};
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = Cell> {
    (0u32..4, 0u32..4, "[A-Z]{0,2}").prop_map(|(r, c, t)| Cell::new(r, c, t))
}

fn table() -> impl Strategy<Value = Vec<Vec<Cell>>> {
    prop::collection::vec(prop::collection::vec(cell(), 0..6), 0..8)
}

// Same layouts with the last cell of every row set to colspan 0.
fn table_with_open_last_cells() -> impl Strategy<Value = Vec<Vec<Cell>>> {
    table().prop_map(|mut rows| {
        for last in rows.iter_mut().filter_map(|r| r.last_mut()) {
            last.col_span = 0;
        }
        rows
    })
}

proptest! {
    #[test]
    fn grid_is_rectangular(rows in table()) {
        let grid = resolve(&rows);
        prop_assert_eq!(grid.row_count(), rows.len());
        for row in grid.rows() {
            prop_assert_eq!(row.len(), grid.col_count());
        }
    }

    #[test]
    fn resolution_is_deterministic(rows in table()) {
        prop_assert_eq!(resolve(&rows), resolve(&rows));
    }

    #[test]
    fn every_text_comes_from_some_cell(rows in table()) {
        let grid = resolve(&rows);
        for text in grid.rows().iter().flatten() {
            prop_assert!(text.is_empty() || rows.iter().flatten().any(|c| &c.text == text));
        }
    }

    #[test]
    fn open_last_cells_add_no_columns(rows in table_with_open_last_cells()) {
        let mut closed = rows.clone();
        for last in closed.iter_mut().filter_map(|r| r.last_mut()) {
            last.col_span = 1;
        }
        let grid = resolve(&rows);
        prop_assert_eq!(grid.col_count(), resolve(&closed).col_count());
        for row in grid.rows() {
            prop_assert_eq!(row.len(), grid.col_count());
        }
    }

    #[test]
    fn plain_rows_resolve_verbatim(rows in prop::collection::vec(prop::collection::vec("[a-z]{1,3}", 1..5), 1..6)) {
        // Only 1×1 cells: each row is left-aligned, the rest padded with "".
        let cells: Vec<Vec<Cell>> = rows.iter().map(|r| r.iter().map(|t| Cell::text(t.as_str())).collect()).collect();
        let grid = resolve(&cells);
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        prop_assert_eq!(grid.col_count(), width);
        for (got, want) in grid.rows().iter().zip(&rows) {
            prop_assert_eq!(&got[..want.len()], want.as_slice());
            prop_assert!(got[want.len()..].iter().all(String::is_empty));
        }
    }
}

fn expect(rows: Vec<Vec<Cell>>, want: &[&[&str]]) {
    let got = resolve(&rows).into_rows();
    let want: Vec<Vec<String>> = want.iter().map(|r| r.iter().map(|s| s.to_string()).collect()).collect();
    assert_eq!(got, want);
}

#[test]
fn rowspan_scenario() {
    let c = Cell::new;
    expect(
        vec![
            vec![c(1, 1, "A"), c(1, 1, "B")],
            vec![c(2, 1, "C"), c(1, 1, "D")],
            vec![c(1, 1, "E"), c(1, 1, "F")],
            vec![c(1, 1, "G"), c(1, 1, "H")],
        ],
        &[&["A", "B", ""], &["C", "D", ""], &["C", "E", "F"], &["G", "H", ""]],
    );
}

#[test]
fn span_to_end_scenario() {
    let c = Cell::new;
    expect(
        vec![
            vec![c(3, 1, "A"), c(0, 1, "B"), c(1, 1, "C"), c(1, 2, "D")],
            vec![c(1, 0, "E")],
        ],
        &[&["A", "B", "C", "D"], &["A", "B", "E", "E"]],
    );
}
