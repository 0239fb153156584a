// benches/grid.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use iam_policy_helper::table::{resolve, Cell};
use iam_policy_helper::{specs, ActionIndex, Catalog, Service};

/// Actions table shaped like a large service page: every third action spans
/// three rows for its resource types.
fn synthetic_actions(n: usize) -> Vec<Vec<Cell>> {
    let mut rows = Vec::new();
    for i in 0..n {
        if i % 3 == 0 {
            rows.push(vec![
                Cell::new(3, 1, format!("Action{i}")),
                Cell::new(3, 1, "Grants permission"),
                Cell::new(3, 1, "Write"),
                Cell::text("bucket*"),
                Cell::text("\ns3:x\ns3:y\n"),
                Cell::text(""),
            ]);
            for rt in ["object", "accesspoint"] {
                rows.push(vec![Cell::text(rt), Cell::text(""), Cell::text("")]);
            }
        } else {
            rows.push(
                ["", "Grants permission", "Read", "bucket", "", ""]
                    .iter()
                    .enumerate()
                    .map(|(c, t)| Cell::text(if c == 0 { format!("Action{i}") } else { t.to_string() }))
                    .collect(),
            );
        }
    }
    rows
}

fn bench_grid(c: &mut Criterion) {
    let rows = synthetic_actions(600);

    c.bench_function("resolve_actions_table", |b| {
        b.iter(|| {
            let grid = resolve(black_box(&rows));
            black_box(grid.col_count())
        })
    });

    let grid = resolve(&rows);
    c.bench_function("extract_actions", |b| {
        b.iter(|| black_box(specs::actions::extract(black_box(&grid)).map(|a| a.len())))
    });

    let actions = specs::actions::extract(&grid).unwrap_or_default();
    let catalog = Catalog::build(vec![Service {
        name: "Amazon S3".into(),
        prefix: "s3".into(),
        actions,
        ..Default::default()
    }]);
    let index = ActionIndex::build(&catalog);
    c.bench_function("resolve_query", |b| {
        b.iter(|| black_box(index.resolve(black_box("s3:action4"))).is_some())
    });
}

criterion_group!(benches, bench_grid);
criterion_main!(benches);
