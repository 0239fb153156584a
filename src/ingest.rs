// src/ingest.rs
//! Crawl results → [`Catalog`].
//!
//! The crawler visits pages concurrently and reports what it finds per URL:
//! the "service prefix" paragraph and the body rows of the three tables. All
//! of that lands in one URL-keyed map behind a single mutex
//! ([`PageCollector`]). Once the crawl is over, [`PageCollector::finish`] runs
//! the sequential pipeline:
//!
//! ```text
//! rows of cells ─ table::resolve ─▶ Grid ─ specs::<kind>::extract ─▶ records ─▶ Service ─▶ Catalog
//! ```
//!
//! Any error aborts the whole ingest; the live catalog is never half-updated.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::catalog::Catalog;
use crate::core::sanitize::{is_blank, normalize_ws};
use crate::error::Result;
use crate::model::Service;
use crate::progress::Progress;
use crate::specs::{self, TableKind};
use crate::table::{resolve, Cell};

const PREFIX_MARKER: &str = "service prefix";

/// Everything scraped from one service page, before span resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceCells {
    pub name: String,
    pub prefix: String,
    pub actions: Vec<Vec<Cell>>,
    pub resource_types: Vec<Vec<Cell>>,
    pub condition_keys: Vec<Vec<Cell>>,
}

impl ServiceCells {
    pub fn rows(&self, kind: TableKind) -> &[Vec<Cell>] {
        match kind {
            TableKind::Actions => &self.actions,
            TableKind::ResourceTypes => &self.resource_types,
            TableKind::ConditionKeys => &self.condition_keys,
        }
    }

    fn rows_mut(&mut self, kind: TableKind) -> &mut Vec<Vec<Cell>> {
        match kind {
            TableKind::Actions => &mut self.actions,
            TableKind::ResourceTypes => &mut self.resource_types,
            TableKind::ConditionKeys => &mut self.condition_keys,
        }
    }
}

/// Raw attributes of one `<td>`, as the crawler read them.
#[derive(Clone, Copy, Debug)]
pub struct RawCell<'a> {
    pub rowspan: Option<&'a str>,
    pub colspan: Option<&'a str>,
    pub text: &'a str,
}

/// Shared, URL-keyed scratch space for a crawl in progress.
///
/// Every method takes `&self`; crawler workers may hold it behind an `Arc`.
#[derive(Debug, Default)]
pub struct PageCollector {
    pages: Mutex<BTreeMap<String, ServiceCells>>,
}

impl PageCollector {
    pub fn new() -> Self { Self::default() }

    fn pages(&self) -> MutexGuard<'_, BTreeMap<String, ServiceCells>> {
        match self.pages.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// A request for `url` went out; start (or restart) its entry.
    pub fn begin_page(&self, url: &str) {
        self.pages().insert(s!(url), ServiceCells::default());
    }

    /// Feed a `#main-content` paragraph. Only the one mentioning the service
    /// prefix counts; its text up to the first `(` is the service name.
    /// Returns whether the paragraph was used.
    pub fn record_heading(&self, url: &str, paragraph: &str, prefix: &str) -> bool {
        if !paragraph.contains(PREFIX_MARKER) {
            return false;
        }
        let name = paragraph.split('(').next().unwrap_or_default();

        let mut pages = self.pages();
        let page = pages.entry(s!(url)).or_default();
        page.name = normalize_ws(name);
        page.prefix = s!(prefix.trim());
        true
    }

    /// Append one body row of a table.
    pub fn push_row(&self, url: &str, kind: TableKind, row: Vec<Cell>) {
        self.pages().entry(s!(url)).or_default().rows_mut(kind).push(row);
    }

    /// Append one body row given raw span attributes.
    ///
    /// A span that is not a non-negative integer fails with the row/cell
    /// position in the table.
    pub fn push_raw_row(&self, url: &str, kind: TableKind, cells: &[RawCell<'_>]) -> Result<()> {
        let mut pages = self.pages();
        let rows = pages.entry(s!(url)).or_default().rows_mut(kind);
        let row_ix = rows.len();

        let row = cells
            .iter()
            .enumerate()
            .map(|(i, c)| Cell::from_attrs(row_ix, i, c.rowspan, c.colspan, c.text))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| e.in_table(url, kind))?;

        rows.push(row);
        Ok(())
    }

    pub fn len(&self) -> usize { self.pages().len() }
    pub fn is_empty(&self) -> bool { self.pages().is_empty() }

    /// Take the collected pages out. The crawl must be over.
    pub fn into_pages(self) -> BTreeMap<String, ServiceCells> {
        match self.pages.into_inner() {
            Ok(pages) => pages,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Build the catalog from everything collected.
    ///
    /// Entries whose URL is blank are skipped.
    pub fn finish(self, mut progress: Option<&mut dyn Progress>) -> Result<Catalog> {
        let pages = self.into_pages();

        if let Some(p) = progress.as_deref_mut() {
            p.begin(pages.len());
        }

        let mut services = Vec::with_capacity(pages.len());
        for (url, cells) in &pages {
            if is_blank(url) {
                tracing::warn!("skipping page with blank url");
                continue;
            }

            let service = match build_service(url, cells) {
                Ok(s) => s,
                Err(e) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.log(&format!("Failed: {e}"));
                        p.finish();
                    }
                    return Err(e);
                }
            };
            services.push(service);

            if let Some(p) = progress.as_deref_mut() {
                p.item_done(url);
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }

        let catalog = Catalog::build(services);
        tracing::info!(services = catalog.len(), "ingest complete");
        Ok(catalog)
    }
}

/// Resolve and extract the three tables of one page.
pub fn build_service(url: &str, cells: &ServiceCells) -> Result<Service> {
    let grid = |kind: TableKind| {
        let g = resolve(cells.rows(kind));
        tracing::debug!(url, table = %kind, rows = g.row_count(), cols = g.col_count(), "table resolved");
        g
    };

    let actions = specs::actions::extract(&grid(TableKind::Actions))
        .map_err(|e| e.in_table(url, TableKind::Actions))?;
    let resource_types = specs::resource_types::extract(&grid(TableKind::ResourceTypes))
        .map_err(|e| e.in_table(url, TableKind::ResourceTypes))?;
    let condition_keys = specs::condition_keys::extract(&grid(TableKind::ConditionKeys))
        .map_err(|e| e.in_table(url, TableKind::ConditionKeys))?;

    Ok(Service {
        url: s!(url),
        name: cells.name.clone(),
        prefix: cells.prefix.clone(),
        actions,
        resource_types,
        condition_keys,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const URL: &str = "https://docs.example.com/list_amazons3.html";

    #[test]
    fn heading_needs_service_prefix_marker() {
        let pc = PageCollector::new();
        pc.begin_page(URL);
        assert!(!pc.record_heading(URL, "Amazon S3 is a storage service.", "s3"));
        assert!(pc.record_heading(
            URL,
            "Amazon S3  (service prefix: s3) provides the following",
            " s3 ",
        ));

        let pages = pc.into_pages();
        assert_eq!(pages[URL].name, "Amazon S3");
        assert_eq!(pages[URL].prefix, "s3");
    }

    #[test]
    fn begin_page_resets_entry() {
        let pc = PageCollector::new();
        pc.push_row(URL, TableKind::Actions, vec![Cell::text("x")]);
        pc.begin_page(URL);
        assert!(pc.into_pages()[URL].actions.is_empty());
    }

    #[test]
    fn raw_row_with_bad_span_names_table_and_row() {
        let pc = PageCollector::new();
        let ok = RawCell { rowspan: None, colspan: None, text: "bucket" };
        pc.push_raw_row(URL, TableKind::ResourceTypes, &[ok]).unwrap();

        let bad = RawCell { rowspan: Some("x"), colspan: None, text: "object" };
        let err = pc.push_raw_row(URL, TableKind::ResourceTypes, &[ok, bad]).unwrap_err();
        match err {
            Error::Table { url, table, source } => {
                assert_eq!(url, URL);
                assert_eq!(table, TableKind::ResourceTypes);
                assert!(matches!(*source, Error::MalformedSpan { row: 1, cell: 1, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
        // the failed row is not kept
        assert_eq!(pc.into_pages()[URL].resource_types.len(), 1);
    }

    #[test]
    fn blank_urls_are_skipped() {
        let pc = PageCollector::new();
        pc.begin_page(" \n");
        pc.begin_page(URL);
        pc.record_heading(URL, "Amazon S3 (service prefix: s3)", "s3");

        let catalog = pc.finish(None).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.services()[0].url, URL);
    }

    #[test]
    fn shape_error_carries_page_and_table() {
        let pc = PageCollector::new();
        pc.push_row(URL, TableKind::ConditionKeys, vec![Cell::text("s3:x"), Cell::text("d")]);
        match pc.finish(None).unwrap_err() {
            Error::Table { table, source, .. } => {
                assert_eq!(table, TableKind::ConditionKeys);
                assert!(matches!(*source, Error::ColumnShape { expected: 3, found: 2, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
