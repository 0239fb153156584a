// src/resolve.rs
//! Fuzzy action lookup.
//!
//! Every action in a [`Catalog`] gets a key `prefix:name`, lower-cased. A query
//! is ranked against all keys by edit distance, restricted to keys the query
//! is a subsequence of. Keys that literally start with the query win over
//! closer non-prefix keys, so typing `s3:get` never lands on `s3:bucketget…`
//! just because it happens to be shorter.
//!
//! The reference lists an action once per table fragment it appears in, so a
//! key can stand for several rows. Those rows are merged on the way out
//! (see [`Action::merge`]).

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::model::{Action, Service};

/// Position of one action row inside a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionRef {
    pub service: usize,
    pub action: usize,
}

/// Lookup index over one catalog. Read-only once built.
#[derive(Debug)]
pub struct ActionIndex<'c> {
    catalog: &'c Catalog,
    keys: Vec<String>,
    groups: Vec<Vec<ActionRef>>,
    // key → position in `keys` / `groups`
    slot: HashMap<String, usize>,
}

/// A key that matched a query, with its edit distance (lower is closer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ranked<'i> {
    pub key: &'i str,
    pub distance: usize,
}

/// What the renderer gets for a successful query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved<'c> {
    pub key: String,
    pub service: &'c Service,
    pub action: Action,
}

impl<'c> ActionIndex<'c> {
    pub fn build(catalog: &'c Catalog) -> Self {
        let mut keys: Vec<String> = Vec::new();
        let mut groups: Vec<Vec<ActionRef>> = Vec::new();
        let mut slot: HashMap<String, usize> = HashMap::new();

        for (si, service) in catalog.services().iter().enumerate() {
            for (ai, action) in service.actions.iter().enumerate() {
                let key = join!(&service.prefix, ":", &action.name).to_lowercase();
                let at = *slot.entry(key.clone()).or_insert_with(|| {
                    keys.push(key);
                    groups.push(Vec::new());
                    groups.len() - 1
                });
                groups[at].push(ActionRef { service: si, action: ai });
            }
        }

        tracing::debug!(keys = keys.len(), "action index built");
        Self { catalog, keys, groups, slot }
    }

    pub fn catalog(&self) -> &'c Catalog { self.catalog }
    pub fn keys(&self) -> &[String] { &self.keys }
    pub fn len(&self) -> usize { self.keys.len() }
    pub fn is_empty(&self) -> bool { self.keys.is_empty() }

    /// All rows filed under `key` (already lower-cased), in catalog order.
    pub fn group(&self, key: &str) -> &[ActionRef] {
        self.slot
            .get(key)
            .and_then(|&i| self.groups.get(i))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Keys matching `query`, best first.
    ///
    /// When some keys start with the query only those are returned. Equal
    /// distances keep index order.
    pub fn rank(&self, query: &str) -> Vec<Ranked<'_>> {
        let q = query.to_lowercase();

        let mut ranked: Vec<Ranked<'_>> = self
            .keys
            .iter()
            .filter(|k| is_subsequence(&q, k))
            .map(|k| Ranked { key: k.as_str(), distance: strsim::levenshtein(&q, k) })
            .collect();
        ranked.sort_by_key(|r| r.distance);

        if ranked.iter().any(|r| r.key.starts_with(&q)) {
            ranked.retain(|r| r.key.starts_with(&q));
        }
        ranked
    }

    /// Best action for `query`, merged across the rows filed under its key.
    /// `None` when nothing matches, which callers show as an empty state.
    pub fn resolve(&self, query: &str) -> Option<Resolved<'c>> {
        let best = self.rank(query).into_iter().next()?;
        let rows = self.rows(best.key);

        let (service, _) = *rows.first()?;
        let action = Action::merge(rows.iter().map(|(_, a)| *a))?;
        tracing::debug!(query, key = best.key, rows = rows.len(), "resolved");

        Some(Resolved { key: s!(best.key), service, action })
    }

    /// The rows behind `key`, in the order [`group`](Self::group) lists them.
    pub fn rows(&self, key: &str) -> Vec<(&'c Service, &'c Action)> {
        let services = self.catalog.services();
        self.group(key)
            .iter()
            .filter_map(|r| {
                let service = services.get(r.service)?;
                Some((service, service.actions.get(r.action)?))
            })
            .collect()
    }
}

/// Every char of `needle` appears in `hay`, in order.
fn is_subsequence(needle: &str, hay: &str) -> bool {
    let mut hay = hay.chars();
    needle.chars().all(|c| hay.any(|h| h == c))
}
