// src/catalog.rs
//
// In-memory catalog of services.
//
// - Catalog: services sorted by name, frozen after `build`. A new snapshot
//            means a new Catalog; nothing is patched in place.
// - SharedCatalog: the one slot readers borrow from while a rebuilt catalog
//                  is swapped in.
//
// Cross-references (action → resource types → condition keys) are by name
// within one service. Names with no matching record simply yield nothing.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::model::{Action, ConditionKey, ResourceType, Service};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Service>", into = "Vec<Service>")]
pub struct Catalog {
    services: Vec<Service>,
    #[serde(skip)]
    names: Vec<NameIndex>,
}

/// Per-service name → positions. Positions keep source order so co-named
/// records come back in the order the page listed them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct NameIndex {
    resource_types: HashMap<String, Vec<usize>>,
    condition_keys: HashMap<String, Vec<usize>>,
}

impl NameIndex {
    fn of(service: &Service) -> Self {
        let mut ix = NameIndex::default();
        for (i, rt) in service.resource_types.iter().enumerate() {
            ix.resource_types.entry(rt.name.clone()).or_default().push(i);
        }
        for (i, ck) in service.condition_keys.iter().enumerate() {
            ix.condition_keys.entry(ck.name.clone()).or_default().push(i);
        }
        ix
    }
}

impl Catalog {
    /// Sort by service name (case-sensitive, stable) and index.
    pub fn build(mut services: Vec<Service>) -> Self {
        services.sort_by(|a, b| a.name.cmp(&b.name));
        let names = services.iter().map(NameIndex::of).collect();
        tracing::debug!(services = services.len(), "catalog built");
        Self { services, names }
    }

    pub fn services(&self) -> &[Service] { &self.services }
    pub fn len(&self) -> usize { self.services.len() }
    pub fn is_empty(&self) -> bool { self.services.is_empty() }

    fn index_of(&self, service: &Service) -> Option<&NameIndex> {
        self.services
            .iter()
            .position(|s| std::ptr::eq(s, service))
            .and_then(|i| self.names.get(i))
    }

    /// Resource types of `service` named by `action`'s references, in reference order.
    ///
    /// A reference matching several co-named resource types yields all of them;
    /// one matching none yields nothing.
    pub fn resource_types_referenced_by<'a>(
        &'a self,
        service: &'a Service,
        action: &'a Action,
    ) -> Vec<&'a ResourceType> {
        let names = action.resource_type_references.iter().map(|r| r.name.as_str());
        match self.index_of(service) {
            Some(ix) => lookup(names, &ix.resource_types, &service.resource_types),
            None => scan(names, &service.resource_types, |rt| &rt.name),
        }
    }

    /// Condition keys of `service` with the given names, in `names` order.
    pub fn condition_keys_named<'a, I, S>(&'a self, service: &'a Service, names: I) -> Vec<&'a ConditionKey>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        let names = names.iter().map(|n| n.as_ref());
        match self.index_of(service) {
            Some(ix) => lookup(names, &ix.condition_keys, &service.condition_keys),
            None => scan(names, &service.condition_keys, |ck| &ck.name),
        }
    }

    /// Names of the condition keys that matter for `action`: its own, then those
    /// of every referenced resource type. First occurrence wins.
    pub fn relevant_condition_keys(&self, service: &Service, action: &Action) -> Vec<String> {
        let own = action.condition_keys.iter();
        let via_resources = self
            .resource_types_referenced_by(service, action)
            .into_iter()
            .flat_map(|rt| rt.condition_keys.iter());
        unique(own.chain(via_resources))
    }
}

impl From<Vec<Service>> for Catalog {
    fn from(services: Vec<Service>) -> Self { Catalog::build(services) }
}

impl From<Catalog> for Vec<Service> {
    fn from(catalog: Catalog) -> Self { catalog.services }
}

fn lookup<'a, 'n, T>(
    names: impl Iterator<Item = &'n str>,
    index: &HashMap<String, Vec<usize>>,
    records: &'a [T],
) -> Vec<&'a T> {
    names
        .filter_map(|n| index.get(n))
        .flatten()
        .filter_map(|&i| records.get(i))
        .collect()
}

// Services not owned by this catalog have no precomputed index.
fn scan<'a, 'n, T>(
    names: impl Iterator<Item = &'n str>,
    records: &'a [T],
    name_of: impl Fn(&T) -> &String,
) -> Vec<&'a T> {
    let name_of = &name_of;
    names
        .flat_map(|n| records.iter().filter(move |r| name_of(*r) == n))
        .collect()
}

/// Order-preserving de-duplication.
pub fn unique<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|&s| seen.insert(s.as_str()))
        .cloned()
        .collect()
}

/// Slot holding the live catalog.
///
/// Readers take an `Arc` and keep using it for as long as they like; `replace`
/// swaps in a freshly built catalog without touching the one they hold.
#[derive(Debug, Default)]
pub struct SharedCatalog {
    current: RwLock<Arc<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self { current: RwLock::new(Arc::new(catalog)) }
    }

    pub fn current(&self) -> Arc<Catalog> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Install `catalog`; returns the one it replaced.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        tracing::info!(services = next.len(), "catalog swapped");
        std::mem::replace(&mut *guard, next)
    }
}

impl Default for Catalog {
    fn default() -> Self { Catalog::build(Vec::new()) }
}
