// src/lib.rs
//! Catalog and fuzzy lookup for the AWS service authorization reference.
//!
//! ```text
//! crawler rows ─▶ table::resolve ─▶ specs::* ─▶ Catalog ─▶ ActionIndex::resolve ─▶ render
//! ```

#[macro_use]
pub mod macros;

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod ingest;
pub mod log;
pub mod model;
pub mod progress;
pub mod render;
pub mod resolve;
pub mod specs;
pub mod store;
pub mod table;

#[cfg(feature = "cli")]
pub mod cli;

pub use catalog::{Catalog, SharedCatalog};
pub use error::{Error, Result};
pub use model::{Action, ConditionKey, ResourceType, ResourceTypeReference, Service};
pub use resolve::{ActionIndex, Resolved};
