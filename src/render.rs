// src/render.rs
// Plain-text summary of a lookup hit, for the CLI. No colours, no table
// layout; a richer frontend renders `Resolved` itself.

use std::fmt::Write;

use crate::catalog::{unique, Catalog};
use crate::model::ResourceTypeReference;
use crate::resolve::Resolved;

pub const NO_MATCH: &str = "No match";

/// `bucket (required), object`
pub fn join_references(refs: &[ResourceTypeReference]) -> String {
    refs.iter()
        .map(|r| if r.required { format!("{} (required)", r.name) } else { r.name.clone() })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn summary(catalog: &Catalog, hit: &Resolved<'_>) -> String {
    let service = hit.service;
    let action = &hit.action;

    let mut out = String::new();
    let _ = writeln!(out, "Service: {}", service.name);
    let _ = writeln!(out, "Action: {}:{}", service.prefix, action.name);
    let _ = writeln!(out, "Description: {}", action.description);
    let _ = writeln!(out, "Access Level: {}", action.access_level);
    let _ = writeln!(out, "Resource Types: {}", join_references(&action.resource_type_references));
    let _ = write!(out, "Condition Keys: {}", unique(&action.condition_keys).join(", "));

    let resource_types = catalog.resource_types_referenced_by(service, action);
    if !resource_types.is_empty() {
        out.push_str("\n\nRelevant Resource Types");
        for rt in resource_types {
            let _ = write!(out, "\n  {}  {}", rt.name, rt.arn);
            if !rt.condition_keys.is_empty() {
                let _ = write!(out, "  [{}]", rt.condition_keys.join(", "));
            }
        }
    }

    let relevant = catalog.relevant_condition_keys(service, action);
    let keys = catalog.condition_keys_named(service, &relevant);
    if !keys.is_empty() {
        out.push_str("\n\nRelevant Condition Keys");
        for ck in keys {
            let _ = write!(out, "\n  {}  {}  {}", ck.name, ck.kind, ck.description);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Action, ConditionKey, ResourceType, Service};
    use crate::resolve::ActionIndex;

    #[test]
    fn summary_lists_record_and_cross_references() {
        let catalog = Catalog::build(vec![Service {
            url: s!("u"),
            name: s!("Amazon S3"),
            prefix: s!("s3"),
            actions: vec![Action {
                name: s!("PutObject"),
                description: s!("Upload"),
                access_level: s!("Write"),
                resource_type_references: vec![
                    ResourceTypeReference { name: s!("object"), required: true },
                    ResourceTypeReference { name: s!("gone"), required: false },
                ],
                condition_keys: vec![s!("s3:x"), s!("s3:x"), s!("aws:unknown")],
                dependent_actions: vec![],
            }],
            resource_types: vec![ResourceType {
                name: s!("object"),
                arn: s!("arn:aws:s3:::b/o"),
                condition_keys: vec![s!("s3:y")],
            }],
            condition_keys: vec![
                ConditionKey { name: s!("s3:x"), description: s!("X"), kind: s!("String") },
                ConditionKey { name: s!("s3:y"), description: s!("Y"), kind: s!("Bool") },
            ],
        }]);
        let index = ActionIndex::build(&catalog);
        let hit = index.resolve("s3:put").unwrap();

        let text = summary(&catalog, &hit);
        assert!(text.starts_with("Service: Amazon S3\nAction: s3:PutObject\n"));
        assert!(text.contains("Resource Types: object (required), gone\n"));
        assert!(text.contains("Condition Keys: s3:x, aws:unknown"));
        assert!(text.contains("\n  object  arn:aws:s3:::b/o  [s3:y]"));
        assert!(text.contains("\n  s3:x  String  X\n  s3:y  Bool  Y"));
        assert!(!text.contains("aws:unknown  "));
    }
}
