// src/model.rs
//! Typed records of the service authorization reference.
//!
//! Field names on the wire are fixed by the snapshot format (`rawData.json`),
//! hence the PascalCase renames. Lists written as JSON `null` load as empty.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Service {
    #[serde(rename = "URL")]
    pub url: String,
    pub name: String,
    pub prefix: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub actions: Vec<Action>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resource_types: Vec<ResourceType>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub condition_keys: Vec<ConditionKey>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Action {
    pub name: String,
    pub description: String,
    pub access_level: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resource_type_references: Vec<ResourceTypeReference>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub condition_keys: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dependent_actions: Vec<String>,
}

/// A resource type named in an action row. `required` comes from a trailing `*`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceTypeReference {
    pub name: String,
    pub required: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceType {
    pub name: String,
    #[serde(rename = "ARN")]
    pub arn: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub condition_keys: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConditionKey {
    pub name: String,
    pub description: String,
    #[serde(rename = "Type")]
    pub kind: String,
}

impl Action {
    /// Fold same-named rows into one action.
    ///
    /// Scalars come from the first row; list fields are concatenated in order,
    /// duplicates kept. `None` for an empty input.
    pub fn merge<'a, I>(rows: I) -> Option<Action>
    where
        I: IntoIterator<Item = &'a Action>,
    {
        let mut rows = rows.into_iter();
        let mut merged = rows.next()?.clone();
        for a in rows {
            merged.resource_type_references.extend(a.resource_type_references.iter().cloned());
            merged.condition_keys.extend(a.condition_keys.iter().cloned());
            merged.dependent_actions.extend(a.dependent_actions.iter().cloned());
        }
        Some(merged)
    }
}

fn null_as_empty<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(de)?.unwrap_or_default())
}
