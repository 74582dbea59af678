use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::location::GeoCoordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum FeatureKind {
    /// A single node.
    Point,
    /// A way or relation, located by its center.
    Area,
}

/// A tagged geographic feature returned by a place search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub kind: FeatureKind,
    pub location: GeoCoordinate,
    pub tags: HashMap<String, String>,
}

impl Feature {
    pub fn new(
        kind: FeatureKind,
        location: GeoCoordinate,
        tags: HashMap<String, String>,
    ) -> Self {
        Self {
            kind,
            location,
            tags,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.tags.get("name").map(String::as_str)
    }

    pub fn has_tag(&self, key: &str, value: &str) -> bool {
        self.tags.get(key).is_some_and(|v| v == value)
    }
}
