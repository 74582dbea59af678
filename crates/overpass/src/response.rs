use std::collections::HashMap;

use model::{
    feature::{Feature, FeatureKind},
    location::GeoCoordinate,
};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Node,
    Way,
    Relation,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub id: i64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<Center>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl Element {
    /// Nodes carry their own position, ways and relations are located by the
    /// center computed by `out center`.
    pub fn location(&self) -> Option<GeoCoordinate> {
        match self.element_type {
            ElementType::Node => Some(GeoCoordinate::new(self.lat?, self.lon?)),
            ElementType::Way | ElementType::Relation => self
                .center
                .map(|center| GeoCoordinate::new(center.lat, center.lon)),
        }
    }

    pub fn into_feature(self) -> Option<Feature> {
        let location = self.location()?;
        let kind = match self.element_type {
            ElementType::Node => FeatureKind::Point,
            ElementType::Way | ElementType::Relation => FeatureKind::Area,
        };
        Some(Feature::new(kind, location, self.tags))
    }
}

impl OverpassResponse {
    /// All elements that can be located, in response order.
    pub fn into_features(self) -> Vec<Feature> {
        self.elements
            .into_iter()
            .filter_map(Element::into_feature)
            .collect()
    }
}
