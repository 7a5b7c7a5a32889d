use serde::{Deserialize, Serialize};

use super::Properties;

/// A `(lon, lat)` pair. Serializes as a two-element JSON array.
pub type Position = (f64, f64);

/// A closed boundary as an ordered list of positions.
pub type Ring = Vec<Position>;

/// Decoded polygonal geometry, GeoJSON-shaped.
///
/// Within a polygon the first ring is the exterior and the rest are holes, in
/// source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
}

impl Geometry {
    /// View this geometry as a list of polygons (a Polygon is a list of one).
    pub fn polygons(&self) -> &[Vec<Ring>] {
        match self {
            Geometry::Polygon(rings) => std::slice::from_ref(rings),
            Geometry::MultiPolygon(polygons) => polygons,
        }
    }

    pub fn polygons_mut(&mut self) -> &mut [Vec<Ring>] {
        match self {
            Geometry::Polygon(rings) => std::slice::from_mut(rings),
            Geometry::MultiPolygon(polygons) => polygons,
        }
    }

    pub fn into_polygons(self) -> Vec<Vec<Ring>> {
        match self {
            Geometry::Polygon(rings) => vec![rings],
            Geometry::MultiPolygon(polygons) => polygons,
        }
    }

    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.polygons().iter().flatten()
    }

    pub fn rings_mut(&mut self) -> impl Iterator<Item = &mut Ring> {
        self.polygons_mut().iter_mut().flatten()
    }

    pub fn point_count(&self) -> usize {
        self.rings().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    #[serde(default)]
    pub properties: Properties,
    pub geometry: Geometry,
}

impl Feature {
    pub fn new(geometry: Geometry, properties: Properties) -> Self {
        Self {
            properties,
            geometry,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.features.iter().map(|f| f.geometry.point_count()).sum()
    }
}
