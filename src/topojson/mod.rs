//! Serde model of a quantized TopoJSON document.
//!
//! Only the parts needed to rebuild polygons are modelled: the transform, the
//! delta-encoded arcs and the geometry collections under `objects`.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

use crate::domain::Properties;
use crate::error::DecodeError;

/// Quantization transform: `position = quantized * scale + translate`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

impl Transform {
    #[cfg(test)]
    pub(crate) fn identity() -> Self {
        Self {
            scale: [1.0, 1.0],
            translate: [0.0, 0.0],
        }
    }

    pub fn apply(&self, x: i64, y: i64) -> (f64, f64) {
        (
            x as f64 * self.scale[0] + self.translate[0],
            y as f64 * self.scale[1] + self.translate[1],
        )
    }
}

/// One arc: the first pair is relative to the origin, every later pair is
/// relative to the previous decoded point.
pub type Arc = Vec<[i64; 2]>;

/// Signed reference into the arc table.
///
/// Non-negative values address `arcs[i]` as stored. Negative values address
/// `arcs[!i]` traversed backwards, which is how two neighbouring rings share a
/// border without duplicating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ArcRef(pub i64);

impl ArcRef {
    pub fn index(self) -> usize {
        if self.0 >= 0 {
            self.0 as usize
        } else {
            (!self.0) as usize
        }
    }

    pub fn is_reversed(self) -> bool {
        self.0 < 0
    }
}

/// A geometry record inside a GeometryCollection.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum TopoGeometry {
    Polygon {
        #[serde(default)]
        arcs: Vec<Vec<ArcRef>>,
        #[serde(default)]
        properties: Properties,
    },
    MultiPolygon {
        #[serde(default)]
        arcs: Vec<Vec<Vec<ArcRef>>>,
        #[serde(default)]
        properties: Properties,
    },
    /// Points, lines and anything else; skipped during decoding
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeometryCollection {
    #[serde(default)]
    pub geometries: Vec<TopoGeometry>,
}

#[derive(Debug, Deserialize)]
struct RawTopology {
    #[serde(rename = "type")]
    type_: Option<String>,
    transform: Option<Transform>,
    arcs: Option<Vec<Arc>>,
    objects: Option<IndexMap<String, GeometryCollection>>,
}

/// A validated topology: every structural key is present.
#[derive(Debug, Clone)]
pub struct Topology {
    pub transform: Transform,
    pub arcs: Vec<Arc>,
    /// Named objects in document order
    pub objects: IndexMap<String, GeometryCollection>,
}

impl Topology {
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        let raw: RawTopology = serde_json::from_str(json)?;

        match raw.type_.as_deref() {
            Some("Topology") => {}
            Some(other) => return Err(DecodeError::NotATopology(other.to_string())),
            None => return Err(DecodeError::MissingField("type")),
        }

        Ok(Self {
            transform: raw.transform.ok_or(DecodeError::MissingField("transform"))?,
            arcs: raw.arcs.ok_or(DecodeError::MissingField("arcs"))?,
            objects: raw.objects.ok_or(DecodeError::MissingField("objects"))?,
        })
    }

    /// Look up an object by name, or take the first one when `name` is `None`.
    pub fn object(&self, name: Option<&str>) -> Result<(&str, &GeometryCollection), DecodeError> {
        match name {
            Some(name) => self
                .objects
                .get_key_value(name)
                .map(|(k, v)| (k.as_str(), v))
                .ok_or_else(|| DecodeError::ObjectNotFound(name.to_string())),
            None => self
                .objects
                .first()
                .map(|(k, v)| (k.as_str(), v))
                .ok_or(DecodeError::NoObjects),
        }
    }
}

impl FromStr for Topology {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

/// Read and validate a TopoJSON file.
pub fn read_topology(path: &Path) -> Result<Topology> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read TopoJSON file: {}", path.display()))?;
    Topology::from_json(&contents)
        .with_context(|| format!("Failed to parse TopoJSON file: {}", path.display()))
}
