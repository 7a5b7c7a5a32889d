//! TopoJSON to GeoJSON reconstruction.
//!
//! # Algorithm
//! 1. Decode every arc once into an immutable [`ArcTable`]
//! 2. For each geometry in the selected object, in order:
//!    - Resolve each ring's signed arc references against the table
//!    - Drop rings with fewer than three points
//!    - Drop the geometry when no ring survives
//! 3. Copy the geometry's properties onto the resulting feature

pub mod arc;
pub mod geometry;
pub mod ring;

pub use arc::{ArcPoints, ArcTable, decode_arc};
pub use geometry::reconstruct_geometry;
pub use ring::assemble_ring;

use crate::domain::FeatureCollection;
use crate::error::DecodeError;
use crate::topojson::Topology;

/// Decode one object of a topology into a feature collection.
///
/// `object` selects a named object; `None` takes the first one in document
/// order. `precision` optionally rounds every coordinate to that many decimal
/// places.
pub fn decode_topology(
    topology: &Topology,
    object: Option<&str>,
    precision: Option<u32>,
) -> Result<FeatureCollection, DecodeError> {
    let (name, collection) = topology.object(object)?;
    let table = ArcTable::decode(&topology.arcs, &topology.transform, precision)?;

    let mut features = Vec::with_capacity(collection.geometries.len());
    for geometry in &collection.geometries {
        match reconstruct_geometry(geometry, &table)? {
            Some(feature) => features.push(feature),
            None => tracing::debug!(object = name, "skipping geometry with no polygon rings"),
        }
    }

    tracing::info!(
        object = name,
        arcs = table.len(),
        geometries = collection.geometries.len(),
        features = features.len(),
        "decoded topology object"
    );

    Ok(FeatureCollection::new(features))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Geometry;

    const SQUARE: &str = r#"{
        "type": "Topology",
        "transform": {"scale": [0.5, 0.5], "translate": [-1.0, 51.0]},
        "arcs": [[[0, 0], [2, 0], [0, 2], [-2, 0], [0, -2]]],
        "objects": {
            "regions": {"type": "GeometryCollection", "geometries": [
                {"type": "Polygon", "arcs": [[0]], "properties": {"id": "sq"}}
            ]}
        }
    }"#;

    #[test]
    fn test_square_round_trip() {
        let topology: Topology = SQUARE.parse().unwrap();
        let collection = decode_topology(&topology, None, None).unwrap();

        assert_eq!(collection.len(), 1);
        let feature = &collection.features[0];
        assert_eq!(
            feature.geometry,
            Geometry::Polygon(vec![vec![
                (-1.0, 51.0),
                (0.0, 51.0),
                (0.0, 52.0),
                (-1.0, 52.0),
                (-1.0, 51.0),
            ]])
        );

        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"][0]["properties"]["id"], "sq");
        assert_eq!(json["features"][0]["geometry"]["coordinates"][0].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_adjacent_polygons_share_arc() {
        let doc = r#"{
            "type": "Topology",
            "transform": {"scale": [1, 1], "translate": [0, 0]},
            "arcs": [
                [[1, 0], [0, 1]],
                [[1, 1], [-1, 0], [0, -1], [1, 0]],
                [[1, 0], [1, 0], [0, 1], [-1, 0]]
            ],
            "objects": {"lad": {"type": "GeometryCollection", "geometries": [
                {"type": "Polygon", "arcs": [[0, 1]], "properties": {"n": "west"}},
                {"type": "LineString", "arcs": [0]},
                {"type": "Polygon", "arcs": [[2, -1]], "properties": {"n": "east"}}
            ]}}
        }"#;
        let topology: Topology = doc.parse().unwrap();
        let collection = decode_topology(&topology, Some("lad"), None).unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.features[0].properties["n"].as_str(), Some("west"));
        assert_eq!(collection.features[1].properties["n"].as_str(), Some("east"));

        let east = &collection.features[1].geometry.polygons()[0][0];
        assert_eq!(east.first(), east.last());
        assert_eq!(east[3], (1.0, 1.0));
    }

    #[test]
    fn test_nested_properties_survive_decode() {
        let doc = SQUARE.replace(
            r#""properties": {"id": "sq"}"#,
            r#""properties": {"name": "A", "tags": ["x", "y"], "meta": {"rank": 1}}"#,
        );
        let topology: Topology = doc.parse().unwrap();
        let collection = decode_topology(&topology, None, None).unwrap();

        let json = serde_json::to_value(&collection).unwrap();
        let props = &json["features"][0]["properties"];
        assert_eq!(props["name"], "A");
        assert_eq!(props["tags"], serde_json::json!(["x", "y"]));
        assert_eq!(props["meta"]["rank"], 1);
    }

    #[test]
    fn test_coordinate_overflow_is_fatal() {
        let doc = SQUARE.replace("[[0, 0], [2, 0]", "[[9223372036854775807, 0], [2, 0]");
        let topology: Topology = doc.parse().unwrap();
        assert!(matches!(
            decode_topology(&topology, None, None),
            Err(DecodeError::CoordinateOverflow { arc: 0 })
        ));
    }

    #[test]
    fn test_out_of_range_is_fatal() {
        let doc = SQUARE.replace(r#""arcs": [[0]]"#, r#""arcs": [[3]]"#);
        let topology: Topology = doc.parse().unwrap();
        assert!(matches!(
            decode_topology(&topology, None, None),
            Err(DecodeError::ArcOutOfRange { index: 3, len: 1 })
        ));
    }
}
