use super::arc::ArcTable;
use super::ring::assemble_ring;
use crate::domain::{Feature, Geometry, Ring};
use crate::error::DecodeError;
use crate::topojson::{ArcRef, TopoGeometry};

/// Decode the rings of one polygon, keeping the survivors in source order.
fn decode_polygon(rings: &[Vec<ArcRef>], table: &ArcTable) -> Result<Vec<Ring>, DecodeError> {
    let mut decoded = Vec::with_capacity(rings.len());

    for refs in rings {
        match assemble_ring(refs, table)? {
            Some(ring) => decoded.push(ring),
            None => tracing::debug!(arcs = refs.len(), "dropping degenerate ring"),
        }
    }

    Ok(decoded)
}

/// Rebuild a GeoJSON feature from a TopoJSON geometry record.
///
/// Returns `Ok(None)` when nothing survives decoding or the geometry type is
/// not polygonal; the caller simply emits no feature for it.
pub fn reconstruct_geometry(
    geometry: &TopoGeometry,
    table: &ArcTable,
) -> Result<Option<Feature>, DecodeError> {
    match geometry {
        TopoGeometry::Polygon { arcs, properties } => {
            let rings = decode_polygon(arcs, table)?;
            if rings.is_empty() {
                return Ok(None);
            }
            Ok(Some(Feature::new(Geometry::Polygon(rings), properties.clone())))
        }
        TopoGeometry::MultiPolygon { arcs, properties } => {
            let mut polygons = Vec::with_capacity(arcs.len());
            for polygon in arcs {
                let rings = decode_polygon(polygon, table)?;
                if !rings.is_empty() {
                    polygons.push(rings);
                }
            }
            if polygons.is_empty() {
                return Ok(None);
            }
            Ok(Some(Feature::new(
                Geometry::MultiPolygon(polygons),
                properties.clone(),
            )))
        }
        TopoGeometry::Unsupported => Ok(None),
    }
}
