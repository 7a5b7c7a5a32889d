use super::arc::ArcTable;
use crate::domain::Ring;
use crate::error::DecodeError;
use crate::topojson::ArcRef;

/// Minimum number of points a decoded ring must have to be kept
pub const MIN_RING_POINTS: usize = 3;

/// Stitch a ring together from its arc references.
///
/// Consecutive arcs share an endpoint, so every arc after the first
/// contributes all but its first point. Returns `Ok(None)` for rings that
/// end up with fewer than [`MIN_RING_POINTS`] points.
pub fn assemble_ring(refs: &[ArcRef], table: &ArcTable) -> Result<Option<Ring>, DecodeError> {
    let mut ring = Ring::new();

    for &arc_ref in refs {
        let points = table.resolve(arc_ref)?;
        let skip = usize::from(!ring.is_empty());
        ring.extend(points.skip(skip));
    }

    if ring.len() < MIN_RING_POINTS {
        return Ok(None);
    }

    Ok(Some(ring))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topojson::Transform;

    fn table(arcs: &[Vec<[i64; 2]>]) -> ArcTable {
        ArcTable::decode(arcs, &Transform::identity(), None).unwrap()
    }

    #[test]
    fn test_junction_dedup() {
        // [[0,0],[1,0]] and [[1,0],[1,1]] after delta decoding
        let table = table(&[vec![[0, 0], [1, 0]], vec![[1, 0], [0, 1]]]);
        let ring = assemble_ring(&[ArcRef(0), ArcRef(1)], &table)
            .unwrap()
            .unwrap();
        assert_eq!(ring, vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    }

    #[test]
    fn test_shared_arc_both_directions() {
        // Arc 0 is the shared border x=1 from (1,0) up to (1,1).
        let table = table(&[
            vec![[1, 0], [0, 1]],
            vec![[1, 1], [-1, 0], [0, -1], [1, 0]],
            vec![[1, 0], [1, 0], [0, 1], [-1, 0]],
        ]);

        let left = assemble_ring(&[ArcRef(0), ArcRef(1)], &table)
            .unwrap()
            .unwrap();
        assert_eq!(
            left,
            vec![(1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0), (1.0, 0.0)]
        );

        let right = assemble_ring(&[ArcRef(2), ArcRef(-1)], &table)
            .unwrap()
            .unwrap();
        assert_eq!(
            right,
            vec![(1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0), (1.0, 0.0)]
        );
    }

    #[test]
    fn test_degenerate_ring_dropped() {
        let table = table(&[vec![[0, 0], [1, 1]]]);
        assert_eq!(assemble_ring(&[ArcRef(0)], &table).unwrap(), None);
        assert_eq!(assemble_ring(&[], &table).unwrap(), None);
    }

    #[test]
    fn test_out_of_range_reference() {
        let table = table(&[vec![[0, 0], [1, 1], [1, 0]]]);
        assert!(assemble_ring(&[ArcRef(0), ArcRef(7)], &table).is_err());
    }
}
