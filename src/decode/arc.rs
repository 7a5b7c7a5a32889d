use crate::domain::Position;
use crate::error::DecodeError;
use crate::topojson::{Arc, ArcRef, Transform};

/// Decode one delta-encoded arc into absolute positions.
///
/// Running integer sums are kept so quantization error never accumulates;
/// the transform is applied to each sum. Output length equals input length.
///
/// Returns `None` when a running sum leaves the `i64` range.
pub fn decode_arc(arc: &[[i64; 2]], transform: &Transform) -> Option<Vec<Position>> {
    let mut x = 0i64;
    let mut y = 0i64;

    arc.iter()
        .map(|&[dx, dy]| {
            x = x.checked_add(dx)?;
            y = y.checked_add(dy)?;
            Some(transform.apply(x, y))
        })
        .collect()
}

/// Round a coordinate to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Every arc of a topology, decoded once up front.
///
/// The table is read-only after construction: rings that share an arc in
/// opposite directions borrow the same points through [`ArcPoints`].
#[derive(Debug, Clone, Default)]
pub struct ArcTable {
    arcs: Vec<Vec<Position>>,
}

impl ArcTable {
    pub fn decode(
        arcs: &[Arc],
        transform: &Transform,
        precision: Option<u32>,
    ) -> Result<Self, DecodeError> {
        let arcs = arcs
            .iter()
            .enumerate()
            .map(|(index, arc)| {
                let mut points = decode_arc(arc, transform)
                    .ok_or(DecodeError::CoordinateOverflow { arc: index })?;
                if let Some(places) = precision {
                    for p in &mut points {
                        *p = (round_to(p.0, places), round_to(p.1, places));
                    }
                }
                Ok(points)
            })
            .collect::<Result<_, DecodeError>>()?;

        Ok(Self { arcs })
    }

    pub(crate) fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Resolve a signed reference to an oriented view of the arc.
    pub fn resolve(&self, arc_ref: ArcRef) -> Result<ArcPoints<'_>, DecodeError> {
        let points = self
            .arcs
            .get(arc_ref.index())
            .ok_or(DecodeError::ArcOutOfRange {
                index: arc_ref.0,
                len: self.arcs.len(),
            })?;

        Ok(ArcPoints {
            inner: points.iter(),
            reversed: arc_ref.is_reversed(),
        })
    }
}

/// Borrowed iterator over an arc's points in the referenced direction.
#[derive(Debug, Clone)]
pub struct ArcPoints<'a> {
    inner: std::slice::Iter<'a, Position>,
    reversed: bool,
}

impl Iterator for ArcPoints<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.reversed {
            self.inner.next_back().copied()
        } else {
            self.inner.next().copied()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ArcPoints<'_> {}
