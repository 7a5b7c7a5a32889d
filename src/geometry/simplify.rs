use clap::ValueEnum;
use serde::Deserialize;

use crate::domain::{Feature, FeatureCollection, Geometry, Position, Ring};

/// Rings at or below this many points are left alone by the distance policy
pub const DISTANCE_FLOOR: usize = 4;
/// Rings at or below this many points are left alone by the stride policy
pub const STRIDE_FLOOR: usize = 10;

pub const DEFAULT_TOLERANCE: f64 = 0.001;
/// Finer tolerance used for English sub-region outputs
pub const REGION_TOLERANCE: f64 = 0.0005;
pub const DEFAULT_STRIDE_TARGET: usize = 80;

/// How to thin out ring coordinates before writing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SimplifyPolicy {
    #[default]
    None,
    /// Greedy pass dropping points closer than `tolerance` degrees to the
    /// last kept point
    Distance { tolerance: f64 },
    /// Keep every n-th point so each ring ends up near `target` points
    Stride { target: usize },
}

/// Policy selector as it appears on the command line and in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SimplifyMode {
    None,
    #[default]
    Distance,
    Stride,
}

impl SimplifyMode {
    pub fn policy(self, tolerance: f64, stride_target: usize) -> SimplifyPolicy {
        match self {
            SimplifyMode::None => SimplifyPolicy::None,
            SimplifyMode::Distance => SimplifyPolicy::Distance { tolerance },
            SimplifyMode::Stride => SimplifyPolicy::Stride {
                target: stride_target,
            },
        }
    }
}

/// Single left-to-right pass: keep the first point, keep an interior point
/// only if it is at least `tolerance` away from the last kept point, and
/// always keep the last point.
///
/// Deviation from the source line is not bounded; a long run of tiny steps
/// can drift well past `tolerance` before a point is kept.
pub fn simplify_distance(points: &[Position], tolerance: f64) -> Vec<Position> {
    if points.len() <= DISTANCE_FLOOR {
        return points.to_vec();
    }

    let mut kept = Vec::with_capacity(points.len());
    kept.push(points[0]);
    let mut last = points[0];

    for &p in &points[1..points.len() - 1] {
        let dist = ((p.0 - last.0).powi(2) + (p.1 - last.1).powi(2)).sqrt();
        if dist >= tolerance {
            kept.push(p);
            last = p;
        }
    }

    kept.push(points[points.len() - 1]);
    kept
}

/// Keep indices `0, step, 2*step, ...` with `step = len / target`, then
/// re-close the ring if the last sample is not the first point.
pub fn simplify_stride(points: &[Position], target: usize) -> Vec<Position> {
    if points.len() <= STRIDE_FLOOR {
        return points.to_vec();
    }

    let step = (points.len() / target.max(1)).max(1);
    let mut kept: Vec<Position> = points.iter().step_by(step).copied().collect();

    if kept.first() != kept.last() {
        kept.push(points[0]);
    }

    kept
}

pub fn simplify_ring(ring: &[Position], policy: SimplifyPolicy) -> Ring {
    match policy {
        SimplifyPolicy::None => ring.to_vec(),
        SimplifyPolicy::Distance { tolerance } => simplify_distance(ring, tolerance),
        SimplifyPolicy::Stride { target } => simplify_stride(ring, target),
    }
}

/// Simplify exterior rings and holes alike, in place.
pub fn simplify_geometry(geometry: &mut Geometry, policy: SimplifyPolicy) {
    if policy == SimplifyPolicy::None {
        return;
    }
    for ring in geometry.rings_mut() {
        *ring = simplify_ring(ring, policy);
    }
}

pub fn simplify_feature(feature: &mut Feature, policy: SimplifyPolicy) {
    simplify_geometry(&mut feature.geometry, policy);
}

/// Simplify every feature and return how many points were removed.
///
/// Stride simplification may add a closing point to an open ring, so the
/// count saturates at zero.
pub fn simplify_collection(collection: &mut FeatureCollection, policy: SimplifyPolicy) -> usize {
    let before = collection.point_count();
    for feature in &mut collection.features {
        simplify_feature(feature, policy);
    }
    let after = collection.point_count();

    tracing::debug!(before, after, ?policy, "simplified collection");
    before.saturating_sub(after)
}
