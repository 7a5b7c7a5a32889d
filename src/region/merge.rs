use serde::Deserialize;

use super::normalize::id_name_properties;
use crate::domain::{Feature, Geometry, Ring};
use crate::geometry::exterior_area;

fn default_min_area_ratio() -> f64 {
    0.01
}

fn default_max_polygons() -> usize {
    20
}

#[derive(Debug, Clone, Deserialize)]
pub struct MergeOptions {
    /// Drop polygons smaller than this fraction of the largest one
    #[serde(default = "default_min_area_ratio")]
    pub min_area_ratio: f64,
    #[serde(default = "default_max_polygons")]
    pub max_polygons: usize,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            min_area_ratio: default_min_area_ratio(),
            max_polygons: default_max_polygons(),
        }
    }
}

/// Rank polygons by exterior-ring area, largest first, and keep those at
/// least `min_area_ratio` of the largest, up to `max_polygons`.
///
/// Polygons with no exterior ring are discarded. Equal areas keep their
/// input order.
pub fn rank_polygons(polygons: Vec<Vec<Ring>>, options: &MergeOptions) -> Vec<Vec<Ring>> {
    let mut ranked: Vec<(f64, Vec<Ring>)> = polygons
        .into_iter()
        .filter(|p| p.first().is_some_and(|ring| !ring.is_empty()))
        .map(|p| (exterior_area(&p), p))
        .collect();

    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    let Some(&(max_area, _)) = ranked.first() else {
        return Vec::new();
    };
    let threshold = max_area * options.min_area_ratio;

    ranked
        .into_iter()
        .filter(|(area, _)| *area >= threshold)
        .take(options.max_polygons)
        .map(|(_, p)| p)
        .collect()
}

/// Fold many features into one MultiPolygon feature with `{id, name}`
/// properties, keeping only the significant polygons.
///
/// Used for nations where district detail is not wanted, where the many
/// small islands would otherwise dominate the output size.
pub fn merge_features_to_single(
    features: Vec<Feature>,
    id: &str,
    name: &str,
    options: &MergeOptions,
) -> Feature {
    let polygons: Vec<Vec<Ring>> = features
        .into_iter()
        .flat_map(|f| f.geometry.into_polygons())
        .collect();
    let total = polygons.len();

    let kept = rank_polygons(polygons, options);
    tracing::info!(id, total, kept = kept.len(), "merged features");

    Feature::new(Geometry::MultiPolygon(kept), id_name_properties(id, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Axis-aligned rectangle with the given width and height 1.
    fn rect(x: f64, width: f64) -> Vec<Ring> {
        vec![vec![
            (x, 0.0),
            (x + width, 0.0),
            (x + width, 1.0),
            (x, 1.0),
            (x, 0.0),
        ]]
    }

    #[test]
    fn test_area_threshold() {
        let polygons = vec![rect(0.0, 1.0), rect(10.0, 0.05), rect(20.0, 10.0)];
        let kept = rank_polygons(polygons, &MergeOptions::default());

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0], rect(20.0, 10.0));
        assert_eq!(kept[1], rect(0.0, 1.0));
    }

    #[test]
    fn test_cap() {
        let polygons: Vec<Vec<Ring>> = (0..30).map(|i| rect(i as f64 * 2.0, 1.0)).collect();
        let kept = rank_polygons(polygons, &MergeOptions::default());

        assert_eq!(kept.len(), 20);
        // equal areas: input order preserved
        assert_eq!(kept[0], rect(0.0, 1.0));
        assert_eq!(kept[19], rect(38.0, 1.0));
    }

    #[test]
    fn test_skips_empty_polygons() {
        let kept = rank_polygons(vec![vec![], vec![vec![]], rect(0.0, 1.0)], &MergeOptions::default());
        assert_eq!(kept.len(), 1);
        assert!(rank_polygons(vec![], &MergeOptions::default()).is_empty());
    }

    #[test]
    fn test_merge_features() {
        let features = vec![
            Feature::new(Geometry::Polygon(rect(0.0, 2.0)), Default::default()),
            Feature::new(
                Geometry::MultiPolygon(vec![rect(5.0, 4.0), rect(12.0, 0.01)]),
                Default::default(),
            ),
        ];

        let merged = merge_features_to_single(features, "wales", "Wales", &MergeOptions::default());
        assert_eq!(merged.properties, id_name_properties("wales", "Wales"));
        match merged.geometry {
            Geometry::MultiPolygon(polygons) => {
                assert_eq!(polygons, vec![rect(5.0, 4.0), rect(0.0, 2.0)]);
            }
            other => panic!("expected multipolygon, got {:?}", other),
        }
    }
}
