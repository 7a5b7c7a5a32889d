//! End-to-end jobs: decode a topology file, then classify, simplify and
//! normalize the features for one kind of output.

use anyhow::{Context, Result};
use std::path::Path;

use crate::decode::decode_topology;
use crate::domain::FeatureCollection;
use crate::geometry::{SimplifyPolicy, simplify_collection, simplify_feature};
use crate::region::{
    DEVOLVED_KEYS, ENGLAND_KEYS, MergeOptions, RegionClassifier, merge_features_to_single,
    normalize_properties, rename_eer_regions,
};
use crate::topojson::read_topology;

/// Features assigned to one region
#[derive(Debug, Clone)]
pub struct RegionOutput {
    pub region_id: &'static str,
    pub collection: FeatureCollection,
}

/// Read a TopoJSON file and decode one of its objects.
pub fn decode_file(
    path: &Path,
    object: Option<&str>,
    precision: Option<u32>,
) -> Result<FeatureCollection> {
    let topology = read_topology(path)?;
    decode_topology(&topology, object, precision)
        .with_context(|| format!("Failed to decode TopoJSON file: {}", path.display()))
}

/// Split English district features into one collection per region.
///
/// Every region gets an output, possibly empty. Features are simplified and
/// given `id`/`name` properties. Features that match no region are dropped.
pub fn split_regions(
    collection: &FeatureCollection,
    classifier: &RegionClassifier,
    policy: SimplifyPolicy,
) -> Vec<RegionOutput> {
    let mut outputs: Vec<RegionOutput> = classifier
        .region_ids()
        .map(|region_id| RegionOutput {
            region_id,
            collection: FeatureCollection::default(),
        })
        .collect();

    let mut unclassified = 0usize;
    for feature in &collection.features {
        let regions = classifier.classify(&feature.properties);
        if regions.is_empty() {
            unclassified += 1;
            continue;
        }

        let mut prepared = feature.clone();
        simplify_feature(&mut prepared, policy);
        normalize_properties(&mut prepared.properties, &ENGLAND_KEYS);

        for region_id in regions {
            if let Some(output) = outputs.iter_mut().find(|o| o.region_id == region_id) {
                output.collection.features.push(prepared.clone());
            }
        }
    }

    if unclassified > 0 {
        tracing::info!(unclassified, "features matched no region");
    }

    outputs
}

/// Simplify a devolved nation's districts and normalize `id`/`name`.
pub fn process_devolved(
    mut collection: FeatureCollection,
    policy: SimplifyPolicy,
) -> FeatureCollection {
    simplify_collection(&mut collection, policy);
    for feature in &mut collection.features {
        normalize_properties(&mut feature.properties, &DEVOLVED_KEYS);
    }
    collection
}

/// Keep the European Electoral Regions of England, renamed to region ids.
pub fn process_eer(mut collection: FeatureCollection, policy: SimplifyPolicy) -> FeatureCollection {
    simplify_collection(&mut collection, policy);
    FeatureCollection::new(rename_eer_regions(collection.features))
}

/// Collapse a whole collection into a single merged feature.
pub fn merge_collection(
    mut collection: FeatureCollection,
    id: &str,
    name: &str,
    policy: SimplifyPolicy,
    options: &MergeOptions,
) -> FeatureCollection {
    simplify_collection(&mut collection, policy);
    let merged = merge_features_to_single(collection.features, id, name, options);
    FeatureCollection::new(vec![merged])
}
