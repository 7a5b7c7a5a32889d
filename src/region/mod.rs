pub mod classifier;
pub mod merge;
pub mod normalize;
pub mod tables;

pub use classifier::{
    CodePrefix, NameList, Precision, Region, RegionClassifier, RegionMatcher, english_regions,
    is_in_region,
};
pub use merge::{MergeOptions, merge_features_to_single, rank_polygons};
pub use normalize::{
    DEVOLVED_KEYS, ENGLAND_KEYS, KeyScheme, normalize_properties, rename_by_table,
    rename_eer_regions,
};
