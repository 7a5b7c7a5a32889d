use super::tables::{EER_NAME_KEY, EER_REGIONS};
use crate::domain::{Feature, Properties, PropertyValue, first_present, first_str};

/// Where to find a feature's identifier and display name.
#[derive(Debug, Clone, Copy)]
pub struct KeyScheme {
    pub id_keys: &'static [&'static str],
    pub id_default: &'static str,
    pub name_keys: &'static [&'static str],
    pub name_default: &'static str,
}

/// English district files (2013 vintage). Falls back to the name when no
/// code is present.
pub const ENGLAND_KEYS: KeyScheme = KeyScheme {
    id_keys: &["LAD13CD", "LAD13NM"],
    id_default: "unknown",
    name_keys: &["LAD13NM"],
    name_default: "Unknown",
};

/// Scotland, Wales and Northern Ireland district files across vintages
pub const DEVOLVED_KEYS: KeyScheme = KeyScheme {
    id_keys: &["LAD13CD", "LGD14CD", "LAD21CD"],
    id_default: "unknown",
    name_keys: &["LAD13NM", "LGD14NM", "LAD21NM"],
    name_default: "Unknown",
};

/// Set `id` and `name` from the first present candidate key.
///
/// Existing properties are kept; `id` and `name` are overwritten.
pub fn normalize_properties(props: &mut Properties, scheme: &KeyScheme) {
    let id = first_present(props, scheme.id_keys)
        .cloned()
        .unwrap_or_else(|| PropertyValue::from(scheme.id_default));
    let name = first_present(props, scheme.name_keys)
        .cloned()
        .unwrap_or_else(|| PropertyValue::from(scheme.name_default));

    props.insert("id".to_string(), id);
    props.insert("name".to_string(), name);
}

/// Properties reduced to just `{id, name}`.
pub fn id_name_properties(id: &str, name: &str) -> Properties {
    let mut props = Properties::new();
    props.insert("id".to_string(), PropertyValue::from(id));
    props.insert("name".to_string(), PropertyValue::from(name));
    props
}

/// Keep features whose `key` property exactly matches a table entry, and
/// replace their properties with `{id, name}`.
pub fn rename_by_table(features: Vec<Feature>, key: &str, table: &[(&str, &str)]) -> Vec<Feature> {
    features
        .into_iter()
        .filter_map(|mut feature| {
            let name = first_str(&feature.properties, &[key])?;
            let &(name, id) = table.iter().find(|(n, _)| *n == name)?;
            feature.properties = id_name_properties(id, name);
            Some(feature)
        })
        .collect()
}

/// [`rename_by_table`] with the European Electoral Region table.
pub fn rename_eer_regions(features: Vec<Feature>) -> Vec<Feature> {
    rename_by_table(features, EER_NAME_KEY, EER_REGIONS)
}
