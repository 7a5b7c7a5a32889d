use std::fmt::Debug;

use super::tables::{LONDON_CODE_PREFIX, NAMED_REGIONS};
use crate::domain::{Feature, Properties, first_str};

/// Candidate keys for a district code, in priority order
pub const CODE_KEYS: &[&str] = &["LAD13CD", "LGD14CD"];
/// Candidate keys for a district name, in priority order
pub const NAME_KEYS: &[&str] = &["LAD13NM", "LGD14NM", "LAD21NM"];

/// How strictly a matcher compares names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Case-insensitive equality only
    Exact,
    /// Equality, or either name containing the other. Lossy: "hart" also
    /// catches "hartlepool", and "durham" catches "county durham".
    Lossy,
}

/// Decides whether a feature's properties belong to a region.
pub trait RegionMatcher: Debug + Send + Sync {
    fn matches(&self, props: &Properties, precision: Precision) -> bool;
}

/// Matches on a code prefix. Codes are exact at any precision.
#[derive(Debug, Clone)]
pub struct CodePrefix {
    pub keys: &'static [&'static str],
    pub prefix: &'static str,
}

impl RegionMatcher for CodePrefix {
    fn matches(&self, props: &Properties, _precision: Precision) -> bool {
        first_str(props, self.keys).is_some_and(|code| code.starts_with(self.prefix))
    }
}

/// Matches a feature name against a fixed list of lowercase names.
#[derive(Debug, Clone)]
pub struct NameList {
    pub keys: &'static [&'static str],
    pub names: &'static [&'static str],
}

impl NameList {
    pub fn matches_name(&self, name: &str, precision: Precision) -> bool {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return false;
        }

        self.names.iter().any(|&candidate| match precision {
            Precision::Exact => candidate == name,
            Precision::Lossy => candidate.contains(name.as_str()) || name.contains(candidate),
        })
    }
}

impl RegionMatcher for NameList {
    fn matches(&self, props: &Properties, precision: Precision) -> bool {
        first_str(props, self.keys).is_some_and(|name| self.matches_name(name, precision))
    }
}

#[derive(Debug)]
pub struct Region {
    pub id: &'static str,
    pub matcher: Box<dyn RegionMatcher>,
}

impl Region {
    pub fn new(id: &'static str, matcher: impl RegionMatcher + 'static) -> Self {
        Self {
            id,
            matcher: Box::new(matcher),
        }
    }
}

/// London by code prefix, then the eight name-list regions.
pub fn english_regions() -> Vec<Region> {
    let mut regions = vec![Region::new(
        "london",
        CodePrefix {
            keys: CODE_KEYS,
            prefix: LONDON_CODE_PREFIX,
        },
    )];

    regions.extend(NAMED_REGIONS.iter().map(|&(id, names)| {
        Region::new(
            id,
            NameList {
                keys: NAME_KEYS,
                names,
            },
        )
    }));

    regions
}

/// Per-region predicate with lossy name matching.
///
/// Unknown region ids never match.
pub fn is_in_region(feature: &Feature, region_id: &str) -> bool {
    english_regions()
        .iter()
        .find(|r| r.id == region_id)
        .is_some_and(|r| r.matcher.matches(&feature.properties, Precision::Lossy))
}

/// Assigns features to regions, preferring exact matches.
///
/// A feature goes to every region that matches it exactly. Only when no
/// region matches exactly, and `lossy_fallback` is on, are lossy matches
/// used instead.
#[derive(Debug)]
pub struct RegionClassifier {
    regions: Vec<Region>,
    lossy_fallback: bool,
}

impl RegionClassifier {
    pub fn new(regions: Vec<Region>, lossy_fallback: bool) -> Self {
        Self {
            regions,
            lossy_fallback,
        }
    }

    pub fn english(lossy_fallback: bool) -> Self {
        Self::new(english_regions(), lossy_fallback)
    }

    pub fn region_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.regions.iter().map(|r| r.id)
    }

    pub fn classify(&self, props: &Properties) -> Vec<&'static str> {
        let exact = self.matching(props, Precision::Exact);
        if !exact.is_empty() || !self.lossy_fallback {
            return exact;
        }

        let lossy = self.matching(props, Precision::Lossy);
        if !lossy.is_empty() {
            tracing::debug!(
                name = first_str(props, NAME_KEYS).unwrap_or_default(),
                regions = ?lossy,
                "classified by substring fallback"
            );
        }
        lossy
    }

    fn matching(&self, props: &Properties, precision: Precision) -> Vec<&'static str> {
        self.regions
            .iter()
            .filter(|r| r.matcher.matches(props, precision))
            .map(|r| r.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Geometry, PropertyValue};

    fn feature(pairs: &[(&str, &str)]) -> Feature {
        let properties = pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), PropertyValue::from(v)))
            .collect();
        Feature::new(Geometry::Polygon(vec![]), properties)
    }

    #[test]
    fn test_london_by_code_prefix() {
        let camden = feature(&[("LAD13CD", "E09000007"), ("LAD13NM", "Camden")]);
        assert!(is_in_region(&camden, "london"));
        assert!(!is_in_region(&camden, "south-east"));

        let leeds = feature(&[("LAD13CD", "E08000035"), ("LAD13NM", "Leeds")]);
        assert!(!is_in_region(&leeds, "london"));
        assert!(is_in_region(&leeds, "yorkshire-humber"));
    }

    #[test]
    fn test_fuzzy_name_variants() {
        let hull = feature(&[("LAD13NM", "Kingston upon Hull, City of")]);
        assert!(is_in_region(&hull, "yorkshire-humber"));

        let bristol = feature(&[("LAD21NM", "Bristol, City of")]);
        assert!(is_in_region(&bristol, "south-west"));
    }

    #[test]
    fn test_empty_or_missing_name_never_matches() {
        let blank = feature(&[("LAD13NM", "")]);
        let none = feature(&[("OTHER", "x")]);
        for id in ["north-east", "south-west", "london"] {
            assert!(!is_in_region(&blank, id));
            assert!(!is_in_region(&none, id));
        }
    }

    #[test]
    fn test_unknown_region() {
        let leeds = feature(&[("LAD13NM", "Leeds")]);
        assert!(!is_in_region(&leeds, "scotland"));
    }

    #[test]
    fn test_classifier_prefers_exact() {
        let classifier = RegionClassifier::english(true);

        // Lossy matching alone would also put Hartlepool in the South East
        // ("hart") and Durham in both spellings.
        let hartlepool = feature(&[("LAD13NM", "Hartlepool")]);
        assert!(is_in_region(&hartlepool, "south-east"));
        assert_eq!(classifier.classify(&hartlepool.properties), vec!["north-east"]);

        let durham = feature(&[("LAD13NM", "County Durham")]);
        assert_eq!(classifier.classify(&durham.properties), vec!["north-east"]);
    }

    #[test]
    fn test_classifier_lossy_fallback() {
        let hull = feature(&[("LAD13NM", "Kingston upon Hull, City of")]);

        let strict = RegionClassifier::english(false);
        assert!(strict.classify(&hull.properties).is_empty());

        let lenient = RegionClassifier::english(true);
        assert_eq!(lenient.classify(&hull.properties), vec!["yorkshire-humber"]);
    }

    #[test]
    fn test_region_order() {
        let ids: Vec<&str> = RegionClassifier::english(true).region_ids().collect();
        assert_eq!(ids.len(), 9);
        assert_eq!(ids[0], "london");
        assert_eq!(ids[8], "south-west");
    }
}
