use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single property value copied from a TopoJSON geometry.
///
/// Codes, names and counts are scalars; lists and nested records are carried
/// through unchanged so a feature never loses an attribute it arrived with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<PropertyValue>),
    Object(Properties),
}

impl PropertyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

/// Ordered property bag. Keys keep the order they had in the source document.
pub type Properties = IndexMap<String, PropertyValue>;

/// Return the value of the first key in `keys` that is present in `props`.
///
/// Boundary vintages name the same attribute differently (`LAD13CD`,
/// `LGD14CD`, `LAD21CD`, ...); callers pass the candidates in priority order.
pub fn first_present<'a>(props: &'a Properties, keys: &[&str]) -> Option<&'a PropertyValue> {
    keys.iter().find_map(|key| props.get(*key))
}

/// Like [`first_present`], but only yields string values.
///
/// The first present key wins even when its value is not a string.
pub fn first_str<'a>(props: &'a Properties, keys: &[&str]) -> Option<&'a str> {
    first_present(props, keys).and_then(PropertyValue::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Properties {
        serde_json::from_str(r#"{"LGD14CD": "N09000001", "LGD14NM": "Antrim", "AREA": 42, "FLAG": true, "NOTE": null}"#)
            .unwrap()
    }

    #[test]
    fn test_deserialize_scalars() {
        let props = sample();
        assert_eq!(props.get("LGD14NM"), Some(&PropertyValue::from("Antrim")));
        assert_eq!(props.get("FLAG"), Some(&PropertyValue::Bool(true)));
        assert_eq!(props.get("NOTE"), Some(&PropertyValue::Null));
        assert!(matches!(props.get("AREA"), Some(PropertyValue::Number(_))));
    }

    #[test]
    fn test_order_and_integer_form_preserved() {
        let props = sample();
        let json = serde_json::to_string(&props).unwrap();
        assert_eq!(
            json,
            r#"{"LGD14CD":"N09000001","LGD14NM":"Antrim","AREA":42,"FLAG":true,"NOTE":null}"#
        );
    }

    #[test]
    fn test_nested_values_kept() {
        let json = r#"{"name":"A","tags":["x","y"],"meta":{"source":"ONS","year":2013}}"#;
        let props: Properties = serde_json::from_str(json).unwrap();

        assert_eq!(
            props.get("tags"),
            Some(&PropertyValue::Array(vec![
                PropertyValue::from("x"),
                PropertyValue::from("y")
            ]))
        );
        match props.get("meta") {
            Some(PropertyValue::Object(meta)) => {
                assert_eq!(first_str(meta, &["source"]), Some("ONS"));
            }
            other => panic!("expected nested object, got {:?}", other),
        }
        assert_eq!(serde_json::to_string(&props).unwrap(), json);
    }

    #[test]
    fn test_first_present_order() {
        let props = sample();
        assert_eq!(
            first_str(&props, &["LAD13CD", "LGD14CD", "LAD21CD"]),
            Some("N09000001")
        );
        assert_eq!(first_str(&props, &["LAD13CD", "LAD21CD"]), None);
    }

    #[test]
    fn test_first_present_non_string_wins() {
        let props = sample();
        assert_eq!(first_str(&props, &["AREA", "LGD14NM"]), None);
        assert!(first_present(&props, &["AREA", "LGD14NM"]).is_some());
    }
}
