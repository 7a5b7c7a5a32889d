pub mod feature;
pub mod properties;

pub use feature::{Feature, FeatureCollection, Geometry, Position, Ring};
pub use properties::{Properties, PropertyValue, first_present, first_str};
