//! topo2geo - Decode TopoJSON region boundaries into simplified GeoJSON

pub mod config;
pub mod decode;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod output;
pub mod pipeline;
pub mod region;
pub mod topojson;

pub use decode::decode_topology;
pub use domain::{Feature, FeatureCollection, Geometry};
pub use error::DecodeError;
pub use topojson::Topology;
