pub mod area;
pub mod bounds;
pub mod simplify;

pub use area::{exterior_area, ring_area};
pub use bounds::Bounds;
pub use simplify::{SimplifyMode, SimplifyPolicy, simplify_collection, simplify_feature};
