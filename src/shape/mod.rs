//! Shapes supported by polycollide.

pub use self::polygon::Polygon;
pub use self::support_map::SupportMap;

mod polygon;
mod support_map;
