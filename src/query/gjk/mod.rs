//! The GJK algorithm for intersection testing.

pub use self::cso_point::CSOPoint;
pub use self::gjk::*;
pub use self::simplex::Simplex;

mod cso_point;
mod gjk;
mod simplex;
