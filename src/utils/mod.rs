//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::edge_normal::edge_normal;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};
pub use self::triple_product::{perp_dot, triple_product};

mod center;
mod edge_normal;
mod point_cloud_support_point;
mod triple_product;
