mod circle;
mod lat_lon;
mod plane;
mod segment;
mod triangle;

pub use circle::Circle;
pub use lat_lon::LatLon;
pub use plane::Plane3;
pub use segment::{Segment2, Segment3};
pub use triangle::{Triangle2, Triangle3};
