mod sphere;

pub use sphere::{intersect, Sphere};
