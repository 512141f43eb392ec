mod color;

pub use color::Rgb;

pub const INFINITY: f32 = f32::INFINITY;

pub type Point3 = nalgebra::Point3<f32>;
pub type Vec3 = nalgebra::Vector3<f32>;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    // not necessarily unit length
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(&self, time: f32) -> Point3 {
        self.origin + self.direction * time
    }
}

/// Mirrors `v` about `normal`, which must already be unit length.
pub fn reflect(v: Vec3, normal: Vec3) -> Vec3 {
    2.0 * normal * normal.dot(&v) - v
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reflect_about_axis() {
        let v = Vec3::new(1.0, 1.0, 0.0);
        let reflected = reflect(v, Vec3::y());
        assert_eq!(reflected, Vec3::new(-1.0, 1.0, 0.0));
    }

    #[test]
    fn test_point_at_parameter() {
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(ray.point_at_parameter(1.5), Point3::new(0.0, 0.0, 3.0));
    }
}
