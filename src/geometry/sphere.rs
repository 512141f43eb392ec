use crate::math::*;
use crate::world::SceneError;

#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f32,
    pub color: Rgb,
    /// Phong exponent. `None` disables the highlight entirely.
    pub specular: Option<i32>,
    pub reflectivity: f32,
    radius_squared: f32,
    // `camera_origin - center`, only meaningful for rays leaving `camera_origin`.
    camera_origin: Point3,
    camera_offset: Vec3,
}

impl Sphere {
    pub fn new(
        center: Point3,
        radius: f32,
        color: Rgb,
        specular: Option<i32>,
        reflectivity: f32,
    ) -> Result<Sphere, SceneError> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(SceneError::InvalidRadius(radius));
        }
        if !(0.0..=1.0).contains(&reflectivity) {
            return Err(SceneError::InvalidReflectivity(reflectivity));
        }
        if let Some(exponent) = specular.filter(|&exponent| exponent < 0) {
            return Err(SceneError::InvalidSpecular(exponent));
        }
        let camera_origin = Point3::origin();
        Ok(Sphere {
            center,
            radius,
            color,
            specular,
            reflectivity,
            radius_squared: radius * radius,
            camera_origin,
            camera_offset: camera_origin - center,
        })
    }

    pub fn radius_squared(&self) -> f32 {
        self.radius_squared
    }

    /// Recomputes the cached camera offset. Must be called whenever the camera moves,
    /// [`Scene::with_camera_origin`](crate::world::Scene::with_camera_origin) does this for every sphere.
    pub fn set_camera_origin(&mut self, camera_origin: Point3) {
        self.camera_origin = camera_origin;
        self.camera_offset = camera_origin - self.center;
    }

    fn offset_from(&self, origin: Point3) -> Vec3 {
        if origin == self.camera_origin {
            self.camera_offset
        } else {
            origin - self.center
        }
    }

    /// Unit normal at a point on the surface.
    pub fn normal_at(&self, point: Point3) -> Vec3 {
        (point - self.center).normalize()
    }

    /// Nearest root strictly inside `(t0, t1)`.
    pub fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<f32> {
        let (a, b) = intersect(r.origin, r.direction, self);
        let mut nearest = None;
        for time in [a, b] {
            if time > t0 && time < t1 && nearest.map_or(true, |best| time < best) {
                nearest = Some(time);
            }
        }
        nearest
    }
}

/// Both parametric roots of `origin + t * direction` against the sphere surface, unordered.
///
/// A miss is reported as a pair of infinities rather than a separate flag, so
/// range checks against any finite `t_max` reject it without branching here.
/// The quadratic keeps `direction . direction` as its leading term, so the
/// roots scale correctly for directions that are not unit length.
pub fn intersect(origin: Point3, direction: Vec3, sphere: &Sphere) -> (f32, f32) {
    let co = sphere.offset_from(origin);

    let k1 = direction.dot(&direction);
    let k2 = 2.0 * co.dot(&direction);
    let k3 = co.dot(&co) - sphere.radius_squared;

    let discriminant = k2 * k2 - 4.0 * k1 * k3;
    if discriminant < 0.0 {
        return (INFINITY, INFINITY);
    }
    let discriminant_sqrt = discriminant.sqrt();
    (
        (-k2 + discriminant_sqrt) / (2.0 * k1),
        (-k2 - discriminant_sqrt) / (2.0 * k1),
    )
}
