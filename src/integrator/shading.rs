use crate::math::*;
use crate::profile::Profile;
use crate::world::{Light, Scene};

/// Offset applied to the start of shadow and reflection rays so a surface
/// does not occlude itself.
pub const SECONDARY_RAY_OFFSET: f32 = 0.1;

/// Phong style light intensity arriving at `point`, summed over every light in the scene.
///
/// `normal` must be unit length. `view` points from the surface back toward the
/// viewer and may have any length. Point and directional lights blocked by any
/// sphere contribute nothing, not even their diffuse term.
pub fn lighting(
    scene: &Scene,
    point: Point3,
    normal: Vec3,
    view: Vec3,
    specular: Option<i32>,
    profile: &mut Profile,
) -> f32 {
    let mut intensity = 0.0;
    for light in scene.lights() {
        let (light_intensity, light_vector, t_max) = match *light {
            Light::Ambient { intensity: ambient } => {
                intensity += ambient;
                continue;
            }
            // a point light cannot be shadowed by anything past its own position
            Light::Point {
                intensity: light_intensity,
                position,
            } => (light_intensity, position - point, 1.0),
            Light::Directional {
                intensity: light_intensity,
                direction,
            } => (light_intensity, direction, INFINITY),
        };

        profile.shadow_rays += 1;
        if scene.occluded(
            Ray::new(point, light_vector),
            SECONDARY_RAY_OFFSET,
            t_max,
        ) {
            continue;
        }

        let n_dot_l = normal.dot(&light_vector);
        if n_dot_l > 0.0 {
            intensity += light_intensity * n_dot_l / (normal.norm() * light_vector.norm());
        }

        if let Some(exponent) = specular {
            let reflected = reflect(light_vector, normal);
            let r_dot_v = reflected.dot(&view);
            if r_dot_v > 0.0 {
                intensity += light_intensity
                    * (r_dot_v / (reflected.norm() * view.norm())).powi(exponent);
            }
        }
    }
    intensity
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::world::Sphere;

    fn facing_camera() -> Vec3 {
        Vec3::new(0.0, 0.0, -1.0)
    }

    fn occluder(center: Point3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Rgb::new(255, 255, 255), None, 0.0).unwrap()
    }

    #[test]
    fn test_ambient_is_unconditional() {
        let scene = Scene::new(
            vec![occluder(Point3::new(0.0, 0.0, 2.0), 0.5)],
            vec![Light::ambient(0.25).unwrap(), Light::ambient(0.5).unwrap()],
        );
        let mut profile = Profile::default();
        let intensity = lighting(
            &scene,
            Point3::new(0.0, 0.0, 4.0),
            facing_camera(),
            facing_camera(),
            Some(10),
            &mut profile,
        );
        assert_eq!(intensity, 0.75);
        assert_eq!(profile.shadow_rays, 0);
    }

    #[test]
    fn test_diffuse_and_specular_head_on() {
        let scene = Scene::new(
            vec![],
            vec![Light::point(1.0, Point3::origin()).unwrap()],
        );
        let point = Point3::new(0.0, 0.0, 4.0);
        let mut profile = Profile::default();
        let matte = lighting(&scene, point, facing_camera(), facing_camera(), None, &mut profile);
        assert_eq!(matte, 1.0);
        let shiny = lighting(&scene, point, facing_camera(), facing_camera(), Some(10), &mut profile);
        assert_eq!(shiny, 2.0);
        assert_eq!(profile.shadow_rays, 2);
    }

    #[test]
    fn test_diffuse_cosine_falloff() {
        let scene = Scene::new(
            vec![],
            vec![Light::directional(1.0, Vec3::new(1.0, 1.0, 0.0)).unwrap()],
        );
        let mut profile = Profile::default();
        let intensity = lighting(
            &scene,
            Point3::origin(),
            Vec3::y(),
            Vec3::y(),
            None,
            &mut profile,
        );
        assert!((intensity - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_light_behind_surface_contributes_nothing() {
        let scene = Scene::new(
            vec![],
            vec![Light::directional(1.0, Vec3::new(0.0, -1.0, 0.0)).unwrap()],
        );
        let mut profile = Profile::default();
        let intensity = lighting(
            &scene,
            Point3::origin(),
            Vec3::y(),
            Vec3::y(),
            Some(3),
            &mut profile,
        );
        assert_eq!(intensity, 0.0);
    }

    #[test]
    fn test_occluded_point_light_is_skipped() {
        let light = Light::point(0.8, Point3::origin()).unwrap();
        let point = Point3::new(0.0, 0.0, 4.0);

        let lit = Scene::new(vec![], vec![light]);
        let shadowed = Scene::new(vec![occluder(Point3::new(0.0, 0.0, 2.0), 0.5)], vec![light]);

        let mut profile = Profile::default();
        let visible = lighting(&lit, point, facing_camera(), facing_camera(), Some(50), &mut profile);
        let hidden = lighting(
            &shadowed,
            point,
            facing_camera(),
            facing_camera(),
            Some(50),
            &mut profile,
        );
        assert!(visible > 0.0);
        assert_eq!(hidden, 0.0);
    }

    #[test]
    fn test_occluded_directional_light_is_skipped() {
        // the occluder is far beyond t = 1 along the light vector
        let scene = Scene::new(
            vec![occluder(Point3::new(0.0, 50.0, 0.0), 1.0)],
            vec![
                Light::ambient(0.1).unwrap(),
                Light::directional(0.5, Vec3::y()).unwrap(),
            ],
        );
        let mut profile = Profile::default();
        let intensity = lighting(
            &scene,
            Point3::origin(),
            Vec3::y(),
            Vec3::y(),
            Some(10),
            &mut profile,
        );
        assert_eq!(intensity, 0.1);
        assert_eq!(profile.shadow_rays, 1);
    }

    #[test]
    fn test_surface_does_not_shadow_itself() {
        let sphere = occluder(Point3::origin(), 1.0);
        let scene = Scene::new(
            vec![sphere.clone()],
            vec![Light::point(1.0, Point3::new(0.0, 3.0, 0.0)).unwrap()],
        );
        // slightly inside the surface, as a rounded hit point can be
        let point = Point3::new(0.0, 0.99, 0.0);
        let (t1, t2) = crate::geometry::intersect(point, Vec3::new(0.0, 2.01, 0.0), &sphere);
        let exit = t1.max(t2);
        assert!(exit > 0.0 && exit < SECONDARY_RAY_OFFSET);

        let mut profile = Profile::default();
        let intensity = lighting(&scene, point, Vec3::y(), Vec3::y(), None, &mut profile);
        assert!((intensity - 1.0).abs() < 1e-6, "{}", intensity);
    }

    #[test]
    fn test_point_light_not_shadowed_by_spheres_past_it() {
        // the sphere sits behind the light as seen from the surface point
        let scene = Scene::new(
            vec![occluder(Point3::new(0.0, 0.0, -3.0), 1.0)],
            vec![Light::point(1.0, Point3::origin()).unwrap()],
        );
        let mut profile = Profile::default();
        let intensity = lighting(
            &scene,
            Point3::new(0.0, 0.0, 4.0),
            facing_camera(),
            facing_camera(),
            None,
            &mut profile,
        );
        assert_eq!(intensity, 1.0);
    }
}
