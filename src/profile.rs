use tracing::info;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize,     // one per pixel
    pub shadow_rays: usize,     // visibility tests toward point and directional lights
    pub reflection_rays: usize, // secondary rays spawned by reflective surfaces
}

impl Profile {
    pub fn new(camera_rays: usize, shadow_rays: usize, reflection_rays: usize) -> Self {
        Profile {
            camera_rays,
            shadow_rays,
            reflection_rays,
        }
    }
    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.shadow_rays + other.shadow_rays,
            self.reflection_rays + other.reflection_rays,
        )
    }

    pub fn total(&self) -> usize {
        self.camera_rays + self.shadow_rays + self.reflection_rays
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            shadow_rays,
            reflection_rays,
        } = self;
        let sum = self.total();
        info!(
            "{} camera rays, {} shadow rays, {} reflection rays",
            camera_rays, shadow_rays, reflection_rays
        );
        info!(
            "{} total rays at {} per second and {} per second per thread",
            sum,
            sum as f32 / elapsed,
            sum as f32 / elapsed / (threads as f32)
        );
    }
}
