pub mod geometry;
pub mod integrator;
pub mod math;
pub mod parsing;
pub mod prelude;
pub mod profile;
pub mod renderer;
pub mod surface;
pub mod world;

/// Packs a color into minifb's `0RGB` pixel format.
pub fn rgb_to_u32(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}
