/// 8 bit per channel surface and pixel color.
///
/// All arithmetic goes through [`Rgb::scale`] and [`Rgb::blend`], which clamp
/// every channel to `[0, 255]` and then truncate toward zero. Rounding is
/// intentionally not applied, so `254.9` becomes `254`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    // NaN survives the clamp and then saturates to 0 in the cast.
    fn quantize(value: f32) -> u8 {
        value.clamp(0.0, 255.0) as u8
    }

    pub fn scale(self, intensity: f32) -> Rgb {
        Rgb::new(
            Rgb::quantize(self.r as f32 * intensity),
            Rgb::quantize(self.g as f32 * intensity),
            Rgb::quantize(self.b as f32 * intensity),
        )
    }

    /// Linear interpolation toward `other`, with `factor` being the weight of `other`.
    pub fn blend(self, other: Rgb, factor: f32) -> Rgb {
        let mix = |a: u8, b: u8| Rgb::quantize(a as f32 * (1.0 - factor) + b as f32 * factor);
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// Opaque RGBA texel.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, u8::MAX]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Rgb::new(value[0], value[1], value[2])
    }
}
