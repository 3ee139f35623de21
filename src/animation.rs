//! Fluid animation uniforms
//!
//! The decorative animation is a wireframe sphere whose vertices ripple
//! with `time` and whose fragments mix two colors by the surface normal.
//! Renderers read `FluidUniforms` every frame; the colors only change when
//! the theme controller notifies the `AnimationHandle`.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use crate::color::Rgb;
use crate::palette::Palette;
use crate::theme::PaletteSubscriber;

/// Initial `colorA` before any palette is applied
pub const DEFAULT_COLOR_A: Rgb = Rgb::new(0x7e, 0x3a, 0xf2);
/// Initial `colorB` before any palette is applied
pub const DEFAULT_COLOR_B: Rgb = Rgb::new(0x27, 0x27, 0x2a);
/// Rotation added to both axes per frame, in radians
pub const DEFAULT_ROTATION_STEP: f32 = 0.001;

/// Live shader inputs
#[derive(Debug, Clone, PartialEq)]
pub struct FluidUniforms {
    /// Seconds since the animation started
    pub time: f32,
    pub color_a: [f32; 3],
    pub color_b: [f32; 3],
    /// Mesh rotation around x and y
    pub rotation: [f32; 2],
    pub rotation_step: f32,
    pub frames: u64,
}

impl Default for FluidUniforms {
    fn default() -> Self {
        Self {
            time: 1.0,
            color_a: DEFAULT_COLOR_A.to_unit(),
            color_b: DEFAULT_COLOR_B.to_unit(),
            rotation: [0.0, 0.0],
            rotation_step: DEFAULT_ROTATION_STEP,
            frames: 0,
        }
    }
}

impl FluidUniforms {
    /// Advance one frame
    pub fn tick(&mut self, elapsed: Duration) {
        self.time = elapsed.as_secs_f32();
        self.rotation[0] += self.rotation_step;
        self.rotation[1] += self.rotation_step;
        self.frames += 1;
    }

    /// Fragment color: `mix(colorA, colorB, normal.z)`
    pub fn shade(&self, normal_z: f32) -> Rgb {
        let t = normal_z.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Rgb::from_unit([
            mix(self.color_a[0], self.color_b[0]),
            mix(self.color_a[1], self.color_b[1]),
            mix(self.color_a[2], self.color_b[2]),
        ])
    }

    /// Sample the rippled surface at `(u, v)` in `[-1, 1]` for flat renderers
    pub fn sample(&self, u: f32, v: f32) -> Rgb {
        let (sin_y, cos_y) = self.rotation[1].sin_cos();
        let x = u * cos_y - v * sin_y;
        let y = u * sin_y + v * cos_y;
        let distortion = 0.5 * (y * 4.0 + self.time).sin() * (x * 4.0 + self.time).sin();
        self.shade(0.5 + distortion)
    }

    fn resample(&mut self, palette: &Palette) {
        self.color_a = palette.primary().to_rgb().to_unit();
        self.color_b = palette.background().to_rgb().to_unit();
    }
}

/// Shared handle to the uniforms
///
/// Clones point at the same uniforms: hand one to the theme controller as a
/// subscriber and keep another in the render loop.
#[derive(Debug, Clone, Default)]
pub struct AnimationHandle {
    uniforms: Arc<RwLock<FluidUniforms>>,
}

impl AnimationHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rotation_step(step: f32) -> Self {
        let handle = Self::new();
        handle.uniforms.write().rotation_step = step;
        handle
    }

    /// Copy of the current uniforms
    pub fn snapshot(&self) -> FluidUniforms {
        self.uniforms.read().clone()
    }

    pub fn tick(&self, elapsed: Duration) {
        self.uniforms.write().tick(elapsed);
    }

    pub fn colors(&self) -> (Rgb, Rgb) {
        let u = self.uniforms.read();
        (Rgb::from_unit(u.color_a), Rgb::from_unit(u.color_b))
    }
}

impl PaletteSubscriber for AnimationHandle {
    fn palette_changed(&mut self, palette: &Palette) {
        self.uniforms.write().resample(palette);
        tracing::debug!(
            primary = %palette.primary(),
            background = %palette.background(),
            "Animation uniforms resampled"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::generate_palette;

    #[test]
    fn test_defaults_match_initial_shader() {
        let handle = AnimationHandle::new();
        assert_eq!(handle.colors(), (DEFAULT_COLOR_A, DEFAULT_COLOR_B));
    }

    #[test]
    fn test_palette_change_updates_both_uniforms() {
        let handle = AnimationHandle::new();
        let mut subscriber = handle.clone();
        let palette = generate_palette(Rgb::new(0, 128, 255));

        subscriber.palette_changed(&palette);

        let (a, b) = handle.colors();
        assert_eq!(a, Rgb::new(0, 128, 255));
        assert_eq!(b, palette.background().to_rgb());
    }

    #[test]
    fn test_tick_advances_time_and_rotation() {
        let handle = AnimationHandle::with_rotation_step(0.5);
        handle.tick(Duration::from_millis(1500));
        handle.tick(Duration::from_millis(2000));

        let u = handle.snapshot();
        assert_eq!(u.time, 2.0);
        assert_eq!(u.rotation, [1.0, 1.0]);
        assert_eq!(u.frames, 2);
    }

    #[test]
    fn test_shade_endpoints() {
        let u = FluidUniforms::default();
        assert_eq!(u.shade(0.0), DEFAULT_COLOR_A);
        assert_eq!(u.shade(1.0), DEFAULT_COLOR_B);
        assert_eq!(u.shade(-3.0), DEFAULT_COLOR_A);
    }
}
