//! The particle data type and spawning.

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::visuals::Theme;

/// Draw radius is uniform in `[MIN_SIZE, MAX_SIZE)`.
pub const MIN_SIZE: f32 = 1.0;
pub const MAX_SIZE: f32 = 3.0;

/// Repulsion strength is uniform in `[MIN_DENSITY, MAX_DENSITY)`.
pub const MIN_DENSITY: f32 = 1.0;
pub const MAX_DENSITY: f32 = 31.0;

/// One point in the field.
///
/// Everything except `pos` is fixed at spawn time. `rest` anchors the
/// particle: pointer proximity pushes `pos` away from it, and the per-frame
/// easing pulls `pos` back once the pointer leaves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Live position, mutated every frame.
    pub pos: Vec2,
    /// Rest anchor, never mutated after spawn.
    pub rest: Vec2,
    /// Draw radius in pixels.
    pub size: f32,
    /// How strongly pointer proximity displaces this particle.
    pub density: f32,
    /// Linear RGB draw color.
    pub color: Vec3,
}

impl Particle {
    /// Spawn a particle at a uniformly random position inside the surface,
    /// with `rest == pos` and a hue jittered around the theme's band center.
    pub fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32, theme: &Theme) -> Self {
        let pos = Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
        let hue_offset = rng.gen_range(-theme.hue_jitter..theme.hue_jitter);

        Self {
            pos,
            rest: pos,
            size: rng.gen_range(MIN_SIZE..MAX_SIZE),
            density: rng.gen_range(MIN_DENSITY..MAX_DENSITY),
            color: theme.particle_color(hue_offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_at_rest_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let theme = Theme::default();
        for _ in 0..200 {
            let p = Particle::spawn(&mut rng, 800.0, 600.0, &theme);
            assert_eq!(p.pos, p.rest);
            assert!(p.pos.x >= 0.0 && p.pos.x < 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 600.0);
        }
    }

    #[test]
    fn test_spawn_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        let theme = Theme::default();
        for _ in 0..200 {
            let p = Particle::spawn(&mut rng, 100.0, 100.0, &theme);
            assert!(p.size >= MIN_SIZE && p.size < MAX_SIZE);
            assert!(p.density >= MIN_DENSITY && p.density < MAX_DENSITY);
        }
    }

    #[test]
    fn test_spawn_color_within_hue_band() {
        let mut rng = StdRng::seed_from_u64(13);
        let theme = Theme::default();
        // The default band is hsl(170..230, 70%, 60%). Everywhere in that
        // range the red channel sits at the HSL floor (0.32) and whichever
        // of green/blue dominates sits at the ceiling (0.88).
        for _ in 0..200 {
            let p = Particle::spawn(&mut rng, 100.0, 100.0, &theme);
            assert!((p.color.x - 0.32).abs() < 0.001);
            assert!((p.color.y.max(p.color.z) - 0.88).abs() < 0.001);
        }
    }
}
