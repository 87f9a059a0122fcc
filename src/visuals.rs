//! Visual configuration for the particle field.
//!
//! The `Theme` controls every color the animator produces, separate from the
//! physics constants in [`FieldConfig`](crate::FieldConfig) that control how
//! particles move.
//!
//! # Usage
//!
//! ```ignore
//! let mut config = FieldConfig::default();
//! config.theme.base_hue = 20.0; // warm field instead of blue-violet
//! Animator::new().with_config(config).run()?;
//! ```

use glam::Vec3;

/// Color scheme for the field.
///
/// Defaults: a narrow blue particle band over a near-white surface, with
/// cornflower connection strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Translucent fill painted over the whole surface each frame instead of
    /// a hard clear, so prior frames linger as trails. RGBA, 0.0-1.0.
    pub fade: [f32; 4],
    /// Stroke color for connection lines (alpha comes from distance).
    pub connection: Vec3,
    /// Center of the particle hue band, in degrees.
    pub base_hue: f32,
    /// Per-particle hue offset is uniform in `[-hue_jitter, hue_jitter)`.
    pub hue_jitter: f32,
    /// HSL saturation for particle colors, 0.0-1.0.
    pub saturation: f32,
    /// HSL lightness for particle colors, 0.0-1.0.
    pub lightness: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // rgba(245, 245, 245, 0.1)
            fade: [245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0, 0.1],
            // cornflower, rgb(100, 149, 237)
            connection: Vec3::new(100.0 / 255.0, 149.0 / 255.0, 237.0 / 255.0),
            base_hue: 200.0,
            hue_jitter: 30.0,
            saturation: 0.7,
            lightness: 0.6,
        }
    }
}

impl Theme {
    /// Particle color for a given hue offset from the band center.
    pub fn particle_color(&self, hue_offset: f32) -> Vec3 {
        hsl_to_rgb(self.base_hue + hue_offset, self.saturation, self.lightness)
    }

    /// Opaque version of the fade color, used as the initial clear.
    pub fn clear_color(&self) -> [f32; 4] {
        [self.fade[0], self.fade[1], self.fade[2], 1.0]
    }
}

/// Convert HSL to linear RGB.
///
/// * `h` - hue in degrees (wraps)
/// * `s` - saturation, 0.0 (gray) to 1.0 (vivid)
/// * `l` - lightness, 0.0 (black) to 1.0 (white)
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / 60.0) as u32 % 6 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Vec3::new(r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 0.001
    }

    #[test]
    fn test_hsl_primaries() {
        assert!(close(hsl_to_rgb(0.0, 1.0, 0.5), Vec3::new(1.0, 0.0, 0.0)));
        assert!(close(hsl_to_rgb(120.0, 1.0, 0.5), Vec3::new(0.0, 1.0, 0.0)));
        assert!(close(hsl_to_rgb(240.0, 1.0, 0.5), Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_hsl_grays() {
        assert!(close(hsl_to_rgb(137.0, 0.0, 0.5), Vec3::splat(0.5)));
        assert!(close(hsl_to_rgb(0.0, 1.0, 1.0), Vec3::ONE));
        assert!(close(hsl_to_rgb(0.0, 1.0, 0.0), Vec3::ZERO));
    }

    #[test]
    fn test_hsl_band_center() {
        // hsl(200, 70%, 60%): C = 0.56, X = 0.3733, m = 0.32
        let rgb = hsl_to_rgb(200.0, 0.7, 0.6);
        assert!(close(rgb, Vec3::new(0.32, 0.6933, 0.88)));
    }

    #[test]
    fn test_hue_wraps() {
        assert!(close(hsl_to_rgb(360.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5)));
        assert!(close(hsl_to_rgb(-160.0, 0.7, 0.6), hsl_to_rgb(200.0, 0.7, 0.6)));
    }

    #[test]
    fn test_clear_color_is_opaque_fade() {
        let theme = Theme::default();
        let clear = theme.clear_color();
        assert_eq!(&clear[..3], &theme.fade[..3]);
        assert_eq!(clear[3], 1.0);
    }
}
