//! The particle field simulation.
//!
//! [`ParticleField`] owns the pool, the shared pointer state and the hue
//! counter, and advances all of them one frame at a time. It knows nothing
//! about windows or the GPU; [`crate::window`] feeds it pointer positions and
//! [`crate::gpu`] draws whatever `particles()` and `connections()` report
//! after a [`ParticleField::step`].
//!
//! # Usage
//!
//! ```ignore
//! let mut field = ParticleField::new(1500.0, 1000.0, FieldConfig::default());
//! field.set_pointer(Vec2::new(400.0, 300.0));
//! field.step();
//! draw(field.particles(), field.connections());
//! ```

use glam::Vec2;
use rand::thread_rng;

use crate::particle::Particle;
use crate::visuals::Theme;

/// Physics and density constants for the field.
///
/// Demos override individual fields for denser or warmer variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    /// Surface area (in square pixels) per particle. The pool size is
    /// `floor(width * height / area_per_particle)`.
    pub area_per_particle: f32,
    /// Pointer proximity inside this radius repels particles.
    pub interaction_radius: f32,
    /// Particle pairs closer than this are connected by a line.
    pub connection_radius: f32,
    /// Fraction of the rest offset removed per frame, per axis, while the
    /// pointer is out of range. Exponential decay toward rest, never a snap.
    pub return_rate: f32,
    /// Connection opacity at distance zero; falls linearly to zero at
    /// `connection_radius`.
    pub connection_alpha: f32,
    /// Colors.
    pub theme: Theme,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_particle: 15_000.0,
            interaction_radius: 100.0,
            connection_radius: 50.0,
            return_rate: 0.1,
            connection_alpha: 0.2,
            theme: Theme::default(),
        }
    }
}

/// A line segment between two mutually-close particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub a: Vec2,
    pub b: Vec2,
    /// Final draw opacity: `connection_alpha * (1 - distance / radius)`.
    pub alpha: f32,
}

/// The animated field: pool, pointer state and hue counter in one place,
/// so multiple instances never collide.
#[derive(Debug)]
pub struct ParticleField {
    config: FieldConfig,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    /// Most recent pointer position in surface-local pixels. Last-write-wins;
    /// read once per frame.
    pointer: Vec2,
    /// Advanced 0.5 per frame, wrapped mod 360. No draw call reads it yet;
    /// exposed through [`ParticleField::hue`] for themes that want it.
    hue: f32,
    frame: u64,
    connections: Vec<Connection>,
}

impl ParticleField {
    /// Build a field sized to the surface, spawning a fresh pool.
    pub fn new(width: f32, height: f32, config: FieldConfig) -> Self {
        let mut field = Self {
            config,
            width,
            height,
            particles: Vec::new(),
            pointer: Vec2::ZERO,
            hue: 0.0,
            frame: 0,
            connections: Vec::new(),
        };
        field.rebuild();
        field
    }

    /// Pool size for a surface: `floor(width * height / area_per_particle)`.
    pub fn particle_count_for(width: f32, height: f32, area_per_particle: f32) -> usize {
        (width * height / area_per_particle) as usize
    }

    /// Resize the surface and rebuild the pool from scratch.
    ///
    /// Particle identity does not survive a resize: every particle is
    /// discarded and the new pool is spawned for the new dimensions.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let count = Self::particle_count_for(self.width, self.height, self.config.area_per_particle);
        let (width, height) = (self.width, self.height);
        let theme = self.config.theme;
        let mut rng = thread_rng();
        self.particles.clear();
        self.particles
            .extend((0..count).map(|_| Particle::spawn(&mut rng, width, height, &theme)));
        self.connections.clear();
    }

    /// Overwrite the shared pointer position (surface-local pixels).
    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// Advance the simulation one frame.
    ///
    /// Particles inside the interaction radius are pushed away from the
    /// pointer, scaled by how close they are and by their density; everything
    /// else eases back toward its rest anchor. Connections are collected in
    /// the same pass, so a pair's segment uses particle `i` post-update and
    /// particle `j > i` pre-update.
    pub fn step(&mut self) {
        self.hue = (self.hue + 0.5) % 360.0;
        self.frame += 1;
        self.connections.clear();

        let radius = self.config.interaction_radius;
        let connect = self.config.connection_radius;
        let n = self.particles.len();

        for i in 0..n {
            let mut p = self.particles[i];
            let to_pointer = self.pointer - p.pos;
            let distance = to_pointer.length();

            if distance < radius && distance > 0.0 {
                // Push away from the pointer, stronger the closer and denser.
                // The zero-distance case is excluded: the direction is
                // undefined and a NaN position would stick forever.
                let direction = to_pointer / distance;
                let force = (radius - distance) / radius;
                p.pos -= direction * force * p.density;
            } else {
                // Ease back toward rest, one axis at a time.
                if p.pos.x != p.rest.x {
                    p.pos.x -= (p.pos.x - p.rest.x) * self.config.return_rate;
                }
                if p.pos.y != p.rest.y {
                    p.pos.y -= (p.pos.y - p.rest.y) * self.config.return_rate;
                }
            }
            self.particles[i] = p;

            for j in 0..n {
                if j == i {
                    // A zero-length self-segment would be invisible anyway.
                    continue;
                }
                let d = p.pos.distance(self.particles[j].pos);
                if d < connect {
                    self.connections.push(Connection {
                        a: p.pos,
                        b: self.particles[j].pos,
                        alpha: self.config.connection_alpha * (1.0 - d / connect),
                    });
                }
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Connections collected by the most recent [`step`](Self::step).
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn test_particle(pos: Vec2, rest: Vec2, density: f32) -> Particle {
        Particle {
            pos,
            rest,
            size: 2.0,
            density,
            color: Vec3::splat(0.5),
        }
    }

    /// A field with a hand-placed pool, bypassing random spawn.
    fn field_with(particles: Vec<Particle>) -> ParticleField {
        let mut field = ParticleField::new(0.0, 0.0, FieldConfig::default());
        field.width = 1000.0;
        field.height = 1000.0;
        field.particles = particles;
        field
    }

    #[test]
    fn test_pool_size_formula() {
        assert_eq!(ParticleField::particle_count_for(1500.0, 1000.0, 15_000.0), 100);
        assert_eq!(ParticleField::particle_count_for(1280.0, 720.0, 15_000.0), 61);
        assert_eq!(ParticleField::particle_count_for(100.0, 100.0, 15_000.0), 0);

        let field = ParticleField::new(1500.0, 1000.0, FieldConfig::default());
        assert_eq!(field.particles().len(), 100);
    }

    #[test]
    fn test_resize_rebuilds_pool() {
        let mut field = ParticleField::new(1500.0, 1000.0, FieldConfig::default());
        let before: Vec<Vec2> = field.particles().iter().map(|p| p.rest).collect();

        field.resize(3000.0, 1000.0);
        assert_eq!(field.particles().len(), 200);
        // No stale particle survives: every rest anchor is freshly drawn,
        // so the old anchors (confined to x < 1500) cannot all reappear.
        let survivors = field
            .particles()
            .iter()
            .filter(|p| before.contains(&p.rest))
            .count();
        assert_eq!(survivors, 0);
    }

    #[test]
    fn test_rest_position_invariant() {
        let mut field = ParticleField::new(1500.0, 1000.0, FieldConfig::default());
        let rests: Vec<Vec2> = field.particles().iter().map(|p| p.rest).collect();
        field.set_pointer(Vec2::new(750.0, 500.0));
        for _ in 0..50 {
            field.step();
        }
        for (p, rest) in field.particles().iter().zip(&rests) {
            assert_eq!(p.rest, *rest);
        }
    }

    #[test]
    fn test_repulsion_moves_away_from_pointer() {
        let mut field = field_with(vec![test_particle(
            Vec2::new(530.0, 500.0),
            Vec2::new(530.0, 500.0),
            10.0,
        )]);
        field.set_pointer(Vec2::new(500.0, 500.0));

        let before = field.particles()[0].pos;
        field.step();
        let after = field.particles()[0].pos;

        let movement = after - before;
        let away = before - field.pointer;
        assert!(movement.length() > 0.0);
        assert!(movement.dot(away) >= 0.0);
    }

    #[test]
    fn test_repulsion_magnitude() {
        // d = 30, force = (100 - 30) / 100 = 0.7, density = 10
        // displacement = 0.7 * 10 = 7 along +x (away from the pointer).
        let mut field = field_with(vec![test_particle(
            Vec2::new(530.0, 500.0),
            Vec2::new(530.0, 500.0),
            10.0,
        )]);
        field.set_pointer(Vec2::new(500.0, 500.0));
        field.step();

        let pos = field.particles()[0].pos;
        assert!((pos.x - 537.0).abs() < 1e-3);
        assert!((pos.y - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_easing_factor_per_axis() {
        let mut field = field_with(vec![test_particle(
            Vec2::new(520.0, 492.0),
            Vec2::new(500.0, 500.0),
            10.0,
        )]);
        // Pointer far away: the particle only eases.
        field.set_pointer(Vec2::new(0.0, 0.0));
        field.step();

        let pos = field.particles()[0].pos;
        // Each axis keeps exactly (1 - 0.1) of its offset.
        assert!((pos.x - (500.0 + 20.0 * 0.9)).abs() < 1e-3);
        assert!((pos.y - (500.0 - 8.0 * 0.9)).abs() < 1e-3);

        // Repeated steps converge toward rest without overshooting.
        for _ in 0..200 {
            field.step();
        }
        let pos = field.particles()[0].pos;
        assert!((pos - Vec2::new(500.0, 500.0)).length() < 1e-2);
        assert!(pos.x >= 500.0 && pos.y <= 500.0);
    }

    #[test]
    fn test_at_rest_outside_radius_is_undisturbed() {
        let rest = Vec2::new(500.0, 500.0);
        let mut field = field_with(vec![test_particle(rest, rest, 10.0)]);
        // Distance exactly 100 is outside the strict < 100 radius.
        field.set_pointer(Vec2::new(600.0, 500.0));
        field.step();
        assert_eq!(field.particles()[0].pos, rest);

        field.set_pointer(Vec2::new(650.0, 500.0));
        field.step();
        assert_eq!(field.particles()[0].pos, rest);
    }

    #[test]
    fn test_pointer_on_particle_stays_finite() {
        let rest = Vec2::new(500.0, 500.0);
        let mut field = field_with(vec![test_particle(rest, rest, 10.0)]);
        field.set_pointer(rest);
        field.step();

        let pos = field.particles()[0].pos;
        assert!(pos.x.is_finite() && pos.y.is_finite());
        assert_eq!(pos, rest);
    }

    #[test]
    fn test_connections_iff_within_radius() {
        let mut field = field_with(vec![
            test_particle(Vec2::new(100.0, 100.0), Vec2::new(100.0, 100.0), 5.0),
            test_particle(Vec2::new(125.0, 100.0), Vec2::new(125.0, 100.0), 5.0),
            test_particle(Vec2::new(400.0, 400.0), Vec2::new(400.0, 400.0), 5.0),
        ]);
        field.set_pointer(Vec2::new(-1000.0, -1000.0));
        field.step();

        // Only the 25-apart pair connects, once in each direction.
        let conns = field.connections();
        assert_eq!(conns.len(), 2);
        for c in conns {
            assert!((c.alpha - 0.1).abs() < 1e-4);
        }
    }

    #[test]
    fn test_connection_alpha_decreases_with_distance() {
        let alpha_at = |gap: f32| {
            let mut field = field_with(vec![
                test_particle(Vec2::new(100.0, 100.0), Vec2::new(100.0, 100.0), 5.0),
                test_particle(Vec2::new(100.0 + gap, 100.0), Vec2::new(100.0 + gap, 100.0), 5.0),
            ]);
            field.set_pointer(Vec2::new(-1000.0, -1000.0));
            field.step();
            field.connections().first().map(|c| c.alpha)
        };

        let near = alpha_at(10.0).unwrap();
        let mid = alpha_at(25.0).unwrap();
        let far = alpha_at(49.9).unwrap();
        assert!(near > mid && mid > far);
        assert!(far < 0.001);

        // Strictly-less-than threshold: 50 apart is not connected.
        assert_eq!(alpha_at(50.0), None);
        assert_eq!(alpha_at(60.0), None);
    }

    #[test]
    fn test_hue_counter_advances_and_wraps() {
        let mut field = field_with(vec![]);
        assert_eq!(field.hue(), 0.0);
        field.step();
        assert_eq!(field.hue(), 0.5);

        for _ in 0..719 {
            field.step();
        }
        // 720 steps of 0.5 wrap back to 0.
        assert!(field.hue().abs() < 1e-3);
        assert_eq!(field.frame(), 720);
    }
}
