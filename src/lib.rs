//! # smolfield
//!
//! Pointer-reactive particle field, the animated background of the Smol Mart
//! landing page, as a native window.
//!
//! A pool of particles sized to the surface area drifts over a near-white
//! canvas. Moving the pointer pushes nearby particles away; when the pointer
//! leaves, each one eases back toward the spot it spawned at. Particles
//! closer than 50 px to each other are joined by faint lines whose opacity
//! falls off with distance, and every frame is painted over the last through
//! a translucent fill, so motion leaves short trails.
//!
//! ## Quick Start
//!
//! ```ignore
//! use smolfield::prelude::*;
//!
//! fn main() -> Result<(), AnimatorError> {
//!     Animator::new()
//!         .with_title("Smol Mart")
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### The field
//!
//! [`ParticleField`] owns the simulation: the particle pool, the shared
//! pointer position and the per-frame step. It is plain CPU state with no
//! window or GPU attached, so it can be driven and inspected directly:
//!
//! ```ignore
//! let mut field = ParticleField::new(1500.0, 1000.0, FieldConfig::default());
//! assert_eq!(field.particles().len(), 100); // floor(area / 15000)
//! field.set_pointer(Vec2::new(400.0, 300.0));
//! field.step();
//! ```
//!
//! ### Configuration
//!
//! [`FieldConfig`] carries the physics constants (interaction radius,
//! connection radius, easing rate, pool density) and a [`Theme`] for colors.
//! The defaults give the stock look; see `demos/` for variants.
//!
//! ### Degradation
//!
//! The animation is cosmetic. If no GPU surface or device is available the
//! animator logs one line and keeps the window running with nothing drawn;
//! it never takes the process down.

mod error;
pub mod field;
mod gpu;
pub mod input;
mod particle;
mod shader;
pub mod visuals;
mod window;

pub use error::{AnimatorError, GpuError};
pub use field::{Connection, FieldConfig, ParticleField};
pub use glam::{Vec2, Vec3};
pub use input::Pointer;
pub use particle::Particle;
pub use visuals::{hsl_to_rgb, Theme};
pub use window::Animator;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::error::{AnimatorError, GpuError};
    pub use crate::field::{Connection, FieldConfig, ParticleField};
    pub use crate::input::Pointer;
    pub use crate::particle::Particle;
    pub use crate::visuals::Theme;
    pub use crate::window::Animator;
    pub use crate::{Vec2, Vec3};
}
