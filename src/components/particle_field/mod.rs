//! Hover-triggered particle field around the hero image.
//!
//! While the pointer is over the overlay canvas, particles are emitted in a
//! ring just outside the image, drift outward under friction and fade away.
//! Nearby particles are joined by faint edges, except where an edge would
//! cross the image itself.
//!
//! The simulation ([`ParticleField`]) and the frame order ([`render_frame`])
//! are independent of the browser: drawing goes through [`DrawSurface`],
//! time through [`Clock`], and randomness through any [`rand::Rng`].
//!
//! # Example
//!
//! ```ignore
//! hero_field::components::particle_field::attach("particle-canvas", ".hero-image img");
//! ```

mod component;
mod config;
mod driver;
mod geometry;
mod particles;
mod render;
mod state;
mod theme;

pub use component::attach;
pub use config::FieldConfig;
pub use driver::{Clock, FieldRunner, PerformanceClock};
pub use geometry::{ImageGeometry, line_intersects_circle};
pub use particles::{Particle, spawn_particle};
pub use render::{CanvasSurface, DrawSurface, render_frame};
pub use state::{Edge, ParticleField};
pub use theme::{Color, FieldStyle};
