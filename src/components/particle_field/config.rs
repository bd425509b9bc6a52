//! Tunable constants for the particle field.
//!
//! Every magic number of the simulation lives here so that behaviour can be
//! tuned (or pinned down in tests) without touching the update and render
//! code. [`FieldConfig::default`] reproduces the look of the hero image.

use std::ops::Range;

/// Physics, spawn and edge parameters.
#[derive(Clone, Debug)]
pub struct FieldConfig {
	/// Particles emitted per elapsed millisecond while hovering.
	pub spawn_rate_per_ms: f64,
	/// Gap between the image's bounding circle and the inner edge of the spawn annulus.
	pub spawn_gap: f64,
	/// Radial width of the spawn annulus.
	pub spawn_band: f64,
	/// Initial outward speed, in pixels per frame.
	pub speed: Range<f64>,
	/// Life lost per frame, drawn once per particle.
	pub decay: Range<f64>,
	/// Particle radius, drawn once per particle.
	pub radius: Range<f64>,
	/// Multiplicative velocity damping applied every frame.
	pub friction: f64,
	/// Distance from the image centre at which a particle becomes fully transparent.
	pub falloff_distance: f64,
	/// Pairs closer than this are joined by an edge.
	pub connection_distance: f64,
	/// Canvas size as a multiple of the image size `(width, height)`.
	pub canvas_scale: (f64, f64),
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			spawn_rate_per_ms: 0.8,
			spawn_gap: 10.0,
			spawn_band: 50.0,
			speed: 1.5..3.5,
			decay: 0.01..0.025,
			radius: 1.5..4.0,
			friction: 0.98,
			falloff_distance: 300.0,
			connection_distance: 120.0,
			canvas_scale: (4.0, 3.0),
		}
	}
}

impl FieldConfig {
	/// Inner and outer radius of the spawn annulus for an image of the given radius.
	pub fn spawn_annulus(&self, image_radius: f64) -> (f64, f64) {
		let inner = image_radius + self.spawn_gap;
		(inner, inner + self.spawn_band)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn annulus_starts_past_the_image_edge() {
		let config = FieldConfig::default();
		assert_eq!(config.spawn_annulus(100.0), (110.0, 160.0));
		assert_eq!(config.spawn_annulus(0.0), (10.0, 60.0));
	}
}
