//! Particle field state: the live particle set, hover tracking, spawn clock
//! and cached image geometry.
//!
//! Nothing in here touches the DOM. The browser glue feeds in image sizes,
//! hover changes and timestamps; the renderer reads particles and edges back
//! out. Until the first [`ParticleField::recompute_geometry`] call, spawning
//! and edge detection are skipped.

use log::debug;
use rand::Rng;

use super::config::FieldConfig;
use super::geometry::{ImageGeometry, line_intersects_circle};
use super::particles::{Particle, spawn_particle};

/// A line to draw between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	pub from: (f64, f64),
	pub to: (f64, f64),
	pub distance: f64,
}

impl Edge {
	/// Opacity fades linearly to zero at the connection distance.
	pub fn alpha(&self, connection_distance: f64, max_alpha: f64) -> f64 {
		(1.0 - self.distance / connection_distance) * max_alpha
	}
}

/// Simulation state for one canvas overlay.
#[derive(Clone, Debug)]
pub struct ParticleField {
	pub particles: Vec<Particle>,
	pub config: FieldConfig,
	hovering: bool,
	/// Time of the last emission. `None` until the first frame of a hover.
	last_spawn_ms: Option<f64>,
	geometry: Option<ImageGeometry>,
}

impl ParticleField {
	pub fn new(config: FieldConfig) -> Self {
		Self {
			particles: Vec::new(),
			config,
			hovering: false,
			last_spawn_ms: None,
			geometry: None,
		}
	}

	pub fn geometry(&self) -> Option<&ImageGeometry> {
		self.geometry.as_ref()
	}

	/// Re-layout around an image of the given rendered size.
	///
	/// Returns the new geometry; the caller resizes the canvas to
	/// `canvas_width × canvas_height`, which also wipes it.
	pub fn recompute_geometry(&mut self, image_width: f64, image_height: f64) -> ImageGeometry {
		let geometry = ImageGeometry::compute(image_width, image_height, &self.config);
		debug!(
			"hero-field: image {}x{} -> canvas {}x{}",
			image_width, image_height, geometry.canvas_width, geometry.canvas_height
		);
		self.geometry = Some(geometry);
		geometry
	}

	pub fn is_hovering(&self) -> bool {
		self.hovering
	}

	/// Pointer entered (`true`) or left (`false`) the canvas.
	///
	/// Leaving clears the spawn clock, so the next hover starts counting
	/// from its own first frame instead of from the previous hover's last
	/// emission. Without this, re-entering after an idle pause would emit
	/// the whole pause's worth of particles in a single frame.
	pub fn set_hover(&mut self, hovering: bool) {
		if !hovering {
			self.last_spawn_ms = None;
		}
		self.hovering = hovering;
	}

	/// Emit `floor(elapsed × rate)` particles around the image.
	///
	/// The spawn clock only advances when at least one particle is emitted, so
	/// fractional amounts carry over between short frames. The first call of
	/// a hover arms the clock without emitting. Returns the number emitted.
	pub fn spawn<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> usize {
		if !self.hovering {
			return 0;
		}
		let Some(geometry) = self.geometry else {
			return 0;
		};
		let Some(last) = self.last_spawn_ms else {
			self.last_spawn_ms = Some(now_ms);
			return 0;
		};

		let elapsed = (now_ms - last).max(0.0);
		let count = (elapsed * self.config.spawn_rate_per_ms).floor() as usize;
		if count == 0 {
			return 0;
		}
		self.last_spawn_ms = Some(now_ms);

		let center = geometry.center();
		let radius = geometry.radius();
		self.particles.reserve(count);
		for _ in 0..count {
			self.particles
				.push(spawn_particle(rng, center, radius, &self.config));
		}
		count
	}

	/// Move every particle one frame forward.
	pub fn advance(&mut self) {
		let friction = self.config.friction;
		for p in &mut self.particles {
			p.update(friction);
		}
	}

	/// Drop every particle whose life has run out.
	pub fn cull(&mut self) {
		self.particles.retain(Particle::is_alive);
	}

	/// Edges between particle pairs closer than the connection distance whose
	/// segment stays clear of the image's bounding circle.
	pub fn edges(&self) -> Vec<Edge> {
		let Some(geometry) = self.geometry else {
			return Vec::new();
		};
		let center = geometry.center();
		let radius = geometry.radius();
		let max_distance = self.config.connection_distance;

		let mut edges = Vec::new();
		for (i, a) in self.particles.iter().enumerate() {
			for b in &self.particles[i + 1..] {
				let distance = (a.x - b.x).hypot(a.y - b.y);
				if distance >= max_distance {
					continue;
				}
				let (from, to) = ((a.x, a.y), (b.x, b.y));
				if line_intersects_circle(from, to, center, radius) {
					continue;
				}
				edges.push(Edge { from, to, distance });
			}
		}
		edges
	}
}

impl Default for ParticleField {
	fn default() -> Self {
		Self::new(FieldConfig::default())
	}
}
