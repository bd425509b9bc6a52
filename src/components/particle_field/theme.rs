//! Colours used by the particle field.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same hue, new alpha. Negative alphas are clamped to zero.
	pub fn with_alpha(self, a: f64) -> Self {
		Self {
			a: a.clamp(0.0, 1.0),
			..self
		}
	}

	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Visual style for particles and edges.
#[derive(Clone, Debug)]
pub struct FieldStyle {
	/// Particle fill; only the alpha varies per particle.
	pub particle_color: Color,
	/// Global dimming applied on top of life and distance falloff.
	pub particle_dimming: f64,
	/// Edge stroke; only the alpha varies per edge.
	pub edge_color: Color,
	/// Alpha of an edge whose endpoints coincide.
	pub edge_max_alpha: f64,
	pub edge_width: f64,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			particle_color: Color::rgb(37, 99, 235),
			particle_dimming: 0.7,
			edge_color: Color::rgb(128, 128, 128),
			edge_max_alpha: 0.3,
			edge_width: 1.0,
		}
	}
}
