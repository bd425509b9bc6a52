//! Drawing for the particle field.
//!
//! Rendering goes through the [`DrawSurface`] trait so a frame can be run
//! against the real 2D canvas in the browser or against a recorder in tests.
//! Each frame runs in a fixed order:
//! 1. Clear the canvas
//! 2. Spawn new particles (while hovering)
//! 3. Advance and draw every particle, then drop the dead ones
//! 4. Draw edges between nearby survivors

use std::f64::consts::TAU;

use rand::Rng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::state::ParticleField;
use super::theme::{Color, FieldStyle};

/// The minimal set of drawing operations the field needs.
pub trait DrawSurface {
	/// Set the pixel size of the surface. Also clears it.
	fn resize(&mut self, width: f64, height: f64);
	fn clear(&mut self);
	fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Color);
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
}

/// A `<canvas>` element with its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Returns `None` if the canvas has no 2D context.
	pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()?
			.dyn_into::<CanvasRenderingContext2d>()
			.ok()?;
		Some(Self { canvas, ctx })
	}

	pub fn canvas(&self) -> &HtmlCanvasElement {
		&self.canvas
	}
}

impl DrawSurface for CanvasSurface {
	fn resize(&mut self, width: f64, height: f64) {
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
	}

	fn clear(&mut self) {
		self.ctx.clear_rect(
			0.0,
			0.0,
			self.canvas.width() as f64,
			self.canvas.height() as f64,
		);
	}

	fn fill_circle(&mut self, (x, y): (f64, f64), radius: f64, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
		self.ctx.fill();
	}

	fn stroke_line(&mut self, (x1, y1): (f64, f64), (x2, y2): (f64, f64), width: f64, color: Color) {
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		self.ctx.move_to(x1, y1);
		self.ctx.line_to(x2, y2);
		self.ctx.stroke();
	}
}

/// Run one full frame of the field at time `now_ms`.
pub fn render_frame<S, R>(
	field: &mut ParticleField,
	surface: &mut S,
	style: &FieldStyle,
	now_ms: f64,
	rng: &mut R,
) where
	S: DrawSurface + ?Sized,
	R: Rng + ?Sized,
{
	surface.clear();

	field.spawn(now_ms, rng);
	field.advance();
	draw_particles(field, surface, style);
	field.cull();
	draw_edges(field, surface, style);
}

fn draw_particles<S: DrawSurface + ?Sized>(
	field: &ParticleField,
	surface: &mut S,
	style: &FieldStyle,
) {
	let falloff = field.config.falloff_distance;
	for p in &field.particles {
		let alpha = p.alpha(style.particle_dimming, falloff);
		surface.fill_circle((p.x, p.y), p.radius, style.particle_color.with_alpha(alpha));
	}
}

fn draw_edges<S: DrawSurface + ?Sized>(field: &ParticleField, surface: &mut S, style: &FieldStyle) {
	let max_distance = field.config.connection_distance;
	for edge in field.edges() {
		let alpha = edge.alpha(max_distance, style.edge_max_alpha);
		surface.stroke_line(
			edge.from,
			edge.to,
			style.edge_width,
			style.edge_color.with_alpha(alpha),
		);
	}
}

/// Draw calls captured by [`RecordingSurface`].
#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DrawCall {
	Resize(f64, f64),
	Clear,
	Circle {
		center: (f64, f64),
		radius: f64,
		color: Color,
	},
	Line {
		from: (f64, f64),
		to: (f64, f64),
		width: f64,
		color: Color,
	},
}

/// In-memory surface that records every call.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
	pub calls: Vec<DrawCall>,
}

#[cfg(test)]
impl RecordingSurface {
	pub fn circles(&self) -> usize {
		self.calls
			.iter()
			.filter(|c| matches!(c, DrawCall::Circle { .. }))
			.count()
	}

	pub fn lines(&self) -> Vec<&DrawCall> {
		self.calls
			.iter()
			.filter(|c| matches!(c, DrawCall::Line { .. }))
			.collect()
	}
}

#[cfg(test)]
impl DrawSurface for RecordingSurface {
	fn resize(&mut self, width: f64, height: f64) {
		self.calls.push(DrawCall::Resize(width, height));
	}

	fn clear(&mut self) {
		self.calls.push(DrawCall::Clear);
	}

	fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Color) {
		self.calls.push(DrawCall::Circle {
			center,
			radius,
			color,
		});
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.calls.push(DrawCall::Line {
			from,
			to,
			width,
			color,
		});
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::super::particles::Particle;
	use super::*;

	fn still(x: f64, y: f64, life: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			cx: 0.0,
			cy: 0.0,
			life,
			decay: 0.1,
			radius: 2.0,
		}
	}

	#[test]
	fn frame_clears_first_and_draws_edges_last() {
		let mut rng = SmallRng::seed_from_u64(9);
		let mut field = ParticleField::default();
		field.recompute_geometry(100.0, 100.0);
		field.particles = vec![still(20.0, 20.0, 1.0), still(50.0, 20.0, 1.0)];

		let mut surface = RecordingSurface::default();
		render_frame(&mut field, &mut surface, &FieldStyle::default(), 0.0, &mut rng);

		assert_eq!(surface.calls.len(), 4);
		assert_eq!(surface.calls[0], DrawCall::Clear);
		assert!(matches!(surface.calls[1], DrawCall::Circle { .. }));
		assert!(matches!(surface.calls[2], DrawCall::Circle { .. }));
		assert!(matches!(surface.calls[3], DrawCall::Line { .. }));
	}

	#[test]
	fn particle_alpha_combines_life_dimming_and_falloff() {
		let mut rng = SmallRng::seed_from_u64(10);
		let mut field = ParticleField::default();
		// 150px from its centre: half falloff. Life 0.6 - 0.1 after the update.
		field.particles = vec![still(150.0, 0.0, 0.6)];

		let mut surface = RecordingSurface::default();
		render_frame(&mut field, &mut surface, &FieldStyle::default(), 0.0, &mut rng);

		let DrawCall::Circle { color, radius, .. } = surface.calls[1] else {
			panic!("expected a circle, got {:?}", surface.calls[1]);
		};
		assert_eq!(radius, 2.0);
		assert_eq!((color.r, color.g, color.b), (37, 99, 235));
		assert!((color.a - 0.5 * 0.7 * 0.5).abs() < 1e-12);
	}

	#[test]
	fn dying_particle_is_drawn_once_more_then_removed() {
		let mut rng = SmallRng::seed_from_u64(11);
		let mut field = ParticleField::default();
		field.particles = vec![still(10.0, 10.0, 0.05)];

		let mut surface = RecordingSurface::default();
		render_frame(&mut field, &mut surface, &FieldStyle::default(), 0.0, &mut rng);
		assert_eq!(surface.circles(), 1);
		assert!(field.particles.is_empty());

		render_frame(&mut field, &mut surface, &FieldStyle::default(), 16.0, &mut rng);
		assert_eq!(surface.circles(), 1);
	}

	#[test]
	fn edge_alpha_fades_with_distance() {
		let mut rng = SmallRng::seed_from_u64(12);
		let mut field = ParticleField::default();
		field.recompute_geometry(100.0, 100.0);
		field.particles = vec![still(10.0, 10.0, 1.0), still(10.0, 100.0, 1.0)];

		let mut surface = RecordingSurface::default();
		render_frame(&mut field, &mut surface, &FieldStyle::default(), 0.0, &mut rng);

		let lines = surface.lines();
		assert_eq!(lines.len(), 1);
		let DrawCall::Line { width, color, .. } = lines[0] else {
			unreachable!();
		};
		assert_eq!(*width, 1.0);
		assert_eq!((color.r, color.g, color.b), (128, 128, 128));
		assert!((color.a - (1.0 - 90.0 / 120.0) * 0.3).abs() < 1e-12);
	}
}
