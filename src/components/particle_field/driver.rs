//! Frame stepping for the particle field.
//!
//! [`FieldRunner::step`] is the whole tick: read the clock, render one frame.
//! In the browser it is re-armed with `requestAnimationFrame` after every
//! call; tests drive it by hand with a `ManualClock`.

#[cfg(test)]
use std::cell::Cell;
#[cfg(test)]
use std::rc::Rc;

use rand::Rng;
use web_sys::Performance;

use super::render::{DrawSurface, render_frame};
use super::state::ParticleField;
use super::theme::FieldStyle;

/// Source of frame timestamps, in milliseconds.
pub trait Clock {
	fn now_ms(&self) -> f64;
}

/// Browser high-resolution time (`performance.now()`).
pub struct PerformanceClock(Performance);

impl PerformanceClock {
	pub fn new() -> Option<Self> {
		web_sys::window()?.performance().map(Self)
	}
}

impl Clock for PerformanceClock {
	fn now_ms(&self) -> f64 {
		self.0.now()
	}
}

/// Clock that only moves when told to. Clones share the same time.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct ManualClock(Rc<Cell<f64>>);

#[cfg(test)]
impl ManualClock {
	pub fn advance(&self, ms: f64) {
		self.0.set(self.0.get() + ms);
	}

	pub fn set(&self, ms: f64) {
		self.0.set(ms);
	}
}

#[cfg(test)]
impl Clock for ManualClock {
	fn now_ms(&self) -> f64 {
		self.0.get()
	}
}

/// Owns everything one frame needs: state, surface, style, RNG and clock.
pub struct FieldRunner<S, R, C> {
	pub field: ParticleField,
	pub surface: S,
	pub style: FieldStyle,
	rng: R,
	clock: C,
	frames: u64,
}

impl<S, R, C> FieldRunner<S, R, C>
where
	S: DrawSurface,
	R: Rng,
	C: Clock,
{
	pub fn new(field: ParticleField, surface: S, style: FieldStyle, rng: R, clock: C) -> Self {
		Self {
			field,
			surface,
			style,
			rng,
			clock,
			frames: 0,
		}
	}

	/// Re-layout around the image and resize the surface to match.
	pub fn resize(&mut self, image_width: f64, image_height: f64) {
		let geometry = self.field.recompute_geometry(image_width, image_height);
		self.surface
			.resize(geometry.canvas_width, geometry.canvas_height);
	}

	pub fn set_hover(&mut self, hovering: bool) {
		self.field.set_hover(hovering);
	}

	/// Render one frame at the clock's current time.
	pub fn step(&mut self) {
		let now = self.clock.now_ms();
		render_frame(
			&mut self.field,
			&mut self.surface,
			&self.style,
			now,
			&mut self.rng,
		);
		self.frames += 1;
	}

	/// Frames rendered so far.
	pub fn frames(&self) -> u64 {
		self.frames
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::super::render::{DrawCall, RecordingSurface};
	use super::*;

	fn runner(clock: ManualClock) -> FieldRunner<RecordingSurface, SmallRng, ManualClock> {
		FieldRunner::new(
			ParticleField::default(),
			RecordingSurface::default(),
			FieldStyle::default(),
			SmallRng::seed_from_u64(21),
			clock,
		)
	}

	#[test]
	fn resize_sets_canvas_to_four_by_three_image() {
		let mut runner = runner(ManualClock::default());
		runner.resize(240.0, 180.0);
		assert_eq!(runner.surface.calls, vec![DrawCall::Resize(960.0, 540.0)]);

		runner.resize(120.0, 90.0);
		assert_eq!(runner.surface.calls.len(), 2);
		assert_eq!(runner.surface.calls[1], DrawCall::Resize(480.0, 270.0));
		let geometry = runner.field.geometry().copied();
		assert_eq!(geometry.map(|g| (g.left, g.top)), Some((180.0, 90.0)));
	}

	#[test]
	fn idle_frames_draw_nothing() {
		let clock = ManualClock::default();
		let mut runner = runner(clock.clone());
		runner.resize(100.0, 100.0);
		for _ in 0..10 {
			clock.advance(16.0);
			runner.step();
		}
		assert_eq!(runner.frames(), 10);
		assert_eq!(runner.surface.circles(), 0);
		assert!(runner.field.particles.is_empty());
	}

	#[test]
	fn hovering_fills_then_leaving_drains() {
		let clock = ManualClock::default();
		let mut runner = runner(clock.clone());
		runner.resize(100.0, 100.0);
		runner.set_hover(true);

		clock.set(1000.0);
		runner.step();
		assert!(runner.field.particles.is_empty());

		clock.advance(16.0);
		runner.step();
		// 16ms at 0.8/ms.
		assert_eq!(runner.field.particles.len(), 12);

		for _ in 0..30 {
			clock.advance(16.0);
			runner.step();
		}
		assert!(runner.field.particles.len() > 12);

		runner.set_hover(false);
		for _ in 0..110 {
			clock.advance(16.0);
			runner.step();
		}
		assert!(runner.field.particles.is_empty());
	}
}
