//! Transient particles emitted around the hero image.

use std::f64::consts::TAU;
use std::ops::Range;

use rand::Rng;

use super::config::FieldConfig;

/// A single particle drifting away from the image.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Image centre at spawn time, used for the distance falloff.
	pub cx: f64,
	pub cy: f64,
	/// Starts at 1.0; the particle is dead once this reaches 0.
	pub life: f64,
	pub decay: f64,
	pub radius: f64,
}

impl Particle {
	/// Advance one frame: move, apply friction, lose life.
	pub fn update(&mut self, friction: f64) {
		self.x += self.vx;
		self.y += self.vy;
		self.vx *= friction;
		self.vy *= friction;
		self.life -= self.decay;
	}

	pub fn is_alive(&self) -> bool {
		self.life > 0.0
	}

	/// Fill opacity: life × dimming × linear falloff with distance from the centre.
	pub fn alpha(&self, dimming: f64, falloff_distance: f64) -> f64 {
		let distance = (self.x - self.cx).hypot(self.y - self.cy);
		let falloff = (1.0 - distance / falloff_distance).max(0.0);
		self.life * dimming * falloff
	}
}

/// Uniform sample from `range` that tolerates empty ranges.
fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f64>) -> f64 {
	range.start + rng.r#gen::<f64>() * (range.end - range.start)
}

/// Place a new particle in the spawn annulus, moving radially outward.
pub fn spawn_particle<R: Rng + ?Sized>(
	rng: &mut R,
	(cx, cy): (f64, f64),
	image_radius: f64,
	config: &FieldConfig,
) -> Particle {
	let angle = rng.r#gen::<f64>() * TAU;
	let (inner, outer) = config.spawn_annulus(image_radius);
	let distance = sample(rng, &(inner..outer));
	let speed = sample(rng, &config.speed);
	let (sin, cos) = angle.sin_cos();

	Particle {
		x: cx + cos * distance,
		y: cy + sin * distance,
		vx: cos * speed,
		vy: sin * speed,
		cx,
		cy,
		life: 1.0,
		decay: sample(rng, &config.decay),
		radius: sample(rng, &config.radius),
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	const EPS: f64 = 1e-9;

	fn at_rest(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			cx: 0.0,
			cy: 0.0,
			life: 1.0,
			decay: 0.02,
			radius: 2.0,
		}
	}

	#[test]
	fn update_moves_damps_and_decays() {
		let mut p = Particle {
			vx: 2.0,
			vy: -1.0,
			..at_rest(10.0, 10.0)
		};
		p.update(0.98);
		assert_eq!((p.x, p.y), (12.0, 9.0));
		assert!((p.vx - 1.96).abs() < 1e-12);
		assert!((p.vy + 0.98).abs() < 1e-12);
		assert!((p.life - 0.98).abs() < 1e-12);
	}

	#[test]
	fn life_strictly_decreases_until_death() {
		let mut rng = SmallRng::seed_from_u64(7);
		let config = FieldConfig::default();
		let mut p = spawn_particle(&mut rng, (0.0, 0.0), 50.0, &config);
		let mut frames = 0;
		while p.is_alive() {
			let before = p.life;
			p.update(config.friction);
			assert!(p.life < before);
			frames += 1;
		}
		// Decay lies in [0.01, 0.025), so death takes 40 to 100 frames
		// (one more when rounding leaves a sliver of life).
		assert!((40..=101).contains(&frames), "died after {frames} frames");
	}

	#[test]
	fn alpha_falls_off_with_distance() {
		let p = at_rest(150.0, 0.0);
		assert!((p.alpha(0.7, 300.0) - 0.35).abs() < 1e-12);
		assert_eq!(at_rest(300.0, 0.0).alpha(0.7, 300.0), 0.0);
		assert_eq!(at_rest(0.0, 450.0).alpha(0.7, 300.0), 0.0);
	}

	#[test]
	fn spawns_stay_in_annulus_and_move_outward() {
		let mut rng = SmallRng::seed_from_u64(42);
		let config = FieldConfig::default();
		let center = (400.0, 300.0);
		let image_radius = 100.0;

		for _ in 0..1000 {
			let p = spawn_particle(&mut rng, center, image_radius, &config);
			let (dx, dy) = (p.x - center.0, p.y - center.1);
			let distance = dx.hypot(dy);
			assert!(distance > 110.0 - EPS && distance < 160.0 + EPS, "distance {distance}");

			let speed = p.vx.hypot(p.vy);
			assert!(speed > 1.5 - EPS && speed < 3.5 + EPS, "speed {speed}");
			// Velocity is parallel to the offset from the centre.
			assert!(dx * p.vx + dy * p.vy > 0.0);
			assert!((dx * p.vy - dy * p.vx).abs() < 1e-6);

			assert_eq!(p.life, 1.0);
			assert!((0.01..0.025).contains(&p.decay));
			assert!((1.5..4.0).contains(&p.radius));
			assert_eq!((p.cx, p.cy), center);
		}
	}
}
