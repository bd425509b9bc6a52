//! Canvas/image geometry and occlusion tests.
//!
//! The canvas is an overlay several times larger than the hero image, with
//! the image centred inside it. All particle coordinates live in canvas
//! space; the image is approximated by its bounding circle.

use super::config::FieldConfig;

/// Cached placement of the image inside the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageGeometry {
	pub width: f64,
	pub height: f64,
	/// Offset of the image's left edge within the canvas.
	pub left: f64,
	/// Offset of the image's top edge within the canvas.
	pub top: f64,
	pub canvas_width: f64,
	pub canvas_height: f64,
}

impl ImageGeometry {
	/// Lay out a canvas around an image of the given rendered size.
	pub fn compute(image_width: f64, image_height: f64, config: &FieldConfig) -> Self {
		let (sx, sy) = config.canvas_scale;
		let canvas_width = image_width * sx;
		let canvas_height = image_height * sy;
		Self {
			width: image_width,
			height: image_height,
			left: (canvas_width - image_width) / 2.0,
			top: (canvas_height - image_height) / 2.0,
			canvas_width,
			canvas_height,
		}
	}

	pub fn center(&self) -> (f64, f64) {
		(self.left + self.width / 2.0, self.top + self.height / 2.0)
	}

	/// Radius of the circle that bounds the image.
	pub fn radius(&self) -> f64 {
		self.width.max(self.height) / 2.0
	}
}

/// Whether the segment `(x1, y1) -> (x2, y2)` touches the circle at `(cx, cy)`.
///
/// Solves `|P1 + t(P2 - P1) - C|² = r²` for `t`. The segment intersects when
/// either root falls in `[0, 1]`, or when the roots straddle the segment
/// entirely (`t1 < 0 < 1 < t2`), meaning the whole segment lies inside the
/// circle. A zero-length segment never intersects.
pub fn line_intersects_circle(
	(x1, y1): (f64, f64),
	(x2, y2): (f64, f64),
	(cx, cy): (f64, f64),
	radius: f64,
) -> bool {
	let (dx, dy) = (x2 - x1, y2 - y1);
	let (fx, fy) = (x1 - cx, y1 - cy);

	let a = dx * dx + dy * dy;
	if a == 0.0 {
		return false;
	}
	let b = 2.0 * (fx * dx + fy * dy);
	let c = fx * fx + fy * fy - radius * radius;

	let discriminant = b * b - 4.0 * a * c;
	if discriminant < 0.0 {
		return false;
	}

	let root = discriminant.sqrt();
	let t1 = (-b - root) / (2.0 * a);
	let t2 = (-b + root) / (2.0 * a);

	let on_segment = |t: f64| (0.0..=1.0).contains(&t);
	on_segment(t1) || on_segment(t2) || (t1 < 0.0 && t2 > 1.0)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn canvas_is_four_by_three_with_image_centred() {
		let g = ImageGeometry::compute(200.0, 100.0, &FieldConfig::default());
		assert_eq!((g.canvas_width, g.canvas_height), (800.0, 300.0));
		assert_eq!((g.left, g.top), (300.0, 100.0));
		assert_eq!(g.center(), (400.0, 150.0));
		assert_eq!(g.radius(), 100.0);
	}

	#[test]
	fn segment_through_circle_intersects() {
		assert!(line_intersects_circle(
			(-20.0, 0.0),
			(20.0, 0.0),
			(0.0, 0.0),
			5.0
		));
	}

	#[test]
	fn segment_ending_inside_circle_intersects() {
		assert!(line_intersects_circle(
			(-20.0, 0.0),
			(0.0, 0.0),
			(0.0, 0.0),
			5.0
		));
	}

	#[test]
	fn segment_wholly_inside_circle_intersects() {
		assert!(line_intersects_circle(
			(-1.0, 0.0),
			(1.0, 0.0),
			(0.0, 0.0),
			5.0
		));
	}

	#[test]
	fn segment_passing_beside_circle_does_not_intersect() {
		assert!(!line_intersects_circle(
			(-20.0, 10.0),
			(20.0, 10.0),
			(0.0, 0.0),
			5.0
		));
	}

	#[test]
	fn segment_pointing_at_circle_but_short_does_not_intersect() {
		// Same line as the centre, stops before reaching the circle.
		assert!(!line_intersects_circle(
			(-20.0, 0.0),
			(-10.0, 0.0),
			(0.0, 0.0),
			5.0
		));
	}

	#[test]
	fn zero_length_segment_never_intersects() {
		assert!(!line_intersects_circle(
			(0.0, 0.0),
			(0.0, 0.0),
			(0.0, 0.0),
			5.0
		));
		assert!(!line_intersects_circle(
			(50.0, 50.0),
			(50.0, 50.0),
			(0.0, 0.0),
			0.0
		));
	}
}
