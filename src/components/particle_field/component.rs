//! Browser wiring for the particle field.
//!
//! Finds the overlay canvas and the hero image in the page, keeps the canvas
//! sized to the image on every window resize, tracks pointer hover over the
//! canvas, and runs the frame loop via `requestAnimationFrame` for the rest
//! of the page's life.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlCanvasElement, Window};

use super::config::FieldConfig;
use super::driver::{FieldRunner, PerformanceClock};
use super::render::CanvasSurface;
use super::state::ParticleField;
use super::theme::FieldStyle;

type BrowserRunner = FieldRunner<CanvasSurface, SmallRng, PerformanceClock>;

/// Start the hover particle effect on the canvas with id `canvas_id`, around
/// the first element matching `image_selector`.
///
/// A missing canvas disables the effect; a missing image leaves the canvas
/// blank. Neither is an error.
pub fn attach(canvas_id: &str, image_selector: &str) {
	if try_attach(canvas_id, image_selector).is_none() {
		warn!("hero-field: particle canvas #{canvas_id} unavailable, effect disabled");
	}
}

fn try_attach(canvas_id: &str, image_selector: &str) -> Option<()> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let canvas: HtmlCanvasElement = document.get_element_by_id(canvas_id)?.dyn_into().ok()?;
	let image = document.query_selector(image_selector).ok().flatten();
	if image.is_none() {
		warn!("hero-field: no element matches {image_selector:?}, nothing will be drawn");
	}

	let surface = CanvasSurface::new(canvas.clone())?;
	let clock = PerformanceClock::new()?;
	let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
	let runner: Rc<RefCell<BrowserRunner>> = Rc::new(RefCell::new(FieldRunner::new(
		ParticleField::new(FieldConfig::default()),
		surface,
		FieldStyle::default(),
		SmallRng::seed_from_u64(seed),
		clock,
	)));

	// Initial layout, then again on every window resize.
	relayout(&runner, image.as_ref(), &canvas);
	let (runner_resize, canvas_resize) = (runner.clone(), canvas.clone());
	let on_resize = Closure::<dyn FnMut()>::new(move || {
		relayout(&runner_resize, image.as_ref(), &canvas_resize);
	});
	let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
	on_resize.forget();

	for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
		let runner_hover = runner.clone();
		let on_hover = Closure::<dyn FnMut()>::new(move || {
			runner_hover.borrow_mut().set_hover(hovering);
		});
		let _ = canvas.add_event_listener_with_callback(event, on_hover.as_ref().unchecked_ref());
		on_hover.forget();
	}

	start_loop(&window, runner);
	info!("hero-field: particle field attached to #{canvas_id}");
	Some(())
}

/// Recompute geometry from the image's rendered size. No-op without an
/// image or without a container around the canvas.
fn relayout(runner: &Rc<RefCell<BrowserRunner>>, image: Option<&Element>, canvas: &HtmlCanvasElement) {
	let Some(image) = image else {
		return;
	};
	if canvas.parent_element().is_none() {
		return;
	}
	let rect = image.get_bounding_client_rect();
	runner.borrow_mut().resize(rect.width(), rect.height());
}

/// Self-rescheduling animation loop. Never stops.
fn start_loop(window: &Window, runner: Rc<RefCell<BrowserRunner>>) {
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let animate_inner = animate.clone();

	*animate.borrow_mut() = Some(Closure::new(move || {
		runner.borrow_mut().step();
		if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
			let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}
}
