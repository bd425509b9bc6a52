//! hero-field: client-side behaviour for a static academic homepage.
//!
//! This crate compiles to WASM and drives three parts of the page: a
//! hover-triggered particle field around the hero portrait, a publication
//! list rendered from a JSON data file, and the shared navigation chrome.

use leptos::mount::mount_to;
use leptos::prelude::*;
use log::{Level, info};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub mod components;

pub use components::particle_field::{FieldConfig, FieldStyle, ParticleField};
pub use components::publications::{Publication, PublicationList};

/// Id of the canvas overlaying the hero image.
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
/// Selector of the hero image the particles surround.
pub const HERO_IMAGE_SELECTOR: &str = ".hero-image img";
/// Home page container listing selected papers only.
pub const SELECTED_PAPERS_CONTAINER: &str = "selected-papers-container";
/// Publications page container listing every paper.
pub const ALL_PAPERS_CONTAINER: &str = "all-publications-container";
/// Author names emphasised in publication cards.
pub const HIGHLIGHTED_AUTHORS: &[&str] = &["Joël Mathys", "Joel Mathys"];

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("hero-field: logging initialized");
}

/// Attach every page behaviour whose anchor element exists in the document.
pub fn start() {
	components::site::init();
	components::particle_field::attach(PARTICLE_CANVAS_ID, HERO_IMAGE_SELECTOR);
	mount_publications(SELECTED_PAPERS_CONTAINER, true);
	mount_publications(ALL_PAPERS_CONTAINER, false);
}

/// Replace the contents of `#container_id` with a publication list.
fn mount_publications(container_id: &'static str, selected_only: bool) {
	let Some(container) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(container_id))
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
	else {
		return;
	};
	container.set_inner_html("");

	mount_to(container, move || {
		view! {
			<PublicationList
				url=components::publications::DEFAULT_URL
				selected_only=selected_only
				highlight=HIGHLIGHTED_AUTHORS.to_vec()
			/>
		}
	})
	.forget();
	info!("hero-field: publication list mounted in #{container_id}");
}
