//! Page chrome shared by every page: footer year, navigation menu and
//! in-page anchor scrolling.

mod nav;

use log::debug;

pub use nav::{active_page, is_active_link};

/// Wire up all page chrome. Elements that are absent are skipped.
pub fn init() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};
	stamp_year(&document);
	nav::init_menu(&document);
	nav::init_smooth_scroll(&document);
	nav::highlight_active_link(&document);
	debug!("hero-field: site chrome initialized");
}

/// Write the current year into `#year`.
fn stamp_year(document: &web_sys::Document) {
	if let Some(el) = document.get_element_by_id("year") {
		let year = js_sys::Date::new_0().get_full_year();
		el.set_text_content(Some(&year.to_string()));
	}
}
