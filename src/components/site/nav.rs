//! Navigation menu behaviour.

use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

const MENU: &str = ".nav-menu";
const MENU_LINKS: &str = ".nav-menu a";
const HAMBURGER: &str = ".hamburger";

/// File name of the current page: the last path segment, or `index.html`
/// for a directory path.
pub fn active_page(pathname: &str) -> &str {
	match pathname.rsplit('/').next() {
		Some("") | None => "index.html",
		Some(page) => page,
	}
}

/// Whether a navigation link's `href` points at `page`.
pub fn is_active_link(href: &str, page: &str) -> bool {
	href == page
}

fn query(document: &Document, selector: &str) -> Option<Element> {
	document.query_selector(selector).ok().flatten()
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
	let Ok(nodes) = document.query_selector_all(selector) else {
		return Vec::new();
	};
	(0..nodes.length())
		.filter_map(|i| nodes.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

fn close_menu(document: &Document) {
	if let Some(menu) = query(document, MENU) {
		let _ = menu.class_list().remove_1("show");
	}
	if let Some(hamburger) = query(document, HAMBURGER) {
		let _ = hamburger.class_list().remove_1("active");
	}
}

fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
	let closure = Closure::<dyn FnMut(Event)>::new(handler);
	let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
	closure.forget();
}

/// Hamburger toggles the menu; following a link or clicking outside the
/// `<nav>` closes it.
pub(super) fn init_menu(document: &Document) {
	if let Some(hamburger) = query(document, HAMBURGER) {
		let doc = document.clone();
		let button = hamburger.clone();
		listen(&hamburger, "click", move |_| {
			if let Some(menu) = query(&doc, MENU) {
				let _ = menu.class_list().toggle("show");
			}
			let _ = button.class_list().toggle("active");
		});
	}

	for link in query_all(document, MENU_LINKS) {
		let doc = document.clone();
		listen(&link, "click", move |_| close_menu(&doc));
	}

	let doc = document.clone();
	listen(document, "click", move |event| {
		let inside_nav = event
			.target()
			.and_then(|t| t.dyn_into::<Element>().ok())
			.and_then(|el| el.closest("nav").ok().flatten())
			.is_some();
		if !inside_nav {
			close_menu(&doc);
		}
	});
}

/// `#anchor` links scroll smoothly to their target instead of jumping.
pub(super) fn init_smooth_scroll(document: &Document) {
	for anchor in query_all(document, "a[href^=\"#\"]") {
		let doc = document.clone();
		let link = anchor.clone();
		listen(&anchor, "click", move |event| {
			event.prevent_default();
			let Some(target) = link
				.get_attribute("href")
				.and_then(|href| doc.query_selector(&href).ok().flatten())
			else {
				return;
			};
			let options = ScrollIntoViewOptions::new();
			options.set_behavior(ScrollBehavior::Smooth);
			options.set_block(ScrollLogicalPosition::Start);
			target.scroll_into_view_with_scroll_into_view_options(&options);
		});
	}
}

/// Mark the menu link for the current page with `active`.
pub(super) fn highlight_active_link(document: &Document) {
	let Some(pathname) = document.location().and_then(|l| l.pathname().ok()) else {
		return;
	};
	let page = active_page(&pathname);
	for link in query_all(document, MENU_LINKS) {
		let href = link.get_attribute("href").unwrap_or_default();
		let classes = link.class_list();
		let _ = if is_active_link(&href, page) {
			classes.add_1("active")
		} else {
			classes.remove_1("active")
		};
	}
}
