//! Leptos components rendering publication cards.

use std::time::Duration;

use leptos::either::Either;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;
use wasm_bindgen_futures::JsFuture;

use super::list::{prepare, split_authors};
use super::load::load_publications;
use super::types::Publication;

/// Book-shaped stand-in for papers without a thumbnail.
const PLACEHOLDER_SVG: &str = r##"<svg class="paper-mockup-image" viewBox="0 0 200 280" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="paperGrad" x1="0%" y1="0%" x2="100%" y2="0%">
      <stop offset="0%" style="stop-color:#e8eef7;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#d0dde8;stop-opacity:1" />
    </linearGradient>
  </defs>
  <rect x="30" y="30" width="140" height="220" fill="url(#paperGrad)" stroke="#6b7c99" stroke-width="2" rx="4"/>
  <line x1="100" y1="30" x2="100" y2="250" stroke="#6b7c99" stroke-width="2" opacity="0.3"/>
  <rect x="30" y="30" width="140" height="40" fill="#4a5fa5" rx="4"/>
  <line x1="45" y1="50" x2="155" y2="50" stroke="white" stroke-width="2.5"/>
  <line x1="45" y1="60" x2="125" y2="60" stroke="white" stroke-width="2"/>
  <line x1="45" y1="90" x2="155" y2="90" stroke="#6b7c99" stroke-width="1.5" opacity="0.6"/>
  <line x1="45" y1="105" x2="155" y2="105" stroke="#6b7c99" stroke-width="1.5" opacity="0.6"/>
  <line x1="45" y1="120" x2="145" y2="120" stroke="#6b7c99" stroke-width="1.5" opacity="0.6"/>
  <line x1="45" y1="150" x2="155" y2="150" stroke="#6b7c99" stroke-width="1.5" opacity="0.6"/>
  <line x1="45" y1="165" x2="155" y2="165" stroke="#6b7c99" stroke-width="1.5" opacity="0.6"/>
  <line x1="45" y1="180" x2="135" y2="180" stroke="#6b7c99" stroke-width="1.5" opacity="0.6"/>
  <circle cx="150" cy="220" r="8" fill="#4a5fa5" opacity="0.2"/>
</svg>"##;

const COPY_LABEL: &str = "Copy";
const COPIED_LABEL: &str = "Copied!";

/// How long the copy button reads "Copied!".
const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Loads the publications at `url` and renders one card per paper, newest
/// first. With `selected_only`, only papers flagged `selected` are shown.
/// Author names containing any entry of `highlight` are emphasised.
#[component]
pub fn PublicationList(
	#[prop(into)] url: String,
	#[prop(default = false)] selected_only: bool,
	#[prop(default = Vec::new())] highlight: Vec<&'static str>,
) -> impl IntoView {
	let (publications, set_publications) = signal(None::<Vec<Publication>>);

	spawn_local(async move {
		let loaded = load_publications(&url).await;
		set_publications.set(Some(prepare(loaded, selected_only)));
	});

	move || match publications.get() {
		None => Either::Left(()),
		Some(list) if list.is_empty() => Either::Right(Either::Left(view! {
			<p>"No publications found."</p>
		})),
		Some(list) => Either::Right(Either::Right(
			list.into_iter()
				.map(|publication| {
					view! { <PublicationCard publication=publication highlight=highlight.clone() /> }
				})
				.collect_view(),
		)),
	}
}

/// A single paper: thumbnail, metadata, links and a collapsible BibTeX block.
#[component]
fn PublicationCard(publication: Publication, highlight: Vec<&'static str>) -> impl IntoView {
	let show_bibtex = RwSignal::new(false);
	let copy_label = RwSignal::new(COPY_LABEL);

	let Publication {
		id,
		title,
		authors,
		conference,
		date,
		tldr,
		image,
		arxiv,
		bibtex,
		..
	} = publication;

	let authors = split_authors(&authors, &highlight)
		.into_iter()
		.enumerate()
		.map(|(i, author)| {
			let name = author.name.to_string();
			let name = if author.highlighted {
				Either::Left(view! { <strong>{name}</strong> })
			} else {
				Either::Right(name)
			};
			view! { {(i > 0).then_some(", ")} {name} }
		})
		.collect_view();

	let thumbnail = match image {
		Some(src) => Either::Left(view! { <img src=src alt=title.clone() /> }),
		None => Either::Right(view! { <div class="paper-mockup" inner_html=PLACEHOLDER_SVG></div> }),
	};

	let arxiv_link = arxiv.map(|href| {
		view! {
			<a href=href target="_blank" rel="noopener noreferrer">
				"arXiv"
			</a>
		}
	});

	let copy_text = bibtex.clone();
	let on_copy = move |_| {
		let Some(write) = copy_to_clipboard(&copy_text) else {
			return;
		};
		spawn_local(async move {
			let result = JsFuture::from(write).await;
			if let Err(e) = &result {
				warn!("hero-field: clipboard write rejected: {e:?}");
			}
			if let Some(label) = label_after_copy(&result) {
				copy_label.set(label);
				set_timeout(move || copy_label.set(COPY_LABEL), COPY_FEEDBACK);
			}
		});
	};

	view! {
		<div class="paper-card">
			<div class="paper-card-image">{thumbnail}</div>
			<div class="paper-card-content">
				<h3>{title}</h3>
				<div class="paper-authors">{authors}</div>
				<div class="paper-tldr">
					<strong>"TLDR:"</strong>
					" "
					{tldr}
				</div>
				<div class="paper-meta">
					<span>
						<strong>{conference}</strong>
					</span>
					<span>{format!("{} {}", date.month, date.year)}</span>
				</div>
				<div class="paper-links">
					{arxiv_link}
					<a
						href="#"
						on:click=move |ev| {
							ev.prevent_default();
							show_bibtex.update(|shown| *shown = !*shown);
						}
					>
						"BibTeX"
					</a>
				</div>
				<div
					class="bibtex-section"
					class:show=move || show_bibtex.get()
					id=format!("bibtex-{id}")
				>
					<div class="bibtex-code">{bibtex}</div>
					<button class="bibtex-copy" on:click=on_copy>
						{move || copy_label.get()}
					</button>
				</div>
			</div>
		</div>
	}
}

/// Hand `text` to the async clipboard API. `None` outside a browser.
fn copy_to_clipboard(text: &str) -> Option<js_sys::Promise> {
	Some(web_sys::window()?.navigator().clipboard().write_text(text))
}

/// Button label once the clipboard write settles. A rejected write keeps
/// the button as it was.
fn label_after_copy<T, E>(result: &Result<T, E>) -> Option<&'static str> {
	result.as_ref().ok().map(|_| COPIED_LABEL)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn copied_only_after_a_successful_write() {
		assert_eq!(label_after_copy(&Ok::<(), ()>(())), Some("Copied!"));
		assert_eq!(label_after_copy(&Err::<(), &str>("NotAllowedError")), None);
	}
}
