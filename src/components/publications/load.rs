//! Fetching the publications data file.

use log::{error, info};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::types::{Publication, PublicationsFile};

/// Default location of the data file, relative to the page.
pub const DEFAULT_URL: &str = "./data/publications.json";

/// Stage at which loading the data file failed.
#[derive(Debug, Error)]
enum LoadError {
	#[error("no window")]
	NoWindow,
	#[error("request failed: {0:?}")]
	Request(JsValue),
	#[error("server answered {0}")]
	Status(u16),
	#[error("could not read body: {0:?}")]
	Body(JsValue),
	#[error("invalid JSON: {0}")]
	Parse(#[from] serde_json::Error),
}

/// Parse the data file's contents.
pub fn parse_publications(json: &str) -> Result<Vec<Publication>, serde_json::Error> {
	serde_json::from_str::<PublicationsFile>(json).map(|file| file.publications)
}

/// Fetch and parse the publications at `url`.
///
/// Any failure is logged and yields an empty list.
pub async fn load_publications(url: &str) -> Vec<Publication> {
	match fetch_publications(url).await {
		Ok(publications) => {
			info!("hero-field: loaded {} publications", publications.len());
			publications
		}
		Err(e) => {
			error!("hero-field: failed to load publications from {url}: {e}");
			Vec::new()
		}
	}
}

async fn fetch_publications(url: &str) -> Result<Vec<Publication>, LoadError> {
	let window = web_sys::window().ok_or(LoadError::NoWindow)?;
	let response: Response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(LoadError::Request)?
		.dyn_into()
		.map_err(LoadError::Request)?;
	if !response.ok() {
		return Err(LoadError::Status(response.status()));
	}

	let body = JsFuture::from(response.text().map_err(LoadError::Body)?)
		.await
		.map_err(LoadError::Body)?;
	let text = body.as_string().ok_or(LoadError::Body(body))?;
	decode(&text)
}

fn decode(text: &str) -> Result<Vec<Publication>, LoadError> {
	Ok(parse_publications(text)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_the_data_file_in_order() {
		let json = r#"{ "publications": [
			{ "id": "old", "title": "Old", "authors": ["X"], "conference": "A",
			  "date": { "month": "May", "year": 2020 }, "tldr": "t",
			  "bibtex": "@a{old}", "selected": true,
			  "arxiv": "https://arxiv.org/abs/2001.00001" },
			{ "id": "new", "title": "New", "authors": [], "conference": "B",
			  "date": { "month": "June", "year": 2024 }, "tldr": "t",
			  "image": "img/new.png", "bibtex": "@a{new}", "selected": false }
		] }"#;
		let publications = parse_publications(json).unwrap();
		assert_eq!(publications.len(), 2);
		assert_eq!(publications[0].id, "old");
		assert!(publications[0].selected);
		assert_eq!(
			publications[0].arxiv.as_deref(),
			Some("https://arxiv.org/abs/2001.00001")
		);
		assert_eq!(publications[1].image.as_deref(), Some("img/new.png"));
	}

	#[test]
	fn failures_name_their_stage() {
		assert_eq!(LoadError::NoWindow.to_string(), "no window");
		assert_eq!(LoadError::Status(404).to_string(), "server answered 404");

		let err = decode("{ \"publications\": 3 }").unwrap_err();
		assert!(matches!(err, LoadError::Parse(_)));
		assert!(err.to_string().starts_with("invalid JSON: "), "{err}");
	}

	#[test]
	fn rejects_a_missing_publications_key() {
		assert!(parse_publications(r#"{ "papers": [] }"#).is_err());
		assert!(parse_publications("not json").is_err());
	}
}
