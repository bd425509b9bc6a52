//! Publication records as stored in `data/publications.json`.

use serde::Deserialize;

/// Month and year of publication. `month` is an English month name.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PublicationDate {
	pub month: String,
	pub year: i32,
}

/// A single paper.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Publication {
	/// Unique identifier, used to address the BibTeX block.
	pub id: String,
	pub title: String,
	pub authors: Vec<String>,
	/// Venue name (e.g., "NeurIPS 2024").
	pub conference: String,
	pub date: PublicationDate,
	/// One-line summary shown on the card.
	pub tldr: String,
	/// Optional thumbnail path. A placeholder is drawn when absent.
	#[serde(default)]
	pub image: Option<String>,
	/// Optional preprint link.
	#[serde(default)]
	pub arxiv: Option<String>,
	pub bibtex: String,
	/// Shown on the home page's "selected papers" list.
	#[serde(default)]
	pub selected: bool,
}

/// Top-level shape of the data file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PublicationsFile {
	pub publications: Vec<Publication>,
}
