//! Ordering and presentation helpers for the publication list.

use super::types::Publication;

const MONTHS: [&str; 12] = [
	"January",
	"February",
	"March",
	"April",
	"May",
	"June",
	"July",
	"August",
	"September",
	"October",
	"November",
	"December",
];

/// 1-based month number, or 0 for anything that isn't an English month name.
pub fn month_number(month: &str) -> u32 {
	MONTHS
		.iter()
		.position(|m| *m == month)
		.map_or(0, |i| i as u32 + 1)
}

/// Optionally keep only selected papers, then sort newest first.
///
/// Papers from the same year are ordered by month; ties keep their order
/// from the data file.
pub fn prepare(mut publications: Vec<Publication>, selected_only: bool) -> Vec<Publication> {
	if selected_only {
		publications.retain(|p| p.selected);
	}
	publications.sort_by(|a, b| {
		b.date
			.year
			.cmp(&a.date.year)
			.then_with(|| month_number(&b.date.month).cmp(&month_number(&a.date.month)))
	});
	publications
}

/// An author name and whether to emphasise it.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthorName<'a> {
	pub name: &'a str,
	pub highlighted: bool,
}

/// Flag authors whose name contains any of `highlight`.
pub fn split_authors<'a>(authors: &'a [String], highlight: &[&str]) -> Vec<AuthorName<'a>> {
	authors
		.iter()
		.map(|name| AuthorName {
			name: name.as_str(),
			highlighted: highlight.iter().any(|h| name.contains(h)),
		})
		.collect()
}
