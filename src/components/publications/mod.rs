//! Publication list rendered from the site's JSON data file.
//!
//! The data file is fetched once per list, optionally filtered to selected
//! papers, sorted newest first and rendered as cards with a collapsible
//! BibTeX block. A failed fetch renders the empty-list message.

mod component;
mod list;
mod load;
mod types;

pub use component::PublicationList;
pub use list::{AuthorName, month_number, prepare, split_authors};
pub use load::{DEFAULT_URL, load_publications, parse_publications};
pub use types::{Publication, PublicationDate, PublicationsFile};
