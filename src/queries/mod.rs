//! Query modules for the catalog SDK.
//!
//! [`paginate`] holds the pure filtering and pagination engine; [`cards`]
//! borrows the client and favorites store to run it against live data.

pub mod cards;
pub mod paginate;

pub use cards::{CardQuery, SearchCardsParams, SearchResult};
pub use paginate::{derive_series, paginate, parse_page};
