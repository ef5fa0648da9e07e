pub mod listing;

pub use listing::{Facts, Listing, ListingRow, NewListing};
