pub mod generator;
pub mod listing;
pub mod metrics;
pub mod store;

pub use generator::{DescriptionGenerator, GeneratorError, HttpDescriptionGenerator};
pub use listing::ListingService;
pub use metrics::{get_metrics, init_metrics};
pub use store::{InMemoryListingStore, ListingStore, PostgresListingStore};
