pub mod listing;

pub use listing::{Condition, ListingField, ListingRecord};
