pub(crate) mod extractor;
mod parser;

pub use extractor::{display_name, ListingExtractor};
pub use parser::parse_reply;
