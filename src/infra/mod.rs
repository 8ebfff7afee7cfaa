//! API clients and their TTL memos.

pub mod cache;
pub mod osrsbox;
pub mod wiki;

pub use osrsbox::{MetadataClient, MetadataError};
pub use wiki::{PriceClient, PriceError};
