//! Profit derivation and filtering logic lives here.

pub mod classify;
pub mod entities;
pub mod enrich;
pub mod filter;

pub use entities::{Category, EnrichedItem, Item, PriceQuote};
pub use filter::{FilterCriteria, MembershipFilter};
