//! Market data models
//!
//! - `quote` - Live quote snapshots returned by a batch request
//! - `search` - Fund search candidates

mod quote;
mod search;

pub use quote::QuoteSnapshot;
pub use search::FundSearchHit;
