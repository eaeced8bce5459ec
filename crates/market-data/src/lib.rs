//! LeekFund Market Data Crate
//!
//! Remote data sources consumed by the fund estimation pipeline.
//!
//! # Overview
//!
//! Three read-only endpoints are wrapped here:
//! - Fund search: free-text lookup of funds by code or name
//! - Holdings disclosure: the HTML page listing a fund's top stock positions
//! - Quote batch: live price/change for many securities in one round trip
//!
//! The [`FundDataProvider`] trait is the seam the core crate depends on.
//! [`EastMoneyProvider`] is the production implementation.
//!
//! # Core Types
//!
//! - [`QuoteSnapshot`] - One security's live quote from a batch request
//! - [`FundSearchHit`] - A candidate returned by the search endpoint
//! - [`MarketDataError`] - Transport and response errors

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{FundSearchHit, QuoteSnapshot};
pub use provider::eastmoney::{EastMoneyProvider, DEFAULT_HOLDINGS_TOP_N};
pub use provider::FundDataProvider;
