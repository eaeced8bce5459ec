//! Fund data provider abstractions and implementations.
//!
//! This module contains:
//! - The `FundDataProvider` trait the aggregation pipeline depends on
//! - The EastMoney implementation backed by its public endpoints

mod traits;

pub mod eastmoney;

pub use traits::FundDataProvider;
