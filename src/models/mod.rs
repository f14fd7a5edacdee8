mod holding;
mod portfolio;
mod quote;
pub mod symbol_catalog;

pub use holding::{EtfHolding, HoldingPayload, HoldingRecord};
pub use portfolio::{Portfolio, PortfolioSaveRequest, PortfolioWithHoldings, DEFAULT_USER_ID};
pub use quote::{QuoteSource, ResolvedQuote, StockQuote};
