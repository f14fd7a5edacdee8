pub(crate) mod holding_queries;
pub(crate) mod portfolio_queries;
