pub(crate) mod portfolio_service;
pub(crate) mod quote_service;
