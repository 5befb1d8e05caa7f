//! Domain-level frontend features and their request logic. Routes import these
//! modules to keep view code focused while request orchestration and message
//! mapping stay testable without a browser.

pub(crate) mod account;
pub(crate) mod blogs;
pub(crate) mod session;
pub(crate) mod verification;
