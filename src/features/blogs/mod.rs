//! Blog listing feature: categories, summaries and the listing call.

pub(crate) mod client;
pub(crate) mod types;
