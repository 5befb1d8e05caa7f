//! Account management: logout and permanent account deletion.

pub(crate) mod client;
pub(crate) mod types;
