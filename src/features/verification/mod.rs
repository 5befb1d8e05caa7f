//! Identity verification: social account linking, Hashnode API key and email
//! OTP. Linking happens through backend redirects; the other steps are JSON
//! calls guarded by the CSRF retry policy.

pub(crate) mod client;
pub(crate) mod types;
