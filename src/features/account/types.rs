use serde::Serialize;

/// Body of the account deletion call. Carries the password; never log it.
#[derive(Clone, Serialize)]
pub struct DeleteAccountRequest<'a> {
    pub password: &'a str,
}
