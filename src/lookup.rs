//! Identifier-shape dispatch.
//!
//! The CRM distinguishes its own record identifiers from internal numeric
//! site identifiers by string shape alone, so an opaque caller-supplied
//! identifier has to be resolved into a lookup strategy before any remote
//! call is made. The rule ordering here is load-bearing: the length check
//! runs before the numeric parse, so an 18-character all-digit string is
//! still a record id, not a site id.

use thiserror::Error;

use crate::domain::types::is_record_id;

/// An identifier or query input failed its shape check. Raised before any
/// remote call, so no side effect has occurred.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("identifier required")]
    Missing,
    #[error("site id must be greater than 0, got {0}")]
    NonPositiveSiteId(i64),
    #[error("identifier must be a 15 or 18 character record id or a positive integer: {0:?}")]
    Unrecognized(String),
    #[error("auth id incorrectly formatted: {0:?}")]
    MalformedAuthId(String),
    #[error("email incorrectly formatted: {0:?}")]
    MalformedEmail(String),
    #[error("at least one id is required")]
    EmptyIdList,
}

/// The lookup strategy an account identifier resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountLookup {
    /// Native CRM record id; fetch the object directly.
    ByRecordId(String),
    /// Internal site identifier; fetch through the external-id column.
    BySiteId(String),
}

/// Resolves an opaque account identifier into a lookup strategy.
pub fn resolve_account_identifier(id: &str) -> Result<AccountLookup, IdentifierError> {
    if id.is_empty() {
        return Err(IdentifierError::Missing);
    }

    if is_record_id(id) {
        return Ok(AccountLookup::ByRecordId(id.to_string()));
    }

    match id.parse::<i64>() {
        Ok(site_id) if site_id > 0 => Ok(AccountLookup::BySiteId(id.to_string())),
        Ok(site_id) => Err(IdentifierError::NonPositiveSiteId(site_id)),
        Err(_) => Err(IdentifierError::Unrecognized(id.to_string())),
    }
}

/// Resolves a contact identifier. Contacts are only addressable by native
/// record id; there is no external-field fallback.
pub fn resolve_contact_identifier(id: &str) -> Result<&str, IdentifierError> {
    if id.is_empty() {
        return Err(IdentifierError::Missing);
    }

    if is_record_id(id) {
        return Ok(id);
    }

    Err(IdentifierError::Unrecognized(id.to_string()))
}
