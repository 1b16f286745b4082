//! Flat transfer objects mirroring the domain entities, plus the
//! bidirectional conversions between the two.
//!
//! DTOs carry no behavior beyond conversion. They are created fresh per
//! request/response and serialize under two parallel naming schemes: the
//! JSON contract pinned with serde attributes, and the CRM column mapping
//! declared through [`sfdc::SfdcObject`].

use thiserror::Error;

use crate::domain::types::ValidationError;

pub mod account;
pub mod asset;
pub mod case;
pub mod contact;
pub mod date;
pub mod ftp;
pub mod sfdc;

/// Errors produced while translating a DTO into its entity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// The contact DTO carried no embedded account. Raised before any
    /// account conversion is attempted.
    #[error("contact has no embedded account")]
    MissingAccount,
    /// The site id string did not parse as an integer.
    #[error("site id is not a number: {value:?}")]
    InvalidSiteId { value: String },
    /// The embedded account DTO failed its own conversion.
    #[error("failed to convert embedded account: {0}")]
    EmbeddedAccount(Box<ConversionError>),
    /// An entity invariant failed while applying a DTO field.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
