//! Entity-oriented services, one per entity kind.
//!
//! Each service owns a repository seam and performs DTO/entity conversion
//! around the repository calls. Services are synchronous and stateless;
//! retry, timeout and caching policy belong to the adapters behind the
//! repository traits.

use thiserror::Error;

use crate::domain::types::ValidationError;
use crate::dto::ConversionError;
use crate::lookup::IdentifierError;
use crate::repository::errors::RepositoryError;

pub mod account;
pub mod asset;
pub mod case;
pub mod contact;
pub mod ftp;

/// Failure surface of every service operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// An entity invariant failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// DTO-to-entity translation failed.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// An identifier or query input failed its shape check; no remote call
    /// was made.
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
    /// The external collaborator reported failure. Carries the operation
    /// and identifier for context.
    #[error("{operation} failed for {identifier:?}: {source}")]
    Remote {
        operation: &'static str,
        identifier: String,
        source: RepositoryError,
    },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Wraps a repository failure with the operation context services report.
fn remote(
    operation: &'static str,
    identifier: impl Into<String>,
) -> impl FnOnce(RepositoryError) -> ServiceError {
    let identifier = identifier.into();
    move |source| ServiceError::Remote {
        operation,
        identifier,
        source,
    }
}
