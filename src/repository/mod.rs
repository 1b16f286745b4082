//! Abstract contracts any backing store must satisfy.
//!
//! The traits speak only in DTOs, entities and primitive identifiers, so a
//! CRM adapter, a relay adapter or an in-memory fake can all stand behind
//! the same services. Query-builder methods carry provided implementations
//! delegating to [`crate::soql`], so every store gets the canonical query
//! text for free and may override it only when its dialect differs.

use crate::domain::account::Account;
use crate::dto::account::AccountDTO;
use crate::dto::asset::AssetDTO;
use crate::dto::case::CaseDTO;
use crate::dto::contact::ContactDTO;
use crate::dto::ftp::FtpCredentialsDTO;
use crate::lookup::IdentifierError;
use crate::repository::errors::RepositoryResult;
use crate::soql;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Access to account data.
pub trait AccountRepository {
    /// Fetches one account. The identifier has already been shape-checked
    /// by the service; the store decides between record-id and
    /// external-field lookup from the same shape rules.
    fn get_account(&self, id: &str) -> RepositoryResult<AccountDTO>;
    fn query_accounts(&self, query: &str) -> RepositoryResult<Vec<AccountDTO>>;
    /// Creates the account and returns the new record id and site id.
    fn create_account(&self, account: &Account) -> RepositoryResult<(String, i64)>;
    fn update_account(&self, account: &Account) -> RepositoryResult<()>;
    /// Number of contacts currently associated with the account; backs the
    /// contact-count enrichment.
    fn count_contacts(&self, account_id: &str) -> RepositoryResult<u32>;
}

/// Builders for the contact queries a store executes.
pub trait ContactQueryBuilder {
    fn by_auth_id_query(&self, auth_id: &str) -> Result<String, IdentifierError> {
        soql::contacts_by_auth_id(auth_id)
    }

    fn by_email_query(&self, email: &str) -> Result<String, IdentifierError> {
        soql::contacts_by_email(email)
    }

    fn by_ids_query(&self, ids: &[String]) -> Result<String, IdentifierError> {
        soql::contacts_by_ids(ids)
    }
}

/// Access to contact data.
pub trait ContactRepository: ContactQueryBuilder {
    fn get_contact(&self, id: &str) -> RepositoryResult<ContactDTO>;
    fn query_contacts(&self, query: &str) -> RepositoryResult<Vec<ContactDTO>>;
    fn update_contact(&self, contact: &ContactDTO) -> RepositoryResult<()>;
}

/// Builder for the asset queries a store executes.
pub trait AssetQueryBuilder {
    fn assets_by_account_id_query(&self, account_id: &str) -> String {
        soql::assets_by_account_id(account_id)
    }
}

/// Access to client asset data.
pub trait AssetRepository: AssetQueryBuilder {
    fn query_assets(&self, query: &str) -> RepositoryResult<Vec<AssetDTO>>;
}

/// Access to support case data, keyed by site id.
pub trait CaseRepository {
    fn get_cases_by_site_id(&self, site_id: i64, lookback_days: u32)
    -> RepositoryResult<Vec<CaseDTO>>;
}

/// Access to FTP credentials, keyed by email.
pub trait FtpRepository {
    fn get_ftp_credentials(&self, email: &str) -> RepositoryResult<FtpCredentialsDTO>;
}
