//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::account::Account;
use crate::dto::account::AccountDTO;
use crate::dto::asset::AssetDTO;
use crate::dto::case::CaseDTO;
use crate::dto::contact::ContactDTO;
use crate::dto::ftp::FtpCredentialsDTO;
use crate::lookup::IdentifierError;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AccountRepository, AssetQueryBuilder, AssetRepository, CaseRepository, ContactQueryBuilder,
    ContactRepository, FtpRepository,
};

mock! {
    pub AccountRepo {}

    impl AccountRepository for AccountRepo {
        fn get_account(&self, id: &str) -> RepositoryResult<AccountDTO>;
        fn query_accounts(&self, query: &str) -> RepositoryResult<Vec<AccountDTO>>;
        fn create_account(&self, account: &Account) -> RepositoryResult<(String, i64)>;
        fn update_account(&self, account: &Account) -> RepositoryResult<()>;
        fn count_contacts(&self, account_id: &str) -> RepositoryResult<u32>;
    }
}

mock! {
    pub ContactRepo {}

    impl ContactQueryBuilder for ContactRepo {
        fn by_auth_id_query(&self, auth_id: &str) -> Result<String, IdentifierError>;
        fn by_email_query(&self, email: &str) -> Result<String, IdentifierError>;
        fn by_ids_query(&self, ids: &[String]) -> Result<String, IdentifierError>;
    }

    impl ContactRepository for ContactRepo {
        fn get_contact(&self, id: &str) -> RepositoryResult<ContactDTO>;
        fn query_contacts(&self, query: &str) -> RepositoryResult<Vec<ContactDTO>>;
        fn update_contact(&self, contact: &ContactDTO) -> RepositoryResult<()>;
    }
}

mock! {
    pub AssetRepo {}

    impl AssetQueryBuilder for AssetRepo {
        fn assets_by_account_id_query(&self, account_id: &str) -> String;
    }

    impl AssetRepository for AssetRepo {
        fn query_assets(&self, query: &str) -> RepositoryResult<Vec<AssetDTO>>;
    }
}

mock! {
    pub CaseRepo {}

    impl CaseRepository for CaseRepo {
        fn get_cases_by_site_id(
            &self,
            site_id: i64,
            lookback_days: u32,
        ) -> RepositoryResult<Vec<CaseDTO>>;
    }
}

mock! {
    pub FtpRepo {}

    impl FtpRepository for FtpRepo {
        fn get_ftp_credentials(&self, email: &str) -> RepositoryResult<FtpCredentialsDTO>;
    }
}
