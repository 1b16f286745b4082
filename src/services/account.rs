//! Account operations.
use crate::domain::account::Account;
use crate::domain::types::ValidationError;
use crate::dto::account::AccountDTO;
use crate::lookup::resolve_account_identifier;
use crate::repository::AccountRepository;
use crate::services::{remote, ServiceResult};

/// Provides interaction with account data through an [`AccountRepository`].
pub struct AccountService<R> {
    repo: R,
}

impl<R: AccountRepository> AccountService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Fetches one account by an opaque identifier (record id or site id).
    /// The identifier shape is resolved before the repository is touched,
    /// so malformed input never reaches the remote system. The returned
    /// DTO carries the denormalized contact count when it can be computed.
    pub fn get_account(&self, id: &str) -> ServiceResult<AccountDTO> {
        resolve_account_identifier(id)?;

        let mut account = self
            .repo
            .get_account(id)
            .map_err(remote("get account", id))?;

        self.attach_contact_count(&mut account);
        Ok(account)
    }

    /// Runs a raw account query. Each returned account is enriched with
    /// its contact count sequentially, one remote call per account; an
    /// enrichment failure is logged and leaves that one count unset while
    /// the rest of the batch stands.
    pub fn query_accounts(&self, query: &str) -> ServiceResult<Vec<AccountDTO>> {
        let mut accounts = self
            .repo
            .query_accounts(query)
            .map_err(remote("query accounts", query))?;

        for account in &mut accounts {
            self.attach_contact_count(account);
        }

        Ok(accounts)
    }

    /// Creates a new account from the DTO, returning the record id and
    /// site id assigned by the CRM.
    pub fn create_account(&self, dto: &AccountDTO) -> ServiceResult<(String, i64)> {
        let account = Account::try_from(dto)?;

        self.repo
            .create_account(&account)
            .map_err(remote("create account", account.name()))
    }

    /// Updates an existing account. The site id is the upsert key, so the
    /// DTO must carry a positive one.
    pub fn update_account(&self, dto: &AccountDTO) -> ServiceResult<()> {
        let account = Account::try_from(dto)?;

        if account.site_id() <= 0 {
            return Err(ValidationError::NonPositiveSiteId(account.site_id()).into());
        }

        self.repo
            .update_account(&account)
            .map_err(remote("update account", account.site_id().to_string()))
    }

    /// Number of contacts associated with the given account record.
    pub fn contact_count(&self, account_id: &str) -> ServiceResult<u32> {
        self.repo
            .count_contacts(account_id)
            .map_err(remote("count contacts", account_id))
    }

    fn attach_contact_count(&self, dto: &mut AccountDTO) {
        if dto.sales_force_id.is_empty() {
            return;
        }

        match self.repo.count_contacts(&dto.sales_force_id) {
            Ok(count) => dto.contact_count = Some(count),
            Err(err) => log::warn!(
                "contact count unavailable for account {}: {err}",
                dto.sales_force_id
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::lookup::IdentifierError;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockAccountRepo;
    use crate::services::ServiceError;

    fn account_dto(record_id: &str) -> AccountDTO {
        AccountDTO {
            name: "Acme".to_string(),
            sales_force_id: record_id.to_string(),
            site_id: "5740".to_string(),
            ..AccountDTO::default()
        }
    }

    #[test]
    fn get_account_by_record_id_enriches_contact_count() {
        let mut repo = MockAccountRepo::new();
        repo.expect_get_account()
            .with(eq("001d000001TweFmAAJ"))
            .return_once(|_| Ok(account_dto("001d000001TweFmAAJ")));
        repo.expect_count_contacts()
            .with(eq("001d000001TweFmAAJ"))
            .return_once(|_| Ok(7));

        let service = AccountService::new(repo);
        let account = service.get_account("001d000001TweFmAAJ").unwrap();

        assert_eq!(account.contact_count, Some(7));
    }

    #[test]
    fn get_account_by_site_id_dispatches() {
        let mut repo = MockAccountRepo::new();
        repo.expect_get_account()
            .with(eq("5740"))
            .return_once(|_| Ok(account_dto("001d000001TweFmAAJ")));
        repo.expect_count_contacts().return_once(|_| Ok(0));

        let service = AccountService::new(repo);
        assert!(service.get_account("5740").is_ok());
    }

    #[test]
    fn malformed_identifiers_never_reach_the_repository() {
        // no expectations set: any repository call would panic the test
        let service = AccountService::new(MockAccountRepo::new());

        assert_eq!(
            service.get_account(""),
            Err(ServiceError::Identifier(IdentifierError::Missing))
        );
        assert_eq!(
            service.get_account("0"),
            Err(ServiceError::Identifier(IdentifierError::NonPositiveSiteId(
                0
            )))
        );
        assert!(matches!(
            service.get_account("aaaa"),
            Err(ServiceError::Identifier(IdentifierError::Unrecognized(_)))
        ));
    }

    #[test]
    fn enrichment_failure_leaves_count_unset() {
        let mut repo = MockAccountRepo::new();
        repo.expect_get_account()
            .return_once(|_| Ok(account_dto("001d000001TweFmAAJ")));
        repo.expect_count_contacts()
            .return_once(|_| Err(RepositoryError::Remote("timeout".to_string())));

        let service = AccountService::new(repo);
        let account = service.get_account("001d000001TweFmAAJ").unwrap();

        assert_eq!(account.contact_count, None);
    }

    #[test]
    fn query_accounts_enriches_each_element() {
        let mut repo = MockAccountRepo::new();
        repo.expect_query_accounts().return_once(|_| {
            Ok(vec![
                account_dto("001d000001TweFmAAJ"),
                account_dto("001d000001TwgVCAAZ"),
            ])
        });
        repo.expect_count_contacts()
            .with(eq("001d000001TweFmAAJ"))
            .return_once(|_| Ok(3));
        repo.expect_count_contacts()
            .with(eq("001d000001TwgVCAAZ"))
            .return_once(|_| Err(RepositoryError::NotFound));

        let service = AccountService::new(repo);
        let accounts = service
            .query_accounts("SELECT Id FROM Account")
            .unwrap();

        assert_eq!(accounts[0].contact_count, Some(3));
        assert_eq!(accounts[1].contact_count, None);
    }

    #[test]
    fn create_account_converts_before_calling_the_store() {
        let mut repo = MockAccountRepo::new();
        repo.expect_create_account()
            .withf(|account: &Account| account.name() == "Acme" && account.site_id() == 5740)
            .return_once(|_| Ok(("001d000001TweFmAAJ".to_string(), 5740)));

        let service = AccountService::new(repo);
        let (record_id, site_id) = service.create_account(&account_dto("")).unwrap();

        assert_eq!(record_id, "001d000001TweFmAAJ");
        assert_eq!(site_id, 5740);
    }

    #[test]
    fn create_account_propagates_conversion_failure() {
        let service = AccountService::new(MockAccountRepo::new());
        let dto = AccountDTO::default();

        assert!(matches!(
            service.create_account(&dto),
            Err(ServiceError::Conversion(_))
        ));
    }

    #[test]
    fn update_account_requires_a_site_id() {
        let service = AccountService::new(MockAccountRepo::new());
        let dto = AccountDTO {
            name: "Acme".to_string(),
            ..AccountDTO::default()
        };

        assert_eq!(
            service.update_account(&dto),
            Err(ServiceError::Validation(
                ValidationError::NonPositiveSiteId(0)
            ))
        );
    }

    #[test]
    fn update_account_wraps_remote_failure_with_context() {
        let mut repo = MockAccountRepo::new();
        repo.expect_update_account()
            .return_once(|_| Err(RepositoryError::Rejected("bad payload".to_string())));

        let service = AccountService::new(repo);
        let err = service.update_account(&account_dto("")).unwrap_err();

        assert_eq!(
            err,
            ServiceError::Remote {
                operation: "update account",
                identifier: "5740".to_string(),
                source: RepositoryError::Rejected("bad payload".to_string()),
            }
        );
    }
}
