//! Support case operations.
use crate::domain::types::ValidationError;
use crate::dto::case::CaseDTO;
use crate::repository::CaseRepository;
use crate::services::{remote, ServiceResult};

/// Lookback window the relay endpoint historically pinned.
pub const DEFAULT_CASE_LOOKBACK_DAYS: u32 = 30;

/// Provides interaction with case data through a [`CaseRepository`].
pub struct CaseService<R> {
    repo: R,
}

impl<R: CaseRepository> CaseService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Cases opened for the site within the lookback window. The site id
    /// must be positive; the check runs before the remote call.
    pub fn get_cases_by_site_id(
        &self,
        site_id: i64,
        lookback_days: u32,
    ) -> ServiceResult<Vec<CaseDTO>> {
        if site_id <= 0 {
            return Err(ValidationError::NonPositiveSiteId(site_id).into());
        }

        self.repo
            .get_cases_by_site_id(site_id, lookback_days)
            .map_err(remote("get cases by site id", site_id.to_string()))
    }

    /// Cases from the default 30-day window.
    pub fn get_recent_cases(&self, site_id: i64) -> ServiceResult<Vec<CaseDTO>> {
        self.get_cases_by_site_id(site_id, DEFAULT_CASE_LOOKBACK_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::repository::mock::MockCaseRepo;
    use crate::services::ServiceError;

    #[test]
    fn passes_site_id_and_lookback_through() {
        let mut repo = MockCaseRepo::new();
        repo.expect_get_cases_by_site_id()
            .with(eq(5740), eq(90))
            .return_once(|_, _| Ok(vec![CaseDTO::default()]));

        let service = CaseService::new(repo);
        assert_eq!(service.get_cases_by_site_id(5740, 90).unwrap().len(), 1);
    }

    #[test]
    fn recent_cases_use_the_default_window() {
        let mut repo = MockCaseRepo::new();
        repo.expect_get_cases_by_site_id()
            .with(eq(5740), eq(DEFAULT_CASE_LOOKBACK_DAYS))
            .return_once(|_, _| Ok(Vec::new()));

        let service = CaseService::new(repo);
        assert!(service.get_recent_cases(5740).is_ok());
    }

    #[test]
    fn non_positive_site_id_fails_without_a_remote_call() {
        let service = CaseService::new(MockCaseRepo::new());

        assert_eq!(
            service.get_cases_by_site_id(0, 30),
            Err(ServiceError::Validation(
                ValidationError::NonPositiveSiteId(0)
            ))
        );
    }
}
