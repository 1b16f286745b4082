//! FTP credential operations.
use crate::dto::ftp::FtpCredentialsDTO;
use crate::repository::FtpRepository;
use crate::services::{remote, ServiceResult};
use crate::soql::ensure_email_format;

/// Provides interaction with FTP credentials through an [`FtpRepository`].
pub struct FtpService<R> {
    repo: R,
}

impl<R: FtpRepository> FtpService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Retrieves the FTP credentials for the user identified by email. The
    /// email shape is checked before the relay is called.
    pub fn get_ftp_credentials(&self, email: &str) -> ServiceResult<FtpCredentialsDTO> {
        ensure_email_format(email)?;

        self.repo
            .get_ftp_credentials(email)
            .map_err(remote("get ftp credentials", email))
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::lookup::IdentifierError;
    use crate::repository::mock::MockFtpRepo;
    use crate::services::ServiceError;

    #[test]
    fn fetches_credentials_for_a_valid_email() {
        let mut repo = MockFtpRepo::new();
        repo.expect_get_ftp_credentials()
            .with(eq("user@example.com"))
            .return_once(|_| {
                Ok(FtpCredentialsDTO {
                    user_name: "acme_ftp".to_string(),
                    password: "hunter2".to_string(),
                })
            });

        let service = FtpService::new(repo);
        let creds = service.get_ftp_credentials("user@example.com").unwrap();

        assert_eq!(creds.user_name, "acme_ftp");
    }

    #[test]
    fn malformed_email_fails_without_a_remote_call() {
        let service = FtpService::new(MockFtpRepo::new());

        assert_eq!(
            service.get_ftp_credentials("not-an-email"),
            Err(ServiceError::Identifier(IdentifierError::MalformedEmail(
                "not-an-email".to_string()
            )))
        );
    }
}
