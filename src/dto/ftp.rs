//! FTP credentials transfer object returned by the message-relay service.
use serde::{Deserialize, Serialize};

/// Credentials are always rendered whole; an empty user name is meaningful
/// to clients, so no fields are omitted.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FtpCredentialsDTO {
    #[serde(rename = "ftpUserName")]
    pub user_name: String,
    #[serde(rename = "ftpPassword")]
    pub password: String,
}
