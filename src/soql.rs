//! Construction of queries in the CRM's query language.
//!
//! Projections are derived from the [`SfdcObject`] field tables so the
//! query layer and the DTO mapping cannot drift apart. Inputs that gate a
//! query (auth token, email, id batch) are shape-checked before any string
//! is assembled; identifiers themselves are caller-trusted and interpolated
//! without escaping, matching the upstream CRM contract.

use std::sync::LazyLock;

use regex::Regex;

use crate::dto::account::AccountDTO;
use crate::dto::asset::AssetDTO;
use crate::dto::contact::ContactDTO;
use crate::dto::sfdc::SfdcObject;
use crate::lookup::IdentifierError;

/// Auth tokens group as 8-4-4-4-12 hex-like characters.
static AUTH_ID_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}$")
        .expect("auth id pattern is valid")
});

/// Minimal shape check: something non-empty on both sides of an `@`.
static EMAIL_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+@.+").expect("email pattern is valid"));

/// The contact projection selects every mapped contact column plus the
/// embedded account's columns through the `Account.` relation.
fn contact_projection() -> String {
    let mut columns: Vec<String> = ContactDTO::columns()
        .into_iter()
        .map(str::to_string)
        .collect();
    columns.extend(AccountDTO::columns().into_iter().map(|c| format!("Account.{c}")));
    columns.join(", ")
}

/// Builds the query selecting contacts carrying the given auth token.
pub fn contacts_by_auth_id(auth_id: &str) -> Result<String, IdentifierError> {
    if !AUTH_ID_FORMAT.is_match(auth_id) {
        return Err(IdentifierError::MalformedAuthId(auth_id.to_string()));
    }

    Ok(format!(
        "SELECT {} FROM {} WHERE BBAuthID__c = '{}'",
        contact_projection(),
        ContactDTO::API_NAME,
        auth_id
    ))
}

/// Checks the email shape used by the query builders and the FTP lookup.
pub fn ensure_email_format(email: &str) -> Result<(), IdentifierError> {
    if EMAIL_FORMAT.is_match(email) {
        Ok(())
    } else {
        Err(IdentifierError::MalformedEmail(email.to_string()))
    }
}

/// Builds the query selecting contacts carrying the given auth email.
pub fn contacts_by_email(email: &str) -> Result<String, IdentifierError> {
    ensure_email_format(email)?;

    Ok(format!(
        "SELECT {} FROM {} WHERE BBAuth_Email__c = '{}'",
        contact_projection(),
        ContactDTO::API_NAME,
        email
    ))
}

/// Builds the query selecting contacts whose record id is in the given
/// batch. Ids keep their input order, are not deduplicated and are not
/// escaped.
pub fn contacts_by_ids(ids: &[String]) -> Result<String, IdentifierError> {
    if ids.is_empty() {
        return Err(IdentifierError::EmptyIdList);
    }

    let id_list = ids
        .iter()
        .map(|id| format!("'{id}'"))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!(
        "SELECT {} FROM {} WHERE Id IN ({})",
        contact_projection(),
        ContactDTO::API_NAME,
        id_list
    ))
}

/// Builds the query selecting the assets attached to an account.
pub fn assets_by_account_id(account_id: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE Account__r.Id = '{}'",
        AssetDTO::columns().join(", "),
        AssetDTO::API_NAME,
        account_id
    )
}

/// Builds the count-style query backing the contact-count enrichment.
pub fn contact_count_by_account(account_id: &str) -> String {
    format!(
        "SELECT count() FROM {} WHERE AccountId = '{}'",
        ContactDTO::API_NAME,
        account_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_id_query_requires_token_format() {
        let query = contacts_by_auth_id("32FBC72D-C0FE-4B50-B0F4-EDCEFD7B4DEF").unwrap();
        assert!(query.starts_with("SELECT "));
        assert!(query.ends_with("WHERE BBAuthID__c = '32FBC72D-C0FE-4B50-B0F4-EDCEFD7B4DEF'"));
        assert!(query.contains("FROM Contact"));

        for bad in [
            "",
            "32FBC72D",
            "32FBC72D-C0FE-4B50-B0F4",
            "ZZZZZZZZ-C0FE-4B50-B0F4-EDCEFD7B4DEF",
            "32FBC72D-C0FE-4B50-B0F4-EDCEFD7B4DEF-EXTRA",
        ] {
            assert_eq!(
                contacts_by_auth_id(bad),
                Err(IdentifierError::MalformedAuthId(bad.to_string()))
            );
        }
    }

    #[test]
    fn email_query_requires_an_at_sign_with_content() {
        let query = contacts_by_email("erik.tate@example.com").unwrap();
        assert!(query.ends_with("WHERE BBAuth_Email__c = 'erik.tate@example.com'"));

        for bad in ["", "plainaddress", "@example.com", "user@"] {
            assert_eq!(
                contacts_by_email(bad),
                Err(IdentifierError::MalformedEmail(bad.to_string()))
            );
        }
    }

    #[test]
    fn id_batch_renders_quoted_literal_list_in_order() {
        let query = contacts_by_ids(&["a".to_string(), "b".to_string()]).unwrap();
        assert!(query.contains("('a', 'b')"));

        // no deduplication
        let query = contacts_by_ids(&["x".to_string(), "x".to_string()]).unwrap();
        assert!(query.contains("('x', 'x')"));

        assert_eq!(contacts_by_ids(&[]), Err(IdentifierError::EmptyIdList));
    }

    #[test]
    fn contact_projection_reaches_through_the_account_relation() {
        let query = contacts_by_email("a@b").unwrap();
        assert!(query.contains("Salutation"));
        assert!(query.contains("CurrencyIsoCode"));
        assert!(query.contains("BBAuth_Last_Name__c"));
        assert!(query.contains("Account.Clarify_Site_ID__c"));
        assert!(query.contains("Account.Physical_Country__c"));
    }

    #[test]
    fn asset_query_selects_mapped_columns() {
        assert_eq!(
            assets_by_account_id("001d000001TweFmAAJ"),
            "SELECT Product_Line__c, End_Date__c, Material_Type__c \
             FROM Client_Asset__c WHERE Account__r.Id = '001d000001TweFmAAJ'"
        );
    }

    #[test]
    fn contact_count_query_is_a_count_projection() {
        assert_eq!(
            contact_count_by_account("001d000001TwgVCAAZ"),
            "SELECT count() FROM Contact WHERE AccountId = '001d000001TwgVCAAZ'"
        );
    }
}
