//! Contact entity, its structured name and role records.
use serde::{Deserialize, Serialize};

use crate::domain::account::Account;
use crate::domain::types::{Currency, ValidationError};

/// Structured person name. The last name is the only mandatory part.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactName {
    salutation: String,
    first_name: String,
    last_name: String,
}

impl ContactName {
    pub fn new(
        salutation: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let last_name = last_name.into();
        if last_name.is_empty() {
            return Err(ValidationError::EmptyLastName);
        }

        Ok(Self {
            salutation: salutation.into(),
            first_name: first_name.into(),
            last_name,
        })
    }

    pub fn salutation(&self) -> &str {
        &self.salutation
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

/// A role a contact holds with respect to its account. No validation and no
/// uniqueness constraint; the CRM treats these as free-form triples.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRole {
    pub role_type: String,
    pub role_name: String,
    pub role_status: String,
}

/// A CRM contact.
///
/// A contact cannot exist without a structured name, an account and a
/// currency preference, so those are taken by value at construction and the
/// types themselves carry the validation (`ContactName` rejects a blank
/// last name, `Currency` is a closed picklist). The remaining scalar fields
/// are unvalidated CRM strings. The account is shared state looked up
/// independently; the contact holds its own snapshot of it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    name: ContactName,
    account: Account,
    currency: Currency,
    roles: Vec<ContactRole>,
    pub sfdc_id: String,
    pub email: String,
    pub phone: String,
    pub fax: String,
    pub title: String,
    pub status: String,
    pub default_account: String,
    pub auth_id: String,
    pub auth_email: String,
    pub auth_first_name: String,
    pub auth_last_name: String,
}

impl Contact {
    pub fn new(name: ContactName, account: Account, currency: Currency) -> Self {
        Self {
            name,
            account,
            currency,
            roles: Vec::new(),
            sfdc_id: String::new(),
            email: String::new(),
            phone: String::new(),
            fax: String::new(),
            title: String::new(),
            status: String::new(),
            default_account: String::new(),
            auth_id: String::new(),
            auth_email: String::new(),
            auth_first_name: String::new(),
            auth_last_name: String::new(),
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Role records in insertion order.
    pub fn roles(&self) -> &[ContactRole] {
        &self.roles
    }

    pub fn set_roles(&mut self, roles: Vec<ContactRole>) {
        self.roles = roles;
    }

    pub fn add_role(&mut self, role: ContactRole) {
        self.roles.push(role);
    }
}
