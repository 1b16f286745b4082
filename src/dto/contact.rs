//! Contact transfer object, its role sub-objects and entity conversions.
use serde::{Deserialize, Serialize};

use crate::domain::account::Account;
use crate::domain::contact::{Contact, ContactName, ContactRole};
use crate::domain::types::Currency;
use crate::dto::account::AccountDTO;
use crate::dto::sfdc::{SfdcField, SfdcObject};
use crate::dto::ConversionError;

/// Flat transfer object for [`Contact`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDTO {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub salutation: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(rename = "salesForceID", skip_serializing_if = "String::is_empty")]
    pub sales_force_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fax: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Box<AccountDTO>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_roles: Option<ContactRolesWrapper>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub default_account: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(rename = "currency", skip_serializing_if = "String::is_empty")]
    pub currency: String,
    #[serde(rename = "bbAuthId", skip_serializing_if = "String::is_empty")]
    pub auth_id: String,
    #[serde(rename = "bbAuthEmail", skip_serializing_if = "String::is_empty")]
    pub auth_email: String,
    #[serde(rename = "bbAuthFirstName", skip_serializing_if = "String::is_empty")]
    pub auth_first_name: String,
    #[serde(rename = "bbAuthLastName", skip_serializing_if = "String::is_empty")]
    pub auth_last_name: String,
}

/// Wraps the role records so the CRM's nested query response shape
/// (`{"records": [...]}`) has somewhere to land.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRolesWrapper {
    #[serde(default)]
    pub roles: Vec<ContactRoleDTO>,
}

/// Transfer object for a single contact role.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRoleDTO {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub role_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub role_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub role_status: String,
}

impl SfdcObject for ContactDTO {
    const API_NAME: &'static str = "Contact";
    const EXTERNAL_ID_FIELD: &'static str = "eBus_Contact_ID__c";
    // The embedded account and role list are relations, not columns.
    const FIELDS: &'static [SfdcField] = &[
        SfdcField { json: "salutation", column: "Salutation" },
        SfdcField { json: "firstName", column: "FirstName" },
        SfdcField { json: "lastName", column: "LastName" },
        SfdcField { json: "salesForceID", column: "Id" },
        SfdcField { json: "email", column: "Email" },
        SfdcField { json: "phone", column: "Phone" },
        SfdcField { json: "fax", column: "Fax" },
        SfdcField { json: "title", column: "Title" },
        SfdcField { json: "defaultAccount", column: "Default_Account__c" },
        SfdcField { json: "status", column: "SFDC_Contact_Status__c" },
        SfdcField { json: "currency", column: "CurrencyIsoCode" },
        SfdcField { json: "bbAuthId", column: "BBAuthID__c" },
        SfdcField { json: "bbAuthEmail", column: "BBAuth_Email__c" },
        SfdcField { json: "bbAuthFirstName", column: "BBAuth_First_Name__c" },
        SfdcField { json: "bbAuthLastName", column: "BBAuth_Last_Name__c" },
    ];
}

impl From<&ContactRoleDTO> for ContactRole {
    fn from(dto: &ContactRoleDTO) -> Self {
        ContactRole {
            role_type: dto.role_type.clone(),
            role_name: dto.role_name.clone(),
            role_status: dto.role_status.clone(),
        }
    }
}

impl From<&ContactRole> for ContactRoleDTO {
    fn from(role: &ContactRole) -> Self {
        ContactRoleDTO {
            role_type: role.role_type.clone(),
            role_name: role.role_name.clone(),
            role_status: role.role_status.clone(),
        }
    }
}

impl TryFrom<&ContactDTO> for Contact {
    type Error = ConversionError;

    fn try_from(dto: &ContactDTO) -> Result<Self, Self::Error> {
        // checked before any embedded conversion so a missing account is
        // distinguishable from an account that failed validation
        let account_dto = dto.account.as_deref().ok_or(ConversionError::MissingAccount)?;

        let account = Account::try_from(account_dto)
            .map_err(|err| ConversionError::EmbeddedAccount(Box::new(err)))?;

        let name = ContactName::new(
            dto.salutation.clone(),
            dto.first_name.clone(),
            dto.last_name.clone(),
        )?;

        let currency: Currency = dto.currency.parse()?;

        let mut contact = Contact::new(name, account, currency);
        contact.sfdc_id = dto.sales_force_id.clone();
        contact.email = dto.email.clone();
        contact.phone = dto.phone.clone();
        contact.fax = dto.fax.clone();
        contact.title = dto.title.clone();
        contact.status = dto.status.clone();
        contact.default_account = dto.default_account.clone();
        contact.auth_id = dto.auth_id.clone();
        contact.auth_email = dto.auth_email.clone();
        contact.auth_first_name = dto.auth_first_name.clone();
        contact.auth_last_name = dto.auth_last_name.clone();

        if let Some(wrapper) = &dto.contact_roles {
            contact.set_roles(wrapper.roles.iter().map(ContactRole::from).collect());
        }

        Ok(contact)
    }
}

impl From<&Contact> for ContactDTO {
    fn from(contact: &Contact) -> Self {
        ContactDTO {
            salutation: contact.name().salutation().to_string(),
            first_name: contact.name().first_name().to_string(),
            last_name: contact.name().last_name().to_string(),
            sales_force_id: contact.sfdc_id.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            fax: contact.fax.clone(),
            title: contact.title.clone(),
            account: Some(Box::new(AccountDTO::from(contact.account()))),
            // always a collection, empty rather than absent
            contact_roles: Some(ContactRolesWrapper {
                roles: contact.roles().iter().map(ContactRoleDTO::from).collect(),
            }),
            default_account: contact.default_account.clone(),
            status: contact.status.clone(),
            currency: contact.currency().as_str().to_string(),
            auth_id: contact.auth_id.clone(),
            auth_email: contact.auth_email.clone(),
            auth_first_name: contact.auth_first_name.clone(),
            auth_last_name: contact.auth_last_name.clone(),
        }
    }
}
