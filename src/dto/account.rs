//! Account transfer object and its entity conversions.
use serde::{Deserialize, Serialize};

use crate::domain::account::{Account, Address};
use crate::dto::sfdc::{SfdcField, SfdcObject};
use crate::dto::ConversionError;

/// Flat transfer object for [`Account`].
///
/// Field names are a wire contract; renames here must stay in sync with the
/// CRM column table below and with existing JSON clients.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountDTO {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "salesForceID", skip_serializing_if = "String::is_empty")]
    pub sales_force_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub site_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub business_unit: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub industry: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payer: String,
    /// Denormalized contact count, attached by the account service after a
    /// fetch. Never part of the entity state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_count: Option<u32>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub primary_street: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub primary_city: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub primary_state: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub primary_zip_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub primary_country: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub billing_street: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub billing_city: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub billing_state: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub billing_zip_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub billing_country: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub shipping_street: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub shipping_city: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub shipping_state: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub shipping_zip_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub shipping_country: String,
}

impl SfdcObject for AccountDTO {
    const API_NAME: &'static str = "Account";
    const EXTERNAL_ID_FIELD: &'static str = "Clarify_Site_ID__c";
    // The primary address block and the contact count have no CRM columns.
    const FIELDS: &'static [SfdcField] = &[
        SfdcField { json: "name", column: "Name" },
        SfdcField { json: "salesForceID", column: "Id" },
        SfdcField { json: "siteId", column: "Clarify_Site_ID__c" },
        SfdcField { json: "businessUnit", column: "Business_Unit__c" },
        SfdcField { json: "industry", column: "Industry" },
        SfdcField { json: "payer", column: "Payer__c" },
        SfdcField { json: "billingStreet", column: "Billing_Street__c" },
        SfdcField { json: "billingCity", column: "Billing_City__c" },
        SfdcField { json: "billingState", column: "Billing_State_Province__c" },
        SfdcField { json: "billingZipCode", column: "Billing_Zip_Postal_Code__c" },
        SfdcField { json: "billingCountry", column: "Billing_Country__c" },
        SfdcField { json: "shippingStreet", column: "Physical_Street__c" },
        SfdcField { json: "shippingCity", column: "Physical_City__c" },
        SfdcField { json: "shippingState", column: "Physical_State_Province__c" },
        SfdcField { json: "shippingZipCode", column: "Physical_Zip_Postal_Code__c" },
        SfdcField { json: "shippingCountry", column: "Physical_Country__c" },
    ];
}

/// An address block is present when any of its five fields carries a value;
/// it is then attached whole, empty sub-fields included.
fn address_block(
    street: &str,
    city: &str,
    state: &str,
    zip_code: &str,
    country: &str,
) -> Option<Address> {
    if street.is_empty()
        && city.is_empty()
        && state.is_empty()
        && zip_code.is_empty()
        && country.is_empty()
    {
        return None;
    }

    Some(Address {
        street: street.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip_code: zip_code.to_string(),
        country: country.to_string(),
    })
}

impl TryFrom<&AccountDTO> for Account {
    type Error = ConversionError;

    fn try_from(dto: &AccountDTO) -> Result<Self, Self::Error> {
        let mut account = Account::new(dto.name.clone())?;

        account.industry = dto.industry.clone();
        account.payer = dto.payer.clone();

        if !dto.site_id.is_empty() {
            let site_id: i64 =
                dto.site_id
                    .parse()
                    .map_err(|_| ConversionError::InvalidSiteId {
                        value: dto.site_id.clone(),
                    })?;
            account.set_site_id(site_id)?;
        }

        if !dto.business_unit.is_empty() {
            account.set_business_unit(&dto.business_unit)?;
        }

        account.primary_address = address_block(
            &dto.primary_street,
            &dto.primary_city,
            &dto.primary_state,
            &dto.primary_zip_code,
            &dto.primary_country,
        );
        account.billing_address = address_block(
            &dto.billing_street,
            &dto.billing_city,
            &dto.billing_state,
            &dto.billing_zip_code,
            &dto.billing_country,
        );
        account.shipping_address = address_block(
            &dto.shipping_street,
            &dto.shipping_city,
            &dto.shipping_state,
            &dto.shipping_zip_code,
            &dto.shipping_country,
        );

        Ok(account)
    }
}

impl From<&Account> for AccountDTO {
    fn from(account: &Account) -> Self {
        let mut dto = AccountDTO {
            name: account.name().to_string(),
            // renders "0" for a freshly constructed account with no site id
            site_id: account.site_id().to_string(),
            business_unit: account
                .business_unit()
                .map(|bu| bu.as_str().to_string())
                .unwrap_or_default(),
            industry: account.industry.clone(),
            payer: account.payer.clone(),
            ..AccountDTO::default()
        };

        if let Some(address) = &account.primary_address {
            dto.primary_street = address.street.clone();
            dto.primary_city = address.city.clone();
            dto.primary_state = address.state.clone();
            dto.primary_zip_code = address.zip_code.clone();
            dto.primary_country = address.country.clone();
        }

        if let Some(address) = &account.billing_address {
            dto.billing_street = address.street.clone();
            dto.billing_city = address.city.clone();
            dto.billing_state = address.state.clone();
            dto.billing_zip_code = address.zip_code.clone();
            dto.billing_country = address.country.clone();
        }

        if let Some(address) = &account.shipping_address {
            dto.shipping_street = address.street.clone();
            dto.shipping_city = address.city.clone();
            dto.shipping_state = address.state.clone();
            dto.shipping_zip_code = address.zip_code.clone();
            dto.shipping_country = address.country.clone();
        }

        dto
    }
}
