//! Account entity and its postal address blocks.
use serde::{Deserialize, Serialize};

use crate::domain::types::{BusinessUnit, ValidationError};

/// A postal address block. Plain value object with no validation of its own;
/// it is attached and detached as a unit by the conversion layer.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// A CRM account.
///
/// The validated core (`name`, `site_id`, `business_unit`) is private and
/// only reachable through the checked constructor and setters, so an
/// `Account` always satisfies its invariants: the name is non-empty, the
/// site id is positive once set, and the business unit is one of the closed
/// picklist values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    name: String,
    /// Zero means the site id has not been assigned yet.
    site_id: i64,
    business_unit: Option<BusinessUnit>,
    pub industry: String,
    pub payer: String,
    pub primary_address: Option<Address>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
}

impl Account {
    /// Creates an account with the required fields validated.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Self {
            name,
            site_id: 0,
            business_unit: None,
            industry: String::new(),
            payer: String::new(),
            primary_address: None,
            billing_address: None,
            shipping_address: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Updates the account name. Cannot be an empty string; the current
    /// name is kept on failure.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        self.name = name;
        Ok(())
    }

    /// The internal numeric site identifier, or zero when unassigned.
    pub fn site_id(&self) -> i64 {
        self.site_id
    }

    /// Updates the site id. Must be a positive integer; the current value
    /// is kept on failure.
    pub fn set_site_id(&mut self, site_id: i64) -> Result<(), ValidationError> {
        if site_id <= 0 {
            return Err(ValidationError::NonPositiveSiteId(site_id));
        }

        self.site_id = site_id;
        Ok(())
    }

    pub fn business_unit(&self) -> Option<BusinessUnit> {
        self.business_unit
    }

    /// Updates the business unit from its picklist token. Restricted to the
    /// closed [`BusinessUnit`] set; the current value is kept on failure.
    pub fn set_business_unit(&mut self, business_unit: &str) -> Result<(), ValidationError> {
        self.business_unit = Some(business_unit.parse()?);
        Ok(())
    }
}
