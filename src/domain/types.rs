//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (closed picklist membership,
//! record-id shape) so that once a value reaches the domain layer it can be
//! treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when an entity invariant fails during construction or
/// mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Account name contained no characters.
    #[error("account name cannot be blank")]
    EmptyName,
    /// Site identifier was zero or negative.
    #[error("site id must be greater than 0, got {0}")]
    NonPositiveSiteId(i64),
    /// Business unit was outside the closed picklist.
    #[error("invalid business unit: {0}")]
    InvalidBusinessUnit(String),
    /// Contact last name contained no characters.
    #[error("contact last name cannot be blank")]
    EmptyLastName,
    /// Currency value was empty.
    #[error("currency cannot be blank")]
    EmptyCurrency,
    /// Currency value was outside the closed picklist.
    #[error("invalid currency: {0}")]
    InvalidCurrency(String),
}

/// Business unit an account belongs to. Closed picklist; any other value is
/// rejected at the boundary, including case variants.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BusinessUnit {
    Gmbu,
    Ecbu,
    Ibu,
}

impl BusinessUnit {
    pub const fn as_str(self) -> &'static str {
        match self {
            BusinessUnit::Gmbu => "GMBU",
            BusinessUnit::Ecbu => "ECBU",
            BusinessUnit::Ibu => "IBU",
        }
    }
}

impl Display for BusinessUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BusinessUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GMBU" => Ok(BusinessUnit::Gmbu),
            "ECBU" => Ok(BusinessUnit::Ecbu),
            "IBU" => Ok(BusinessUnit::Ibu),
            other => Err(ValidationError::InvalidBusinessUnit(other.to_string())),
        }
    }
}

/// Currency preference of a contact. The CRM stores these as labelled
/// picklist values ("USD - U.S. Dollar"); the bare ISO code is accepted on
/// parse as well.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Cad,
    Eur,
    Gbp,
    Aud,
    Jpy,
}

impl Currency {
    /// The full picklist label as the CRM renders it.
    pub const fn as_str(self) -> &'static str {
        match self {
            Currency::Usd => "USD - U.S. Dollar",
            Currency::Cad => "CAD - Canadian Dollar",
            Currency::Eur => "EUR - Euro",
            Currency::Gbp => "GBP - British Pound",
            Currency::Aud => "AUD - Australian Dollar",
            Currency::Jpy => "JPY - Japanese Yen",
        }
    }

    /// The bare ISO 4217 code.
    pub const fn iso_code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Cad => "CAD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Aud => "AUD",
            Currency::Jpy => "JPY",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::EmptyCurrency);
        }

        const ALL: [Currency; 6] = [
            Currency::Usd,
            Currency::Cad,
            Currency::Eur,
            Currency::Gbp,
            Currency::Aud,
            Currency::Jpy,
        ];

        ALL.iter()
            .copied()
            .find(|c| s == c.as_str() || s == c.iso_code())
            .ok_or_else(|| ValidationError::InvalidCurrency(s.to_string()))
    }
}

/// Whether a string has the shape of a native CRM record identifier, which
/// is always exactly 15 or 18 characters.
pub fn is_record_id(id: &str) -> bool {
    id.len() == 15 || id.len() == 18
}
