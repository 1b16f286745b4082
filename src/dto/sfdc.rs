//! The CRM-side field mapping scheme.
//!
//! Every DTO that maps onto a CRM object declares its object name, its
//! external-id column and the pairing between JSON fields and CRM columns.
//! The query builders in [`crate::soql`] derive their projections from
//! these tables, so the two serializations cannot drift apart silently.

/// One JSON field paired with the CRM column it maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SfdcField {
    pub json: &'static str,
    pub column: &'static str,
}

/// Implemented by DTOs that correspond to a queryable CRM object.
///
/// Fields with no CRM column (computed enrichments, relation sub-objects,
/// blocks the CRM does not expose) are simply not listed.
pub trait SfdcObject {
    /// CRM object name, e.g. `"Account"`.
    const API_NAME: &'static str;
    /// Column used for lookups by external (non-record) identifier.
    const EXTERNAL_ID_FIELD: &'static str;
    /// JSON-field-to-column pairs, in projection order.
    const FIELDS: &'static [SfdcField];

    /// The CRM columns of this object, in declaration order.
    fn columns() -> Vec<&'static str> {
        Self::FIELDS.iter().map(|f| f.column).collect()
    }

    /// Looks up the CRM column backing a JSON field, if it has one.
    fn column_for(json: &str) -> Option<&'static str> {
        Self::FIELDS
            .iter()
            .find(|f| f.json == json)
            .map(|f| f.column)
    }
}
