//! Client asset transfer object.
//!
//! Assets are a pure CRM projection; there is no asset entity to convert
//! to, so the DTO is the whole story.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dto::sfdc::{SfdcField, SfdcObject};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetDTO {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub product_line: String,
    #[serde(with = "crate::dto::date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub material_type: String,
}

impl SfdcObject for AssetDTO {
    const API_NAME: &'static str = "Client_Asset__c";
    const EXTERNAL_ID_FIELD: &'static str = "FI_Reference_ID__c";
    const FIELDS: &'static [SfdcField] = &[
        SfdcField { json: "productLine", column: "Product_Line__c" },
        SfdcField { json: "endDate", column: "End_Date__c" },
        SfdcField { json: "materialType", column: "Material_Type__c" },
    ];
}
