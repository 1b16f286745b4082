//! Support case transfer object.
//!
//! Cases come back from the message-relay service; the XML envelope
//! unmarshalling happens in the relay adapter, outside this crate.
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseDTO {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub date_added: String,
    #[serde(rename = "notes", skip_serializing_if = "String::is_empty")]
    pub web_notes: String,
}
