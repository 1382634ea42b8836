// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Timestamp};

use crate::types::AssociationStatusName;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct AssociationStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required)]
    date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required)]
    name: Option<AssociationStatusName>,
    /// Reason for the status.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min_len = 0, max_len = 1024)]
    message: Option<String>,
    /// User-defined details about the status.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 1024)]
    additional_info: Option<String>,
}
