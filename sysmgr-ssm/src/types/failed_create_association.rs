// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::Entity;

use crate::types::{CreateAssociationBatchRequestEntry, Fault};

/// An association that could not be created.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct FailedCreateAssociation {
    #[serde(skip_serializing_if = "Option::is_none")]
    entry: Option<CreateAssociationBatchRequestEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fault: Option<Fault>,
}
