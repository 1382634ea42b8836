// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sysmgr_model::Entity;

use crate::types::{ComplianceSeverity, ComplianceStatus};

/// One compliance item reported for a resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct ComplianceItemEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 100)]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 500)]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required)]
    severity: Option<ComplianceSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required)]
    status: Option<ComplianceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<BTreeMap<String, String>>,
}
