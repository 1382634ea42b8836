// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Timestamp};

use crate::types::{
    AssociationComplianceSeverity, AssociationStatus, AssociationSyncCompliance,
    InstanceAssociationOutputLocation, Target,
};

/// Description of an association between a document and its targets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct AssociationDescription {
    /// Name of the SSM document.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "^[a-zA-Z0-9_\\-.:/]{3,128}$")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "(^i-(\\w{8}|\\w{17})$)|(^mi-\\w{17}$)")]
    instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "([$]LATEST)|([1-9][0-9]*)")]
    association_version: Option<String>,
    /// When the association was made.
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_update_association_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<AssociationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "([$]LATEST|[$]DEFAULT|^[1-9][0-9]*$)")]
    document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 1, max_len = 50)]
    automation_target_parameter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        pattern = "[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}"
    )]
    association_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 5)]
    targets: Option<Vec<Target>>,
    /// Cron expression that decides when the association runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 1, max_len = 256)]
    schedule_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_location: Option<InstanceAssociationOutputLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_execution_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_successful_execution_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "^[a-zA-Z0-9_\\-.]{3,128}$")]
    association_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        min_len = 1,
        max_len = 7,
        pattern = "^([1-9][0-9]*|[0]|[1-9][0-9]%|[0-9]%|100%)$"
    )]
    max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        min_len = 1,
        max_len = 7,
        pattern = "^([1-9][0-9]*|[1-9][0-9]%|[1-9]%|100%)$"
    )]
    max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compliance_severity: Option<AssociationComplianceSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sync_compliance: Option<AssociationSyncCompliance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    apply_only_at_cron_interval: Option<bool>,
}
