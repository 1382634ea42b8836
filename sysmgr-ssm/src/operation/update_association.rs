// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

use crate::types::{
    AssociationComplianceSeverity, AssociationDescription, AssociationSyncCompliance,
    InstanceAssociationOutputLocation, Target,
};

/// Updates an association and creates a new version of it.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateAssociation;

impl Operation for UpdateAssociation {
    const NAME: &'static str = "UpdateAssociation";
    type Input = UpdateAssociationRequest;
    type Output = UpdateAssociationResult;
    type Error = UpdateAssociationError;
}

sysmgr_model::wire_enum! {
    /// Error codes UpdateAssociation is documented to return.
    pub enum UpdateAssociationError {
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
        InvalidSchedule = "InvalidSchedule",
        InvalidParameters = "InvalidParameters",
        InvalidOutputLocation = "InvalidOutputLocation",
        InvalidDocumentVersion = "InvalidDocumentVersion",
        /// The association does not exist.
        AssociationDoesNotExist = "AssociationDoesNotExist",
        InvalidUpdate = "InvalidUpdate",
        /// Too many updates were made to the resource at once.
        TooManyUpdates = "TooManyUpdates",
        /// The document does not exist, or its content is invalid.
        InvalidDocument = "InvalidDocument",
        InvalidTarget = "InvalidTarget",
        InvalidAssociationVersion = "InvalidAssociationVersion",
        AssociationVersionLimitExceeded = "AssociationVersionLimitExceeded",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateAssociationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        required,
        pattern = "[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}"
    )]
    association_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "([$]LATEST|[$]DEFAULT|^[1-9][0-9]*$)")]
    document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 1, max_len = 256)]
    schedule_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_location: Option<InstanceAssociationOutputLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "^[a-zA-Z0-9_\\-.:/]{3,128}$")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 5)]
    targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "^[a-zA-Z0-9_\\-.]{3,128}$")]
    association_name: Option<String>,
    /// Version to update; `$LATEST` or absent for the newest.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "([$]LATEST)|([1-9][0-9]*)")]
    association_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 1, max_len = 50)]
    automation_target_parameter_name: Option<String>,
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

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateAssociationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    association_description: Option<AssociationDescription>,
}
