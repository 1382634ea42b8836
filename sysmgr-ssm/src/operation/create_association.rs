// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

use crate::types::{
    AssociationComplianceSeverity, AssociationDescription, AssociationSyncCompliance,
    InstanceAssociationOutputLocation, Target,
};

/// Associates a document with managed instances or targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateAssociation;

impl Operation for CreateAssociation {
    const NAME: &'static str = "CreateAssociation";
    type Input = CreateAssociationRequest;
    type Output = CreateAssociationResult;
    type Error = CreateAssociationError;
}

sysmgr_model::wire_enum! {
    /// Error codes CreateAssociation is documented to return.
    pub enum CreateAssociationError {
        AssociationAlreadyExists = "AssociationAlreadyExists",
        AssociationLimitExceeded = "AssociationLimitExceeded",
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
        /// The document does not exist, or its content is invalid.
        InvalidDocument = "InvalidDocument",
        InvalidDocumentVersion = "InvalidDocumentVersion",
        /// The instance is not valid, not running, or not registered with the service.
        InvalidInstanceId = "InvalidInstanceId",
        UnsupportedPlatformType = "UnsupportedPlatformType",
        InvalidOutputLocation = "InvalidOutputLocation",
        InvalidParameters = "InvalidParameters",
        InvalidTarget = "InvalidTarget",
        InvalidSchedule = "InvalidSchedule",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAssociationRequest {
    /// Name of the document to associate.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, pattern = "^[a-zA-Z0-9_\\-.:/]{3,128}$")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "([$]LATEST|[$]DEFAULT|^[1-9][0-9]*$)")]
    document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "(^i-(\\w{8}|\\w{17})$)|(^mi-\\w{17}$)")]
    instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 5)]
    targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 1, max_len = 256)]
    schedule_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_location: Option<InstanceAssociationOutputLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "^[a-zA-Z0-9_\\-.]{3,128}$")]
    association_name: Option<String>,
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
pub struct CreateAssociationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    association_description: Option<AssociationDescription>,
}
