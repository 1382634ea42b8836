// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

use crate::types::{
    AssociationDescription, CreateAssociationBatchRequestEntry, FailedCreateAssociation,
};

/// Associates documents with managed instances in one request.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateAssociationBatch;

impl Operation for CreateAssociationBatch {
    const NAME: &'static str = "CreateAssociationBatch";
    type Input = CreateAssociationBatchRequest;
    type Output = CreateAssociationBatchResult;
    type Error = CreateAssociationBatchError;
}

sysmgr_model::wire_enum! {
    /// Error codes CreateAssociationBatch is documented to return.
    pub enum CreateAssociationBatchError {
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
        /// The document does not exist, or its content is invalid.
        InvalidDocument = "InvalidDocument",
        InvalidDocumentVersion = "InvalidDocumentVersion",
        /// The instance is not valid, not running, or not registered with the service.
        InvalidInstanceId = "InvalidInstanceId",
        InvalidParameters = "InvalidParameters",
        /// The same instance id was given more than once.
        DuplicateInstanceId = "DuplicateInstanceId",
        AssociationLimitExceeded = "AssociationLimitExceeded",
        UnsupportedPlatformType = "UnsupportedPlatformType",
        InvalidOutputLocation = "InvalidOutputLocation",
        InvalidTarget = "InvalidTarget",
        InvalidSchedule = "InvalidSchedule",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAssociationBatchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min_len = 1)]
    entries: Option<Vec<CreateAssociationBatchRequestEntry>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAssociationBatchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    successful: Option<Vec<AssociationDescription>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failed: Option<Vec<FailedCreateAssociation>>,
}
