// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

use crate::types::{CloudWatchOutputConfig, Command, DocumentHashType, NotificationConfig, Target};

/// Runs commands on one or more managed instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct SendCommand;

impl Operation for SendCommand {
    const NAME: &'static str = "SendCommand";
    type Input = SendCommandRequest;
    type Output = SendCommandResult;
    type Error = SendCommandError;
}

sysmgr_model::wire_enum! {
    /// Error codes SendCommand is documented to return.
    pub enum SendCommandError {
        /// The same instance id was given more than once.
        DuplicateInstanceId = "DuplicateInstanceId",
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
        /// The instance is not valid, not running, or not registered with the service.
        InvalidInstanceId = "InvalidInstanceId",
        /// The document does not exist, or its content is invalid.
        InvalidDocument = "InvalidDocument",
        InvalidDocumentVersion = "InvalidDocumentVersion",
        InvalidOutputFolder = "InvalidOutputFolder",
        InvalidParameters = "InvalidParameters",
        UnsupportedPlatformType = "UnsupportedPlatformType",
        MaxDocumentSizeExceeded = "MaxDocumentSizeExceeded",
        InvalidRole = "InvalidRole",
        InvalidNotificationConfig = "InvalidNotificationConfig",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct SendCommandRequest {
    /// Instances to run on. Use `Targets` to select many instances at once.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 50)]
    instance_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 5)]
    targets: Option<Vec<Target>>,
    /// Name or ARN of the document to run.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, pattern = "^[a-zA-Z0-9_\\-.:/]{3,128}$")]
    document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "([$]LATEST|[$]DEFAULT|^[1-9][0-9]*$)")]
    document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 256)]
    document_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    document_hash_type: Option<DocumentHashType>,
    /// Seconds to wait for delivery before giving up.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min = 30, max = 2592000)]
    timeout_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 100)]
    comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 3, max_len = 20)]
    output_s3_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 3, max_len = 63)]
    output_s3_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 500)]
    output_s3_key_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        min_len = 1,
        max_len = 7,
        pattern = "^([1-9][0-9]*|[1-9][0-9]%|[1-9]%|100%)$"
    )]
    max_concurrency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        min_len = 1,
        max_len = 7,
        pattern = "^([1-9][0-9]*|[0]|[1-9][0-9]%|[0-9]%|100%)$"
    )]
    max_errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_config: Option<NotificationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cloud_watch_output_config: Option<CloudWatchOutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct SendCommandResult {
    /// The command that was sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<Command>,
}
