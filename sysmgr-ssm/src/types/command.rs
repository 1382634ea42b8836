// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Timestamp};

use crate::types::{CloudWatchOutputConfig, CommandStatus, NotificationConfig, Target};

/// A command request as tracked by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct Command {
    /// Unique identifier for this command.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 36, max_len = 36)]
    command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "^[a-zA-Z0-9_\\-.]{3,128}$")]
    document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "([$]LATEST|[$]DEFAULT|^[1-9][0-9]*$)")]
    document_version: Option<String>,
    /// User-specified information about the command.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 100)]
    comment: Option<String>,
    /// Point after which the command stops being sent to new targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_after: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 50)]
    instance_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 5)]
    targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    requested_date_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<CommandStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 100)]
    status_details: Option<String>,
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
    target_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery_timed_out_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_config: Option<NotificationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cloud_watch_output_config: Option<CloudWatchOutputConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min = 30, max = 2592000)]
    timeout_seconds: Option<i32>,
}
