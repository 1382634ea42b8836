// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Timestamp};

use crate::types::{
    CloudWatchOutputConfig, CommandInvocationStatus, CommandPlugin, NotificationConfig,
};

/// A copy of a command sent to one instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct CommandInvocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 36, max_len = 36)]
    command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "(^i-(\\w{8}|\\w{17})$)|(^mi-\\w{17}$)")]
    instance_id: Option<String>,
    /// Value of the instance's `Name` tag, when it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 255)]
    instance_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 100)]
    comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "^[a-zA-Z0-9_\\-.]{3,128}$")]
    document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "([$]LATEST|[$]DEFAULT|^[1-9][0-9]*$)")]
    document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    requested_date_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<CommandInvocationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 100)]
    status_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 2500)]
    trace_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    standard_output_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    standard_error_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    command_plugins: Option<Vec<CommandPlugin>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_config: Option<NotificationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cloud_watch_output_config: Option<CloudWatchOutputConfig>,
}
