// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Timestamp};

use crate::types::CommandPluginStatus;

/// Result of one plugin of a command invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct CommandPlugin {
    /// Plugin name, such as `aws:runShellScript`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 4)]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<CommandPluginStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 100)]
    status_details: Option<String>,
    /// Numeric code the plugin returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    response_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_start_date_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_finish_date_time: Option<Timestamp>,
    /// First 2,500 characters the plugin wrote to stdout.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 2500)]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    standard_output_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    standard_error_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 3, max_len = 20)]
    output_s3_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 3, max_len = 63)]
    output_s3_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 500)]
    output_s3_key_prefix: Option<String>,
}
