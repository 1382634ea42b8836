// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::Entity;

/// Configuration for sending command output to CloudWatch Logs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct CloudWatchOutputConfig {
    /// Log group that receives command output.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 1, max_len = 512, pattern = "[\\.\\-_/#A-Za-z0-9]+")]
    cloud_watch_log_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cloud_watch_output_enabled: Option<bool>,
}
