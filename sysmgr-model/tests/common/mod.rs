#![allow(dead_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Timestamp, wire_enum};

wire_enum! {
    /// Severity of a finding.
    pub enum Severity {
        Critical = "CRITICAL",
        High = "HIGH",
        Low = "LOW",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct Target {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 1, max_len = 163)]
    key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(max_len = 50)]
    values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct Notification {
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_events: Option<Vec<Severity>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct Command {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, pattern = "^[a-zA-Z0-9_\\-.:/]{3,128}$")]
    document_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(max_len = 3)]
    instance_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(max_len = 5)]
    targets: Option<Vec<Target>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min = 30, max = 2592000)]
    timeout_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    requested_date_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification: Option<Notification>,
    #[serde(rename = "ARN", skip_serializing_if = "Option::is_none")]
    arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<i64>,
}

/// A command with every field present.
pub fn full_command() -> Command {
    let mut command = Command::default()
        .with_document_name("AWS-RunShellScript")
        .with_instance_ids(["i-1", "i-2"])
        .with_targets([Target::default()
            .with_key("tag:Env")
            .with_values(["prod"])])
        .with_timeout_seconds(3600)
        .with_requested_date_time(Timestamp::from_millis(1_700_000_000_250))
        .with_severity(Severity::High)
        .with_notification(Notification::default().with_notification_arn("arn:aws:sns:topic"))
        .with_arn("arn:aws:ssm:doc")
        .with_enabled(true)
        .with_size(1_i64 << 40);
    command
        .put_parameters_entry("commands", vec!["echo hi".to_string()])
        .expect("fresh map");
    command
}
