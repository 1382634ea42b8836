// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::Entity;

use crate::types::{NotificationEvent, NotificationType};

/// Configures command status notifications.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationConfig {
    /// Topic that receives status notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_events: Option<Vec<NotificationEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_type: Option<NotificationType>,
}
