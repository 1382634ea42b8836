// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

use crate::types::Tag;

/// Creates a maintenance window.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateMaintenanceWindow;

impl Operation for CreateMaintenanceWindow {
    const NAME: &'static str = "CreateMaintenanceWindow";
    type Input = CreateMaintenanceWindowRequest;
    type Output = CreateMaintenanceWindowResult;
    type Error = CreateMaintenanceWindowError;
}

sysmgr_model::wire_enum! {
    /// Error codes CreateMaintenanceWindow is documented to return.
    pub enum CreateMaintenanceWindowError {
        IdempotentParameterMismatch = "IdempotentParameterMismatch",
        ResourceLimitExceeded = "ResourceLimitExceeded",
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMaintenanceWindowRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        required,
        min_len = 3,
        max_len = 128,
        pattern = "^[a-zA-Z0-9_\\-.]{3,128}$"
    )]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 1, max_len = 128)]
    description: Option<String>,
    /// Date the window becomes active, in ISO 8601 extended format.
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min_len = 1, max_len = 256)]
    schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule_timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min = 1, max = 6)]
    schedule_offset: Option<i32>,
    /// Length of the window in hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min = 1, max = 24)]
    duration: Option<i32>,
    /// Hours before the end of the window when new tasks stop being scheduled.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min = 0, max = 23)]
    cutoff: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required)]
    allow_unassociated_targets: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 1, max_len = 64)]
    client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 1000)]
    tags: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMaintenanceWindowResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 20, max_len = 20, pattern = "^mw-[0-9a-f]{17}$")]
    window_id: Option<String>,
}
