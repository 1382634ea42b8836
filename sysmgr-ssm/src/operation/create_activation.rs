// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation, Timestamp};

use crate::types::Tag;

/// Generates an activation code and id for registering on-premises machines.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateActivation;

impl Operation for CreateActivation {
    const NAME: &'static str = "CreateActivation";
    type Input = CreateActivationRequest;
    type Output = CreateActivationResult;
    type Error = CreateActivationError;
}

sysmgr_model::wire_enum! {
    /// Error codes CreateActivation is documented to return.
    pub enum CreateActivationError {
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct CreateActivationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 256)]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        min_len = 0,
        max_len = 256,
        pattern = "^([\\p{L}\\p{Z}\\p{N}_.:/=+\\-@]*)$"
    )]
    default_instance_name: Option<String>,
    /// Role the managed instances assume.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min_len = 0, max_len = 64)]
    iam_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min = 1, max = 1000)]
    registration_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiration_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 1000)]
    tags: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct CreateActivationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        pattern = "^[0-9a-z]{8}-[0-9a-z]{4}-[0-9a-z]{4}-[0-9a-z]{4}-[0-9a-z]{12}$"
    )]
    activation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 20, max_len = 250)]
    activation_code: Option<String>,
}
