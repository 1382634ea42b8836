// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

/// Deletes an activation code and id.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteActivation;

impl Operation for DeleteActivation {
    const NAME: &'static str = "DeleteActivation";
    type Input = DeleteActivationRequest;
    type Output = DeleteActivationResult;
    type Error = DeleteActivationError;
}

sysmgr_model::wire_enum! {
    /// Error codes DeleteActivation is documented to return.
    pub enum DeleteActivationError {
        InvalidActivationId = "InvalidActivationId",
        InvalidActivation = "InvalidActivation",
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
        /// Too many updates were made to the resource at once.
        TooManyUpdates = "TooManyUpdates",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteActivationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        required,
        pattern = "^[0-9a-z]{8}-[0-9a-z]{4}-[0-9a-z]{4}-[0-9a-z]{4}-[0-9a-z]{12}$"
    )]
    activation_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteActivationResult {}
