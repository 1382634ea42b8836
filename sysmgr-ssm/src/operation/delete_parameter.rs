// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

/// Deletes a parameter from Parameter Store.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteParameter;

impl Operation for DeleteParameter {
    const NAME: &'static str = "DeleteParameter";
    type Input = DeleteParameterRequest;
    type Output = DeleteParameterResult;
    type Error = DeleteParameterError;
}

sysmgr_model::wire_enum! {
    /// Error codes DeleteParameter is documented to return.
    pub enum DeleteParameterError {
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
        /// The parameter could not be found.
        ParameterNotFound = "ParameterNotFound",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteParameterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min_len = 1, max_len = 2048)]
    name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteParameterResult {}
