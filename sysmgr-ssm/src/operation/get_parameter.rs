// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

use crate::types::Parameter;

/// Gets one parameter by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetParameter;

impl Operation for GetParameter {
    const NAME: &'static str = "GetParameter";
    type Input = GetParameterRequest;
    type Output = GetParameterResult;
    type Error = GetParameterError;
}

sysmgr_model::wire_enum! {
    /// Error codes GetParameter is documented to return.
    pub enum GetParameterError {
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
        InvalidKeyId = "InvalidKeyId",
        /// The parameter could not be found.
        ParameterNotFound = "ParameterNotFound",
        ParameterVersionNotFound = "ParameterVersionNotFound",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct GetParameterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min_len = 1, max_len = 2048)]
    name: Option<String>,
    /// Decrypt SecureString values.
    #[serde(skip_serializing_if = "Option::is_none")]
    with_decryption: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct GetParameterResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    parameter: Option<Parameter>,
}
