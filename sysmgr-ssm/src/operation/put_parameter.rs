// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

use crate::types::{ParameterTier, ParameterType, Tag};

/// Adds a parameter to Parameter Store, or overwrites one.
#[derive(Debug, Clone, Copy, Default)]
pub struct PutParameter;

impl Operation for PutParameter {
    const NAME: &'static str = "PutParameter";
    type Input = PutParameterRequest;
    type Output = PutParameterResult;
    type Error = PutParameterError;
}

sysmgr_model::wire_enum! {
    /// Error codes PutParameter is documented to return.
    pub enum PutParameterError {
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
        InvalidKeyId = "InvalidKeyId",
        ParameterLimitExceeded = "ParameterLimitExceeded",
        /// Too many updates were made to the resource at once.
        TooManyUpdates = "TooManyUpdates",
        ParameterAlreadyExists = "ParameterAlreadyExists",
        HierarchyLevelLimitExceeded = "HierarchyLevelLimitExceeded",
        HierarchyTypeMismatch = "HierarchyTypeMismatch",
        InvalidAllowedPattern = "InvalidAllowedPattern",
        ParameterMaxVersionLimitExceeded = "ParameterMaxVersionLimitExceeded",
        ParameterPatternMismatch = "ParameterPatternMismatch",
        UnsupportedParameterType = "UnsupportedParameterType",
        PoliciesLimitExceeded = "PoliciesLimitExceeded",
        InvalidPolicyType = "InvalidPolicyType",
        InvalidPolicyAttribute = "InvalidPolicyAttribute",
        IncompatiblePolicy = "IncompatiblePolicy",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct PutParameterRequest {
    /// Fully qualified parameter name, including its hierarchy.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min_len = 1, max_len = 2048)]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 1024)]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required)]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    r#type: Option<ParameterType>,
    /// KMS key used to encrypt SecureString values.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 1, max_len = 256, pattern = "^([a-zA-Z0-9:/_-]+)$")]
    key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    overwrite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 1024)]
    allowed_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 1000)]
    tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tier: Option<ParameterTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 1, max_len = 4096)]
    policies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 128)]
    data_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct PutParameterResult {
    /// New version number of the parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tier: Option<ParameterTier>,
}
