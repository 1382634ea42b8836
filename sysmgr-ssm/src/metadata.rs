// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

/// Short service identifier.
pub const SERVICE_ID: &str = "SSM";

/// Full service name.
pub const SERVICE_FULL_NAME: &str = "Amazon Simple Systems Manager (SSM)";

/// Prefix of every operation target, `"{TARGET_PREFIX}.{Operation}"`.
pub const TARGET_PREFIX: &str = "AmazonSSM";

/// API version the binding was generated from.
pub const API_VERSION: &str = "2014-11-06";
