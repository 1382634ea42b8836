// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::Entity;

use crate::types::S3OutputLocation;

/// Where association output is stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceAssociationOutputLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    s3_location: Option<S3OutputLocation>,
}
