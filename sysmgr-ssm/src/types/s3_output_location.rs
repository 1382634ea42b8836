// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::Entity;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct S3OutputLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 3, max_len = 20)]
    output_s3_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 3, max_len = 63)]
    output_s3_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 500)]
    output_s3_key_prefix: Option<String>,
}
