// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

use crate::types::{ResourceTypeForTagging, Tag};

/// Adds or overwrites tags on a document, managed instance, maintenance window, parameter, patch baseline or OpsItem.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddTagsToResource;

impl Operation for AddTagsToResource {
    const NAME: &'static str = "AddTagsToResource";
    type Input = AddTagsToResourceRequest;
    type Output = AddTagsToResourceResult;
    type Error = AddTagsToResourceError;
}

sysmgr_model::wire_enum! {
    /// Error codes AddTagsToResource is documented to return.
    pub enum AddTagsToResourceError {
        InvalidResourceType = "InvalidResourceType",
        InvalidResourceId = "InvalidResourceId",
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
        /// The resource would exceed its tag limit.
        TooManyTagsError = "TooManyTagsError",
        /// Too many updates were made to the resource at once.
        TooManyUpdates = "TooManyUpdates",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct AddTagsToResourceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required)]
    resource_type: Option<ResourceTypeForTagging>,
    /// Identifier of the resource to tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required)]
    resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min_len = 0, max_len = 1000)]
    tags: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct AddTagsToResourceResult {}
