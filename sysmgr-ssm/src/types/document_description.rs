// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Timestamp};

use crate::types::{
    AttachmentInformation, DocumentFormat, DocumentHashType, DocumentParameter, DocumentRequires,
    DocumentStatus, DocumentType, PlatformType, Tag,
};

/// Describes an SSM document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 256)]
    sha1: Option<String>,
    /// Hash of the document content.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 256)]
    hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hash_type: Option<DocumentHashType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "^[a-zA-Z0-9_\\-.:/]{3,128}$")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "^[a-zA-Z0-9_\\-.]{1,128}$")]
    version_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<DocumentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "([$]LATEST|[$]DEFAULT|^[1-9][0-9]*$)")]
    document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<Vec<DocumentParameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    platform_types: Option<Vec<PlatformType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    document_type: Option<DocumentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "([0-9]+)\\.([0-9]+)")]
    schema_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "([$]LATEST|[$]DEFAULT|^[1-9][0-9]*$)")]
    latest_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "([$]LATEST|[$]DEFAULT|^[1-9][0-9]*$)")]
    default_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    document_format: Option<DocumentFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 200, pattern = "^\\/[\\w\\.\\-\\:\\/]*$")]
    target_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 1000)]
    tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachments_information: Option<Vec<AttachmentInformation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 1)]
    requires: Option<Vec<DocumentRequires>>,
}
