// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

use crate::types::DocumentDescription;

/// Describes an SSM document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescribeDocument;

impl Operation for DescribeDocument {
    const NAME: &'static str = "DescribeDocument";
    type Input = DescribeDocumentRequest;
    type Output = DescribeDocumentResult;
    type Error = DescribeDocumentError;
}

sysmgr_model::wire_enum! {
    /// Error codes DescribeDocument is documented to return.
    pub enum DescribeDocumentError {
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
        /// The document does not exist, or its content is invalid.
        InvalidDocument = "InvalidDocument",
        InvalidDocumentVersion = "InvalidDocumentVersion",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDocumentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, pattern = "^[a-zA-Z0-9_\\-.:/]{3,128}$")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "([$]LATEST|[$]DEFAULT|^[1-9][0-9]*$)")]
    document_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(pattern = "^[a-zA-Z0-9_\\-.]{1,128}$")]
    version_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDocumentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<DocumentDescription>,
}
