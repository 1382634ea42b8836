// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

use crate::types::{ComplianceExecutionSummary, ComplianceItemEntry, ComplianceUploadType};

/// Registers a compliance type and items on a resource.
#[derive(Debug, Clone, Copy, Default)]
pub struct PutComplianceItems;

impl Operation for PutComplianceItems {
    const NAME: &'static str = "PutComplianceItems";
    type Input = PutComplianceItemsRequest;
    type Output = PutComplianceItemsResult;
    type Error = PutComplianceItemsError;
}

sysmgr_model::wire_enum! {
    /// Error codes PutComplianceItems is documented to return.
    pub enum PutComplianceItemsError {
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
        InvalidItemContent = "InvalidItemContent",
        TotalSizeLimitExceeded = "TotalSizeLimitExceeded",
        ItemSizeLimitExceeded = "ItemSizeLimitExceeded",
        ComplianceTypeCountLimitExceeded = "ComplianceTypeCountLimitExceeded",
        InvalidResourceType = "InvalidResourceType",
        InvalidResourceId = "InvalidResourceId",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct PutComplianceItemsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min_len = 1, max_len = 100)]
    resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min_len = 1, max_len = 50)]
    resource_type: Option<String>,
    /// `Custom:` followed by a name, or a service-defined type.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        required,
        min_len = 1,
        max_len = 100,
        pattern = "[A-Za-z0-9_\\-]\\w+|Custom:[a-zA-Z0-9_\\-]\\w+"
    )]
    compliance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required)]
    execution_summary: Option<ComplianceExecutionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min_len = 0, max_len = 10000)]
    items: Option<Vec<ComplianceItemEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 256)]
    item_content_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    upload_type: Option<ComplianceUploadType>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct PutComplianceItemsResult {}
