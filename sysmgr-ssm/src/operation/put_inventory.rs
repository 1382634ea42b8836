// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use sysmgr_model::{Entity, Operation};

use crate::types::InventoryItem;

/// Adds inventory items to a managed instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct PutInventory;

impl Operation for PutInventory {
    const NAME: &'static str = "PutInventory";
    type Input = PutInventoryRequest;
    type Output = PutInventoryResult;
    type Error = PutInventoryError;
}

sysmgr_model::wire_enum! {
    /// Error codes PutInventory is documented to return.
    pub enum PutInventoryError {
        /// The service failed while handling the request.
        InternalServerError = "InternalServerError",
        /// The instance is not valid, not running, or not registered with the service.
        InvalidInstanceId = "InvalidInstanceId",
        InvalidTypeName = "InvalidTypeName",
        InvalidItemContent = "InvalidItemContent",
        TotalSizeLimitExceeded = "TotalSizeLimitExceeded",
        ItemSizeLimitExceeded = "ItemSizeLimitExceeded",
        ItemContentMismatch = "ItemContentMismatch",
        CustomSchemaCountLimitExceeded = "CustomSchemaCountLimitExceeded",
        UnsupportedInventorySchemaVersion = "UnsupportedInventorySchemaVersion",
        UnsupportedInventoryItemContext = "UnsupportedInventoryItemContext",
        InvalidInventoryItemContext = "InvalidInventoryItemContext",
        SubTypeCountLimitExceeded = "SubTypeCountLimitExceeded",
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct PutInventoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, pattern = "(^i-(\\w{8}|\\w{17})$)|(^mi-\\w{17}$)")]
    instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min_len = 1, max_len = 30)]
    items: Option<Vec<InventoryItem>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct PutInventoryResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}
