// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sysmgr_model::Entity;

/// Inventory data of one type collected from a managed instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
pub struct InventoryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, min_len = 1, max_len = 100, pattern = "^(AWS|Custom):.*$")]
    type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(required, pattern = "^([0-9]{1,6})(\\.[0-9]{1,6})$")]
    schema_version: Option<String>,
    /// Time the inventory was captured, as an ISO 8601 UTC string.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(
        required,
        pattern = "^(20)[0-9][0-9]-(0[1-9]|1[012])-([12][0-9]|3[01]|0[1-9])(T)(2[0-3]|[0-1][0-9])(:[0-5][0-9])(:[0-5][0-9])(Z)$"
    )]
    capture_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 256)]
    content_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 10000)]
    content: Option<Vec<BTreeMap<String, String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[field(min_len = 0, max_len = 50)]
    context: Option<BTreeMap<String, String>>,
}
