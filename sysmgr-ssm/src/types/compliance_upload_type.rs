// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

sysmgr_model::wire_enum! {
    /// Whether a compliance upload replaces or amends existing items.
    pub enum ComplianceUploadType {
        Complete = "Complete",
        Partial = "Partial",
    }
}
