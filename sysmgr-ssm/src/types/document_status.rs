// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

sysmgr_model::wire_enum! {
    pub enum DocumentStatus {
        Creating = "Creating",
        Active = "Active",
        Updating = "Updating",
        Deleting = "Deleting",
        Failed = "Failed",
    }
}
