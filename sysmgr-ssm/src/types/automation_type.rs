// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

sysmgr_model::wire_enum! {
    /// Whether an Automation runs in one account and Region or across several.
    pub enum AutomationType {
        CrossAccount = "CrossAccount",
        Local = "Local",
    }
}
