// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

sysmgr_model::wire_enum! {
    /// How association compliance is reported.
    pub enum AssociationSyncCompliance {
        Auto = "AUTO",
        Manual = "MANUAL",
    }
}
