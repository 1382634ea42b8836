// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

sysmgr_model::wire_enum! {
    pub enum CommandPluginStatus {
        Pending = "Pending",
        InProgress = "InProgress",
        Success = "Success",
        TimedOut = "TimedOut",
        Cancelled = "Cancelled",
        Failed = "Failed",
    }
}
