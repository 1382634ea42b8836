// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

sysmgr_model::wire_enum! {
    pub enum AutomationExecutionStatus {
        Pending = "Pending",
        InProgress = "InProgress",
        Waiting = "Waiting",
        Success = "Success",
        TimedOut = "TimedOut",
        Cancelling = "Cancelling",
        Cancelled = "Cancelled",
        Failed = "Failed",
    }
}
