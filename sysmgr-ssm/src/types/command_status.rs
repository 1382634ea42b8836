// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

sysmgr_model::wire_enum! {
    /// Overall status of a command across all of its targets.
    pub enum CommandStatus {
        Pending = "Pending",
        InProgress = "InProgress",
        Success = "Success",
        Cancelled = "Cancelled",
        Failed = "Failed",
        TimedOut = "TimedOut",
        Cancelling = "Cancelling",
    }
}
