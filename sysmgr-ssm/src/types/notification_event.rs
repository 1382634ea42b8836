// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

sysmgr_model::wire_enum! {
    pub enum NotificationEvent {
        All = "All",
        InProgress = "InProgress",
        Success = "Success",
        TimedOut = "TimedOut",
        Cancelled = "Cancelled",
        Failed = "Failed",
    }
}
