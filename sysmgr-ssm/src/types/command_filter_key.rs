// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

sysmgr_model::wire_enum! {
    pub enum CommandFilterKey {
        InvokedAfter = "InvokedAfter",
        InvokedBefore = "InvokedBefore",
        Status = "Status",
        ExecutionStage = "ExecutionStage",
        DocumentName = "DocumentName",
    }
}
