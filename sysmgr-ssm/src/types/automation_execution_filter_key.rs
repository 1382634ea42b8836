// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

sysmgr_model::wire_enum! {
    pub enum AutomationExecutionFilterKey {
        DocumentNamePrefix = "DocumentNamePrefix",
        ExecutionStatus = "ExecutionStatus",
        ExecutionId = "ExecutionId",
        ParentExecutionId = "ParentExecutionId",
        CurrentAction = "CurrentAction",
        StartTimeBefore = "StartTimeBefore",
        StartTimeAfter = "StartTimeAfter",
        AutomationType = "AutomationType",
    }
}
