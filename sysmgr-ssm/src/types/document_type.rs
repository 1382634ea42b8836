// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

sysmgr_model::wire_enum! {
    pub enum DocumentType {
        Command = "Command",
        Policy = "Policy",
        Automation = "Automation",
        Session = "Session",
        Package = "Package",
        ApplicationConfiguration = "ApplicationConfiguration",
        ApplicationConfigurationSchema = "ApplicationConfigurationSchema",
        DeploymentStrategy = "DeploymentStrategy",
        ChangeCalendar = "ChangeCalendar",
    }
}
