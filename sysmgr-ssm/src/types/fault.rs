// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

sysmgr_model::wire_enum! {
    /// Party responsible for a failed association.
    pub enum Fault {
        Client = "Client",
        Server = "Server",
        UnknownValue = "Unknown",
    }
}
