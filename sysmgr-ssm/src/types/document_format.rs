// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

sysmgr_model::wire_enum! {
    pub enum DocumentFormat {
        Yaml = "YAML",
        Json = "JSON",
        Text = "TEXT",
    }
}
