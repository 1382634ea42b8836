// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

sysmgr_model::wire_enum! {
    pub enum ComplianceStatus {
        Compliant = "COMPLIANT",
        NonCompliant = "NON_COMPLIANT",
    }
}
