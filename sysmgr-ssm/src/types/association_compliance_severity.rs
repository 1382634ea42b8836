// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

sysmgr_model::wire_enum! {
    /// Severity reported for an association's compliance.
    pub enum AssociationComplianceSeverity {
        Critical = "CRITICAL",
        High = "HIGH",
        Medium = "MEDIUM",
        Low = "LOW",
        Unspecified = "UNSPECIFIED",
    }
}
