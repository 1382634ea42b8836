// Code generated by sysmgr-codegen from ssm.json. DO NOT EDIT.

sysmgr_model::wire_enum! {
    /// Hash algorithm used to compute a document hash.
    ///
    /// Sha1 hashes are deprecated.
    pub enum DocumentHashType {
        Sha256 = "Sha256",
        Sha1 = "Sha1",
    }
}
