//! Amazon Simple Systems Manager (SSM) model layer.
//!
//! Every module here except this file is generated by `sysmgr-codegen` from
//! `schema/ssm.json`. After editing the description, regenerate with
//!
//! ```text
//! cargo run -p sysmgr-codegen -- generate --config sysmgr-ssm/sysmgr-codegen.toml
//! ```
//!
//! Entities never validate on mutation; ask for it explicitly, or configure
//! the client with [`ValidationMode::Strict`].
//!
//! ```
//! use sysmgr_ssm::Entity;
//! use sysmgr_ssm::operation::SendCommandRequest;
//! use sysmgr_ssm::types::Target;
//!
//! let request = SendCommandRequest::default()
//!     .with_document_name("AWS-RunShellScript")
//!     .with_targets([Target::default().with_key("tag:Env").with_values(["prod"])])
//!     .with_timeout_seconds(600);
//! assert!(request.validate().is_ok());
//! assert!(request.with_timeout_seconds(5).validate().is_err());
//! ```

pub mod client;
pub mod metadata;
pub mod operation;
pub mod types;

pub use client::SsmClient;
pub use sysmgr_model::{
    CallResult, ClientConfig, ClientError, DuplicateKeyError, Entity, HashCode, Operation,
    ServiceError, Timestamp, Transport, ValidationError, ValidationMode, Violation, ViolationKind,
};
