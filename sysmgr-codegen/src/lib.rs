//! Generator for systems-management entity sources.
//!
//! Reads a JSON service description (operations plus a shape table),
//! resolves it into a typed model and emits one Rust source file per
//! entity, enumeration and operation, together with a client and the
//! service metadata constants.
//!
//! ```no_run
//! use sysmgr_codegen::{GenerateOptions, ServiceDescription, generate, resolve, write_files};
//!
//! let description = ServiceDescription::load("schema/ssm.json".as_ref())?;
//! let service = resolve(&description)?;
//! let files = generate(&service, &GenerateOptions::new("ssm.json"))?;
//! write_files("src".as_ref(), &files)?;
//! # Ok::<(), sysmgr_codegen::CodegenError>(())
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod format;
pub mod naming;
pub mod output;
pub mod resolve;
pub mod service;

pub use config::CodegenConfig;
pub use emit::{GenerateOptions, GeneratedFile, generate};
pub use error::{CodegenError, Result};
pub use output::{Drift, check_files, write_files};
pub use resolve::{
    MemberConstraints, ResolvedEnum, ResolvedMember, ResolvedOperation, ResolvedService,
    ResolvedStructure, RustType, resolve,
};
pub use service::{Member, OperationDef, ServiceDescription, ServiceMetadata, Shape};
