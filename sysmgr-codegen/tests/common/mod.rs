#![allow(dead_code)]

use serde_json::Value;
use sysmgr_codegen::{
    GenerateOptions, GeneratedFile, ResolvedService, ServiceDescription, generate, resolve,
};

pub const DEMO: &str = include_str!("../fixtures/demo.json");

pub fn demo_description() -> ServiceDescription {
    ServiceDescription::from_json(DEMO).unwrap()
}

pub fn demo_service() -> ResolvedService {
    resolve(&demo_description()).unwrap()
}

pub fn demo_files() -> Vec<GeneratedFile> {
    let options = GenerateOptions::new("demo.json").with_format(false);
    generate(&demo_service(), &options).unwrap()
}

/// The fixture as a JSON value, for tests that break it on purpose.
pub fn demo_value() -> Value {
    serde_json::from_str(DEMO).unwrap()
}

pub fn describe(value: Value) -> ServiceDescription {
    serde_json::from_value(value).unwrap()
}
