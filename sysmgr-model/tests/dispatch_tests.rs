mod common;

use std::cell::RefCell;

use common::{Command, full_command};
use serde::{Deserialize, Serialize};
use sysmgr_model::{
    ClientConfig, ClientError, Dispatcher, Entity, Operation, ServiceError, Transport,
    ValidationMode,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
#[serde(rename_all = "PascalCase")]
struct Ack {
    #[serde(skip_serializing_if = "Option::is_none")]
    command_id: Option<String>,
}

struct RunCommand;

impl Operation for RunCommand {
    const NAME: &'static str = "SendCommand";
    type Input = Command;
    type Output = Ack;
    type Error = RunCommandError;
}

sysmgr_model::wire_enum! {
    enum RunCommandError {
        InvalidDocument = "InvalidDocument",
        InternalServerError = "InternalServerError",
    }
}

#[derive(Debug, thiserror::Error)]
enum LoopbackError {
    #[error("endpoint unreachable")]
    Unreachable,
    #[error("rejected: {0}")]
    Rejected(ServiceError),
}

/// Records every target and answers with a fixed command id, or fails.
#[derive(Default)]
struct Loopback {
    targets: RefCell<Vec<String>>,
    fail: bool,
    reject: Option<ServiceError>,
}

impl Loopback {
    fn rejecting(code: &str, message: &str) -> Self {
        Self {
            reject: Some(ServiceError::new(code, message)),
            ..Self::default()
        }
    }
}

impl Transport for Loopback {
    type Error = LoopbackError;

    fn invoke<O: Operation>(
        &self,
        target: &str,
        input: &O::Input,
    ) -> Result<O::Output, Self::Error> {
        self.targets.borrow_mut().push(target.to_string());
        if self.fail {
            return Err(LoopbackError::Unreachable);
        }
        if let Some(reject) = &self.reject {
            return Err(LoopbackError::Rejected(reject.clone()));
        }
        // Round-trip through the wire form, as a real transport would.
        let _request = serde_json::to_value(input).map_err(|_| LoopbackError::Unreachable)?;
        serde_json::from_str(r#"{"CommandId":"c-1"}"#).map_err(|_| LoopbackError::Unreachable)
    }

    fn service_error(err: Self::Error) -> Result<ServiceError, Self::Error> {
        match err {
            LoopbackError::Rejected(service) => Ok(service),
            other => Err(other),
        }
    }
}

/// Reports nothing as a service error, like a transport that cannot tell.
struct Opaque;

impl Transport for Opaque {
    type Error = LoopbackError;

    fn invoke<O: Operation>(
        &self,
        _target: &str,
        _input: &O::Input,
    ) -> Result<O::Output, Self::Error> {
        Err(LoopbackError::Rejected(ServiceError::new("InvalidDocument", "bad")))
    }
}

// ── Targets ──────────────────────────────────────────────────────

#[test]
fn target_is_prefix_dot_operation() {
    let dispatcher = Dispatcher::new(Loopback::default(), ClientConfig::new("AmazonSSM"));
    let ack = dispatcher.call::<RunCommand>(&full_command()).unwrap();
    assert_eq!(ack.command_id(), Some("c-1"));
    assert_eq!(
        *dispatcher.transport().targets.borrow(),
        vec!["AmazonSSM.SendCommand".to_string()]
    );
}

#[test]
fn empty_prefix_uses_bare_operation_name() {
    assert_eq!(ClientConfig::default().target_for::<RunCommand>(), "SendCommand");
}

// ── Validation modes ─────────────────────────────────────────────

#[test]
fn permissive_mode_forwards_invalid_requests() {
    let dispatcher = Dispatcher::new(Loopback::default(), ClientConfig::new("AmazonSSM"));
    assert!(dispatcher.call::<RunCommand>(&Command::default()).is_ok());
    assert_eq!(dispatcher.transport().targets.borrow().len(), 1);
}

#[test]
fn strict_mode_rejects_before_the_transport() {
    let config = ClientConfig::new("AmazonSSM").with_validation(ValidationMode::Strict);
    let dispatcher = Dispatcher::new(Loopback::default(), config);

    let err = dispatcher.call::<RunCommand>(&Command::default()).unwrap_err();
    match err {
        ClientError::Validation(err) => assert_eq!(err.entity, "Command"),
        other => panic!("expected a validation error, got {other:?}"),
    }
    assert!(dispatcher.transport().targets.borrow().is_empty());
}

#[test]
fn strict_mode_forwards_valid_requests() {
    let config = ClientConfig::new("AmazonSSM").with_validation(ValidationMode::Strict);
    let dispatcher = Dispatcher::new(Loopback::default(), config);
    assert!(dispatcher.call::<RunCommand>(&full_command()).is_ok());
}

#[test]
fn transport_failures_are_wrapped() {
    let transport = Loopback {
        fail: true,
        ..Loopback::default()
    };
    let dispatcher = Dispatcher::new(transport, ClientConfig::new("AmazonSSM"));
    let err = dispatcher.call::<RunCommand>(&full_command()).unwrap_err();
    assert!(matches!(err, ClientError::Transport(LoopbackError::Unreachable)));
    assert_eq!(err.to_string(), "transport failed: endpoint unreachable");
    assert_eq!(err.code(), None);
}

// ── Service errors ───────────────────────────────────────────────

#[test]
fn documented_codes_come_back_typed() {
    let transport = Loopback::rejecting("InvalidDocument", "document does not exist");
    let dispatcher = Dispatcher::new(transport, ClientConfig::new("AmazonSSM"));
    let err = dispatcher.call::<RunCommand>(&full_command()).unwrap_err();
    match &err {
        ClientError::Service { code, message } => {
            assert_eq!(*code, RunCommandError::InvalidDocument);
            assert_eq!(message, "document does not exist");
        }
        other => panic!("expected a service error, got {other:?}"),
    }
    assert_eq!(err.code(), Some(&RunCommandError::InvalidDocument));
    assert_eq!(
        err.to_string(),
        "service returned InvalidDocument: document does not exist"
    );
}

#[test]
fn undocumented_codes_are_kept_verbatim() {
    let transport = Loopback::rejecting("ThrottlingException", "slow down");
    let dispatcher = Dispatcher::new(transport, ClientConfig::new("AmazonSSM"));
    let err = dispatcher.call::<RunCommand>(&full_command()).unwrap_err();
    let code = err.code().unwrap();
    assert!(!code.is_known());
    assert_eq!(code.as_str(), "ThrottlingException");
}

#[test]
fn strict_rejection_is_not_a_service_error() {
    let config = ClientConfig::new("AmazonSSM").with_validation(ValidationMode::Strict);
    let dispatcher = Dispatcher::new(Loopback::rejecting("InvalidDocument", "bad"), config);
    let err = dispatcher.call::<RunCommand>(&Command::default()).unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(dispatcher.transport().targets.borrow().is_empty());
}

#[test]
fn transports_without_service_errors_report_everything_as_transport() {
    let dispatcher = Dispatcher::new(Opaque, ClientConfig::new("AmazonSSM"));
    let err = dispatcher.call::<RunCommand>(&full_command()).unwrap_err();
    match &err {
        ClientError::Transport(LoopbackError::Rejected(service)) => {
            assert_eq!(service.code, "InvalidDocument");
        }
        other => panic!("expected a transport error, got {other:?}"),
    }
}

// ── Configuration ────────────────────────────────────────────────

#[test]
fn config_deserializes_with_defaults() {
    let config: ClientConfig = serde_json::from_str(r#"{"target_prefix":"AmazonSSM"}"#).unwrap();
    assert_eq!(config.target_prefix, "AmazonSSM");
    assert_eq!(config.validation, ValidationMode::Permissive);

    let config: ClientConfig = serde_json::from_str(r#"{"validation":"strict"}"#).unwrap();
    assert_eq!(config.validation, ValidationMode::Strict);
    assert!(config.target_prefix.is_empty());
}
