//! Operations, the transport seam, and the dispatcher between them.
//!
//! Network I/O, signing, retries and endpoint resolution all live behind
//! [`Transport`]. This module only names operations, builds their target
//! string and optionally validates requests before they leave the process.
//! Error responses come back from the transport as a [`ServiceError`] and
//! leave the dispatcher typed by the operation's error codes.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::entity::Entity;
use crate::error::ValidationError;

/// A remote operation with typed input and output entities.
pub trait Operation {
    /// Operation name as the service spells it (`SendCommand`).
    const NAME: &'static str;
    type Input: Entity + Serialize + DeserializeOwned;
    type Output: Entity + Serialize + DeserializeOwned;
    /// Error codes the service documents for this operation. A code it does
    /// not document still converts, into the type's unknown value.
    type Error: From<String>
        + AsRef<str>
        + fmt::Debug
        + fmt::Display
        + Clone
        + Send
        + Sync
        + 'static;
}

/// What [`Dispatcher::call`] returns for operation `O` over transport `T`.
pub type CallResult<O, T> = Result<
    <O as Operation>::Output,
    ClientError<<T as Transport>::Error, <O as Operation>::Error>,
>;

/// An error response from the service, split into its code and message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ServiceError {
    /// Error code, e.g. `ParameterNotFound`.
    pub code: String,
    pub message: String,
}

impl ServiceError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Carries a request to the service and brings back its result.
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Invokes operation `O`. `target` is `"{TargetPrefix}.{Operation}"`.
    fn invoke<O: Operation>(&self, target: &str, input: &O::Input) -> Result<O::Output, Self::Error>;

    /// Takes the service's error response out of `err`, or hands `err` back
    /// when the call failed before the service answered. The default treats
    /// every failure as the transport's own.
    fn service_error(err: Self::Error) -> Result<ServiceError, Self::Error> {
        Err(err)
    }
}

/// Whether requests are checked against their field metadata before dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Forward whatever the caller built; the service is the judge.
    #[default]
    Permissive,
    /// Reject requests with violations before they reach the transport.
    Strict,
}

/// Client-side settings shared by every operation of a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix of every operation target, e.g. `AmazonSSM`. When empty the
    /// bare operation name is used.
    pub target_prefix: String,
    pub validation: ValidationMode,
}

impl ClientConfig {
    pub fn new(target_prefix: impl Into<String>) -> Self {
        Self {
            target_prefix: target_prefix.into(),
            validation: ValidationMode::default(),
        }
    }

    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Target string for operation `O`.
    pub fn target_for<O: Operation>(&self) -> String {
        if self.target_prefix.is_empty() {
            O::NAME.to_string()
        } else {
            format!("{}.{}", self.target_prefix, O::NAME)
        }
    }
}

/// Errors returned by [`Dispatcher::call`]. `C` is the operation's error
/// code type.
#[derive(Debug, Error)]
pub enum ClientError<E: std::error::Error + 'static, C: fmt::Debug + fmt::Display = String> {
    /// Strict validation rejected the request; nothing was sent.
    #[error("request rejected before dispatch: {0}")]
    Validation(#[from] ValidationError),

    /// The service answered with an error response.
    #[error("service returned {code}: {message}")]
    Service { code: C, message: String },

    #[error("transport failed: {0}")]
    Transport(#[source] E),
}

impl<E: std::error::Error + 'static, C: fmt::Debug + fmt::Display> ClientError<E, C> {
    /// The service's error code, when the service answered with one.
    pub fn code(&self) -> Option<&C> {
        match self {
            Self::Service { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Routes typed operations to a [`Transport`].
#[derive(Debug, Clone)]
pub struct Dispatcher<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validates (in strict mode) and forwards `input` to the transport.
    pub fn call<O: Operation>(&self, input: &O::Input) -> CallResult<O, T> {
        let target = self.config.target_for::<O>();
        if self.config.validation == ValidationMode::Strict {
            if let Err(err) = input.validate() {
                debug!(
                    operation = %target,
                    violations = err.violations.len(),
                    "request rejected by local validation"
                );
                return Err(err.into());
            }
        }
        debug!(operation = %target, "dispatching operation");
        self.transport
            .invoke::<O>(&target, input)
            .map_err(|err| match T::service_error(err) {
                Ok(ServiceError { code, message }) => {
                    let code = O::Error::from(code);
                    debug!(operation = %target, code = %code, "service returned an error");
                    ClientError::Service { code, message }
                }
                Err(err) => ClientError::Transport(err),
            })
    }
}
