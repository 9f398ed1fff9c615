//! DynamoDB error mapping.
//!
//! Maps CreateTable SDK errors to `CreateOutcome` / `BackendError` from
//! `tally_core::storage`. Only `ResourceInUseException` is treated as an
//! existing table.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{BuildError, DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use tally_core::storage::{BackendError, CreateOutcome, Result};

/// Map a CreateTable SDK error to an outcome or a BackendError.
pub fn map_create_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<CreateTableError, R>,
) -> Result<CreateOutcome> {
    let message = DisplayErrorContext(&err).to_string();
    match err {
        SdkError::ServiceError(context) => classify_create_table_error(context.into_err()),
        SdkError::ConstructionFailure(_) => Err(BackendError::InvalidRequest(message)),
        _ => Err(BackendError::Transport(message)),
    }
}

/// Map a CreateTable service error to an outcome or a BackendError.
pub fn classify_create_table_error(err: CreateTableError) -> Result<CreateOutcome> {
    let message = describe(&err);
    match err {
        CreateTableError::ResourceInUseException(_) => Ok(CreateOutcome::AlreadyExists),
        CreateTableError::LimitExceededException(_) => Err(BackendError::Throttled(message)),
        err => Err(match err.code() {
            Some(
                "AccessDeniedException"
                | "UnrecognizedClientException"
                | "MissingAuthenticationTokenException"
                | "InvalidSignatureException"
                | "ExpiredTokenException",
            ) => BackendError::PermissionDenied(message),
            Some("ValidationException" | "SerializationException") => {
                BackendError::InvalidRequest(message)
            }
            Some("ThrottlingException" | "RequestLimitExceeded") => {
                BackendError::Throttled(message)
            }
            _ => BackendError::Service(message),
        }),
    }
}

/// Map a request builder error to BackendError.
pub fn map_build_error(err: BuildError) -> BackendError {
    BackendError::InvalidRequest(err.to_string())
}

fn describe(err: &CreateTableError) -> String {
    match (err.code(), err.message()) {
        (Some(code), Some(message)) => format!("{code}: {message}"),
        (Some(code), None) => code.to_string(),
        _ => err.to_string(),
    }
}
