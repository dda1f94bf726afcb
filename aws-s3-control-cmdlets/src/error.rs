/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_sdk_s3control::error::{ProvideErrorMetadata, SdkError};

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of cmdlet errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Cmdlet parameter validation issues
    InputInvalid,

    /// Failure writing records to the pipeline
    IOError,

    /// Resource not found (e.g. bucket, bucket policy, access point)
    NotFound,

    /// The service endpoint host name could not be resolved
    NameResolutionFailure,

    /// The remote call failed for any other reason
    ServiceError,

    /// The invocation was stopped before it completed
    OperationCancelled,
}

impl Error {
    /// Creates a new cmdlet [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::IOError => write!(f, "I/O error"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::NameResolutionFailure => write!(f, "name resolution failure"),
            ErrorKind::ServiceError => write!(f, "service call failed"),
            ErrorKind::OperationCancelled => write!(f, "operation cancelled"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

impl<E, R> From<SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: SdkError<E, R>) -> Self {
        if let SdkError::DispatchFailure(_) = &value {
            if is_name_resolution_failure(&value) {
                return Error::new(ErrorKind::NameResolutionFailure, value);
            }
        }

        let kind = match value.code() {
            Some(
                "NotFound" | "NoSuchBucket" | "NoSuchBucketPolicy" | "NoSuchAccessPoint"
                | "NoSuchTagSet",
            ) => ErrorKind::NotFound,
            _ => ErrorKind::ServiceError,
        };

        Error::new(kind, value)
    }
}

const NAME_RESOLUTION_MARKERS: &[&str] = &[
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "nodename nor servname",
    "no such host is known",
];

/// Walk the source chain of `err` looking for a host name lookup failure.
pub(crate) fn is_name_resolution_failure(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(err) = current {
        let message = err.to_string().to_ascii_lowercase();
        if NAME_RESOLUTION_MARKERS
            .iter()
            .any(|marker| message.contains(marker))
        {
            return true;
        }
        current = err.source();
    }
    false
}

/// Name resolution failure with the region the client attempted to reach.
#[derive(Debug)]
struct NameResolutionError {
    region: Option<String>,
    source: BoxError,
}

impl fmt::Display for NameResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let region = self.region.as_deref().unwrap_or("<unset>");
        write!(
            f,
            "name resolution failure attempting to reach the S3 Control service in region \
             '{region}'; possible causes are an invalid region or an endpoint that is not \
             available in that region"
        )
    }
}

impl std::error::Error for NameResolutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Re-word name resolution failures to name the region. Any other error is returned unchanged.
pub(crate) fn describe_name_resolution(err: Error, region: Option<&str>) -> Error {
    if err.kind != ErrorKind::NameResolutionFailure {
        return err;
    }

    Error::new(
        ErrorKind::NameResolutionFailure,
        NameResolutionError {
            region: region.map(str::to_owned),
            source: err.source,
        },
    )
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

static CANCELLATION_ERROR: &str = "stop processing was requested, no further requests will be sent";

pub(crate) fn operation_cancelled() -> Error {
    Error::new(ErrorKind::OperationCancelled, CANCELLATION_ERROR)
}
