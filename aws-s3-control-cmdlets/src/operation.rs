/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_s3control::primitives::DateTime;
use aws_smithy_types::date_time::Format;
use serde_json::Value;
use tokio::sync::watch;

use crate::error::{self, Error};
use crate::types::PagingInput;

/// Common invocation builder and summary
pub mod invoke;

pub(crate) mod paginator;

/// Types for the `ListCallerAccessGrants` operation
pub mod list_caller_access_grants;

/// Types for the `ListAccessGrants` operation
pub mod list_access_grants;

/// Types for the `ListAccessGrantsLocations` operation
pub mod list_access_grants_locations;

/// Types for the `ListAccessPoints` operation
pub mod list_access_points;

/// Types for the `ListJobs` operation
pub mod list_jobs;

/// Types for the `ListTagsForResource` operation
pub mod list_tags_for_resource;

/// Types for the `TagResource` operation
pub mod tag_resource;

/// Types for the `UntagResource` operation
pub mod untag_resource;

/// Types for the `GetBucketPolicy` operation
pub mod get_bucket_policy;

/// Types for the `PutBucketPolicy` operation
pub mod put_bucket_policy;

/// Types for the `DeleteBucketPolicy` operation
pub mod delete_bucket_policy;

/// A single S3 Control API operation exposed as a cmdlet.
///
/// Implementations hold the bound parameters for one invocation. The shared
/// [`invoke`](crate::Client::invoke) machinery takes care of confirmation, pagination and
/// projecting responses onto the [`Pipeline`](crate::pipeline::Pipeline).
#[async_trait]
pub trait Operation: fmt::Debug + Send + Sync {
    /// The SDK output for a single call
    type Output: fmt::Debug + Send;

    /// Service API name of the operation, e.g. `ListAccessGrants`
    const NAME: &'static str;

    /// Response field written to the pipeline when no select expression is given.
    ///
    /// `None` means the operation writes nothing by default.
    const DEFAULT_SELECT: Option<&'static str>;

    /// Names of the top-level fields of the record produced by [`Operation::to_record`]
    const OUTPUT_FIELDS: &'static [&'static str];

    /// The account id bound to this invocation, overriding the configured default.
    fn account_id(&self) -> Option<&str>;

    /// The bound parameters, keyed by parameter name.
    fn parameters(&self) -> Value;

    /// Check the bound parameters before anything is confirmed or sent.
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }

    /// The target described to the user before a mutating operation is performed.
    ///
    /// Read-only operations return `None` and are never confirmed.
    fn confirm_target(&self) -> Option<String> {
        None
    }

    /// Pagination parameters, for list operations.
    fn paging(&self) -> Option<&PagingInput> {
        None
    }

    /// Send a single request, continuing from `next_token` when given.
    async fn send(
        &self,
        ctx: &OperationContext,
        next_token: Option<String>,
    ) -> Result<Self::Output, Error>;

    /// Project the SDK output into a pipeline record.
    fn to_record(output: &Self::Output) -> Value;

    /// The continuation token returned with `output`, if any.
    fn next_token(_output: &Self::Output) -> Option<&str> {
        None
    }
}

/// Context handed to an [`Operation`] when it sends a request.
#[derive(Debug, Clone)]
pub struct OperationContext {
    handle: Arc<crate::client::Handle>,
}

impl OperationContext {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self { handle }
    }

    /// The S3 Control client to use for SDK operations
    pub fn client(&self) -> &aws_sdk_s3control::Client {
        self.handle.config.client()
    }

    /// Resolve the account id for a request.
    ///
    /// An explicit (non-empty) account id wins over the configured default.
    pub fn account_id(&self, explicit: Option<&str>) -> Result<String, Error> {
        explicit
            .filter(|id| !id.is_empty())
            .or_else(|| self.handle.config.account_id())
            .map(str::to_owned)
            .ok_or_else(|| {
                error::invalid_input("an account id is required, set --account-id or AWS_ACCOUNT_ID")
            })
    }

    pub(crate) fn region(&self) -> Option<&str> {
        self.handle.config.region()
    }

    pub(crate) fn iteration_mode(&self) -> crate::types::IterationMode {
        self.handle.config.iteration_mode()
    }

    pub(crate) fn cancel_rx(&self) -> watch::Receiver<bool> {
        self.handle.cancel_rx()
    }
}

/// Reject a value that is not one of the `known` values of an enum parameter.
pub(crate) fn check_known(parameter: &str, value: &str, known: &[&str]) -> Result<(), Error> {
    if known.contains(&value) {
        Ok(())
    } else {
        Err(error::invalid_input(format!(
            "'{value}' is not a valid {parameter}, expected one of {known:?}"
        )))
    }
}

/// Format an SDK timestamp as an ISO-8601 string.
pub(crate) fn timestamp(value: Option<&DateTime>) -> Option<String> {
    value.and_then(|dt| dt.fmt(Format::DateTime).ok())
}
