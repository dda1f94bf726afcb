/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Fixtures shared by the integration tests.

use aws_sdk_s3control::operation::list_access_grants::ListAccessGrantsOutput;
use aws_sdk_s3control::operation::list_access_grants_locations::ListAccessGrantsLocationsOutput;
use aws_sdk_s3control::operation::list_access_points::ListAccessPointsOutput;
use aws_sdk_s3control::operation::list_caller_access_grants::{
    ListCallerAccessGrantsError, ListCallerAccessGrantsOutput,
};
use aws_sdk_s3control::operation::list_jobs::ListJobsOutput;
use aws_sdk_s3control::primitives::DateTime;
use aws_sdk_s3control::types::{
    AccessPoint, Grantee, GranteeType, JobListDescriptor, JobStatus, ListAccessGrantEntry,
    ListAccessGrantsLocationsEntry, ListCallerAccessGrantsEntry, NetworkOrigin, Permission,
};
use aws_smithy_mocks_experimental::{mock, Rule};
use aws_smithy_runtime_api::client::http::{
    http_client_fn, HttpConnector, HttpConnectorFuture, SharedHttpClient, SharedHttpConnector,
};
use aws_smithy_runtime_api::client::orchestrator::{HttpRequest, HttpResponse};
use aws_smithy_runtime_api::http::StatusCode;
use aws_smithy_types::body::SdkBody;
use aws_smithy_types::error::ErrorMetadata;

/// Account id used by every test config
pub const ACCOUNT_ID: &str = "111122223333";

/// Answers every request with an empty `200 OK`.
///
/// Mock rules swap in their output or error after the response is received, so the request
/// has to complete a round trip for error rules to surface as service errors.
#[derive(Debug)]
struct EmptyResponse;

impl HttpConnector for EmptyResponse {
    fn call(&self, _request: HttpRequest) -> HttpConnectorFuture {
        let status = StatusCode::try_from(200).expect("valid status");
        HttpConnectorFuture::ready(Ok(HttpResponse::new(status, SdkBody::empty())))
    }
}

/// HTTP client for mocked SDK clients
pub fn stubbed_http_client() -> SharedHttpClient {
    http_client_fn(|_, _| SharedHttpConnector::new(EmptyResponse))
}

/// Create a mocked SDK client like `mock_client!` whose requests reach a stubbed HTTP client.
#[macro_export]
macro_rules! mock_client_with_stubbed_http_client {
    ($aws_crate: ident, $rules: expr) => {
        $crate::mock_client_with_stubbed_http_client!(
            $aws_crate,
            aws_smithy_mocks_experimental::RuleMode::Sequential,
            $rules
        )
    };
    ($aws_crate: ident, $rule_mode: expr, $rules: expr) => {{
        let client = aws_smithy_mocks_experimental::mock_client!($aws_crate, $rule_mode, $rules);
        $aws_crate::Client::from_conf(
            client
                .config()
                .to_builder()
                .http_client($crate::stubbed_http_client())
                .retry_config($aws_crate::config::retry::RetryConfig::disabled())
                .build(),
        )
    }};
}

/// A single page of `ListCallerAccessGrants` with one READ grant per scope
pub fn caller_grants_page(
    scopes: &[&str],
    next_token: Option<&str>,
) -> ListCallerAccessGrantsOutput {
    let grants = scopes
        .iter()
        .map(|scope| {
            ListCallerAccessGrantsEntry::builder()
                .grant_scope(*scope)
                .permission(Permission::Read)
                .build()
        })
        .collect();

    ListCallerAccessGrantsOutput::builder()
        .set_caller_access_grants_list(Some(grants))
        .set_next_token(next_token.map(str::to_owned))
        .build()
}

/// Rule answering a `ListCallerAccessGrants` request sent with `expected_token` with `page`
pub fn caller_grants_rule(
    expected_token: Option<&'static str>,
    page: ListCallerAccessGrantsOutput,
) -> Rule {
    mock!(aws_sdk_s3control::Client::list_caller_access_grants)
        .match_requests(move |r| r.next_token() == expected_token)
        .then_output(move || page.clone())
}

/// Rule failing a `ListCallerAccessGrants` request sent with `expected_token`
pub fn caller_grants_error_rule(expected_token: Option<&'static str>, code: &'static str) -> Rule {
    mock!(aws_sdk_s3control::Client::list_caller_access_grants)
        .match_requests(move |r| r.next_token() == expected_token)
        .then_error(move || {
            ListCallerAccessGrantsError::generic(
                ErrorMetadata::builder()
                    .code(code)
                    .message("mock failure")
                    .build(),
            )
        })
}

/// A single page of `ListAccessGrants` with one IAM grant per grant id
pub fn access_grants_page(grant_ids: &[&str], next_token: Option<&str>) -> ListAccessGrantsOutput {
    let grants = grant_ids
        .iter()
        .map(|id| {
            let grantee = Grantee::builder()
                .grantee_type(GranteeType::Iam)
                .grantee_identifier(format!("arn:aws:iam::{ACCOUNT_ID}:role/{id}"))
                .build();
            ListAccessGrantEntry::builder()
                .access_grant_id(*id)
                .grantee(grantee)
                .permission(Permission::Readwrite)
                .grant_scope(format!("s3://bucket/{id}/*"))
                .build()
        })
        .collect();

    ListAccessGrantsOutput::builder()
        .set_access_grants_list(Some(grants))
        .set_next_token(next_token.map(str::to_owned))
        .build()
}

/// A single page of `ListAccessGrantsLocations` with one location per scope
pub fn locations_page(scopes: &[&str], next_token: Option<&str>) -> ListAccessGrantsLocationsOutput {
    let locations = scopes
        .iter()
        .enumerate()
        .map(|(i, scope)| {
            ListAccessGrantsLocationsEntry::builder()
                .access_grants_location_id(format!("location-{i}"))
                .location_scope(*scope)
                .iam_role_arn(format!("arn:aws:iam::{ACCOUNT_ID}:role/grants"))
                .created_at(DateTime::from_secs(0))
                .build()
        })
        .collect();

    ListAccessGrantsLocationsOutput::builder()
        .set_access_grants_locations_list(Some(locations))
        .set_next_token(next_token.map(str::to_owned))
        .build()
}

/// A single page of `ListAccessPoints` with one internet access point per name
pub fn access_points_page(names: &[&str], next_token: Option<&str>) -> ListAccessPointsOutput {
    let access_points = names
        .iter()
        .map(|name| {
            AccessPoint::builder()
                .name(*name)
                .network_origin(NetworkOrigin::Internet)
                .bucket("bucket")
                .build()
                .expect("valid access point")
        })
        .collect();

    ListAccessPointsOutput::builder()
        .set_access_point_list(Some(access_points))
        .set_next_token(next_token.map(str::to_owned))
        .build()
}

/// A single page of `ListJobs` with one active job per job id
pub fn jobs_page(job_ids: &[&str], next_token: Option<&str>) -> ListJobsOutput {
    let jobs = job_ids
        .iter()
        .map(|id| {
            JobListDescriptor::builder()
                .job_id(*id)
                .status(JobStatus::Active)
                .creation_time(DateTime::from_secs(0))
                .build()
        })
        .collect();

    ListJobsOutput::builder()
        .set_jobs(Some(jobs))
        .set_next_token(next_token.map(str::to_owned))
        .build()
}
