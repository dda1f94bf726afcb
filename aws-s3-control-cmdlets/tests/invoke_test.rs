/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use aws_s3_control_cmdlets::error::ErrorKind;
use aws_s3_control_cmdlets::operation::get_bucket_policy::GetBucketPolicy;
use aws_s3_control_cmdlets::operation::list_access_grants::ListAccessGrants;
use aws_s3_control_cmdlets::operation::list_caller_access_grants::ListCallerAccessGrants;
use aws_s3_control_cmdlets::operation::tag_resource::TagResource;
use aws_s3_control_cmdlets::types::{IterationMode, PagingInput, Select, Tag};
use aws_s3_control_cmdlets::{Client, Config};
use aws_sdk_s3control::error::DisplayErrorContext;
use aws_sdk_s3control::operation::get_bucket_policy::{GetBucketPolicyError, GetBucketPolicyOutput};
use aws_sdk_s3control::operation::list_access_grants::ListAccessGrantsOutput;
use aws_sdk_s3control::operation::tag_resource::TagResourceOutput;
use aws_smithy_mocks_experimental::{mock, Rule, RuleMode};
use aws_smithy_types::error::ErrorMetadata;
use serde_json::{json, Value};
use test_common::{
    access_grants_page, caller_grants_error_rule, caller_grants_page, caller_grants_rule,
    mock_client_with_stubbed_http_client, ACCOUNT_ID,
};

fn client_with_rules(rules: &[&Rule], mode: IterationMode) -> Client {
    let s3control =
        mock_client_with_stubbed_http_client!(aws_sdk_s3control, RuleMode::Sequential, rules);
    let config = Config::builder()
        .client(s3control)
        .account_id(ACCOUNT_ID)
        .iteration_mode(mode)
        .build();
    Client::new(config)
}

fn grant_scopes(records: &[Value]) -> Vec<&str> {
    records
        .iter()
        .map(|r| r["GrantScope"].as_str().expect("grant scope"))
        .collect()
}

#[tokio::test]
async fn test_auto_iteration_unions_all_pages() {
    let page1 = caller_grants_rule(None, caller_grants_page(&["s3://a/*", "s3://b/*"], Some("t1")));
    let page2 = caller_grants_rule(Some("t1"), caller_grants_page(&["s3://c/*"], Some("t2")));
    let page3 = caller_grants_rule(Some("t2"), caller_grants_page(&["s3://d/*"], None));
    let client = client_with_rules(&[&page1, &page2, &page3], IterationMode::Auto);

    let mut records = Vec::new();
    let output = client
        .invoke(ListCallerAccessGrants::default())
        .send(&mut records)
        .await
        .unwrap();

    assert_eq!(
        vec!["s3://a/*", "s3://b/*", "s3://c/*", "s3://d/*"],
        grant_scopes(&records)
    );
    assert_eq!(3, output.pages_fetched());
    assert_eq!(4, output.records_written());
    assert_eq!(None, output.next_token());
    assert_eq!(1, page1.num_calls());
    assert_eq!(1, page2.num_calls());
    assert_eq!(1, page3.num_calls());
}

#[tokio::test]
async fn test_single_page_without_token() {
    let page = caller_grants_rule(None, caller_grants_page(&["s3://a/*"], None));
    let client = client_with_rules(&[&page], IterationMode::Auto);

    let mut records = Vec::new();
    let output = client
        .invoke(ListCallerAccessGrants::default())
        .send(&mut records)
        .await
        .unwrap();

    assert_eq!(vec!["s3://a/*"], grant_scopes(&records));
    assert_eq!(1, output.pages_fetched());
    assert_eq!(1, page.num_calls());
}

#[tokio::test]
async fn test_empty_token_ends_iteration() {
    let page = caller_grants_rule(None, caller_grants_page(&["s3://a/*"], Some("")));
    let client = client_with_rules(&[&page], IterationMode::Auto);

    let mut records = Vec::new();
    let output = client
        .invoke(ListCallerAccessGrants::default())
        .send(&mut records)
        .await
        .unwrap();

    assert_eq!(1, output.pages_fetched());
    assert_eq!(None, output.next_token());
}

#[tokio::test]
async fn test_explicit_token_disables_auto_iteration() {
    let page = caller_grants_rule(Some("t1"), caller_grants_page(&["s3://c/*"], Some("t2")));
    let client = client_with_rules(&[&page], IterationMode::Auto);

    let op = ListCallerAccessGrants {
        paging: PagingInput {
            next_token: Some("t1".to_owned()),
            max_results: Some(1),
        },
        ..Default::default()
    };
    let mut records = Vec::new();
    let output = client.invoke(op).send(&mut records).await.unwrap();

    assert_eq!(vec!["s3://c/*"], grant_scopes(&records));
    assert_eq!(1, output.pages_fetched());
    assert_eq!(Some("t2"), output.next_token());
    assert_eq!(1, page.num_calls());
}

#[tokio::test]
async fn test_empty_starting_token_is_not_sent() {
    let page = caller_grants_rule(None, caller_grants_page(&["s3://a/*"], Some("t1")));
    let client = client_with_rules(&[&page], IterationMode::Auto);

    let op = ListCallerAccessGrants {
        paging: PagingInput {
            next_token: Some(String::new()),
            max_results: None,
        },
        ..Default::default()
    };
    let mut records = Vec::new();
    let output = client.invoke(op).send(&mut records).await.unwrap();

    assert_eq!(1, output.pages_fetched());
    assert_eq!(Some("t1"), output.next_token());
}

#[tokio::test]
async fn test_no_auto_iteration_and_legacy_mode_fetch_one_page() {
    let page = caller_grants_rule(None, caller_grants_page(&["s3://a/*"], Some("t1")));
    let client = client_with_rules(&[&page], IterationMode::Auto);
    let mut records = Vec::new();
    let output = client
        .invoke(ListCallerAccessGrants::default())
        .no_auto_iteration(true)
        .send(&mut records)
        .await
        .unwrap();
    assert_eq!(1, output.pages_fetched());
    assert_eq!(Some("t1"), output.next_token());

    let page = caller_grants_rule(None, caller_grants_page(&["s3://a/*"], Some("t1")));
    let client = client_with_rules(&[&page], IterationMode::Legacy);
    let mut records = Vec::new();
    let output = client
        .invoke(ListCallerAccessGrants::default())
        .send(&mut records)
        .await
        .unwrap();
    assert_eq!(1, output.pages_fetched());
    assert_eq!(Some("t1"), output.next_token());
    assert_eq!(1, page.num_calls());
}

#[tokio::test]
async fn test_failure_keeps_earlier_pages() {
    let page1 = caller_grants_rule(None, caller_grants_page(&["s3://a/*"], Some("t1")));
    let page2 = caller_grants_error_rule(Some("t1"), "AccessDenied");
    let page3 = caller_grants_rule(Some("t2"), caller_grants_page(&["s3://c/*"], None));
    let client = client_with_rules(&[&page1, &page2, &page3], IterationMode::Auto);

    let mut records = Vec::new();
    let err = client
        .invoke(ListCallerAccessGrants::default())
        .send(&mut records)
        .await
        .unwrap_err();

    assert_eq!(
        &ErrorKind::ServiceError,
        err.kind(),
        "{}",
        DisplayErrorContext(&err)
    );
    assert_eq!(vec!["s3://a/*"], grant_scopes(&records));
    assert_eq!(1, page1.num_calls());
    assert_eq!(1, page2.num_calls());
    assert_eq!(0, page3.num_calls());
}

#[tokio::test]
async fn test_select_response_emits_last_page() {
    let page1 = caller_grants_rule(None, caller_grants_page(&["s3://a/*"], Some("t1")));
    let page2 = caller_grants_rule(Some("t1"), caller_grants_page(&["s3://b/*"], None));
    let client = client_with_rules(&[&page1, &page2], IterationMode::Auto);

    let mut records = Vec::new();
    let output = client
        .invoke(ListCallerAccessGrants::default())
        .select(Select::Response)
        .send(&mut records)
        .await
        .unwrap();

    assert_eq!(2, output.pages_fetched());
    assert_eq!(1, records.len());
    assert_eq!(
        "s3://b/*",
        records[0]["CallerAccessGrantsList"][0]["GrantScope"]
    );
}

#[tokio::test]
async fn test_select_parameter_emits_bound_value_once() {
    let page1 = caller_grants_rule(None, caller_grants_page(&["s3://a/*"], Some("t1")));
    let page2 = caller_grants_rule(Some("t1"), caller_grants_page(&["s3://b/*"], None));
    let client = client_with_rules(&[&page1, &page2], IterationMode::Auto);

    let op = ListCallerAccessGrants {
        grant_scope: Some("s3://a/*".to_owned()),
        ..Default::default()
    };
    let mut records = Vec::new();
    client
        .invoke(op)
        .select("^GrantScope".parse().unwrap())
        .send(&mut records)
        .await
        .unwrap();

    assert_eq!(vec![json!("s3://a/*")], records);
    assert_eq!(1, page2.num_calls());
}

#[tokio::test]
async fn test_unknown_select_rejected_before_any_call() {
    let page = caller_grants_rule(None, caller_grants_page(&["s3://a/*"], None));
    let client = client_with_rules(&[&page], IterationMode::Auto);

    let mut records = Vec::new();
    let err = client
        .invoke(ListCallerAccessGrants::default())
        .select(Select::Field("Grants".to_owned()))
        .send(&mut records)
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::InputInvalid, err.kind());
    assert!(records.is_empty());
    assert_eq!(0, page.num_calls());
}

#[tokio::test]
async fn test_missing_account_id() {
    let page = caller_grants_rule(None, caller_grants_page(&["s3://a/*"], None));
    let s3control =
        mock_client_with_stubbed_http_client!(aws_sdk_s3control, RuleMode::Sequential, &[&page]);
    let client = Client::new(Config::builder().client(s3control).build());

    let mut records = Vec::new();
    let err = client
        .invoke(ListCallerAccessGrants::default())
        .send(&mut records)
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::InputInvalid, err.kind());
    assert_eq!(0, page.num_calls());
}

#[tokio::test]
async fn test_explicit_account_id_overrides_config() {
    let page = mock!(aws_sdk_s3control::Client::list_access_grants)
        .match_requests(|r| r.account_id() == Some("444455556666"))
        .then_output(|| access_grants_page(&["grant-1"], None));
    let client = client_with_rules(&[&page], IterationMode::Auto);

    let op = ListAccessGrants {
        account_id: Some("444455556666".to_owned()),
        ..Default::default()
    };
    let mut records = Vec::new();
    client.invoke(op).send(&mut records).await.unwrap();

    assert_eq!(1, records.len());
    assert_eq!("grant-1", records[0]["AccessGrantId"]);
    assert_eq!("IAM", records[0]["Grantee"]["GranteeType"]);
}

#[tokio::test]
async fn test_stop_processing_cancels_invocation() {
    let page = mock!(aws_sdk_s3control::Client::list_access_grants)
        .then_output(|| ListAccessGrantsOutput::builder().build());
    let client = client_with_rules(&[&page], IterationMode::Auto);
    client.stop_processing();
    assert!(client.is_stopping());

    let mut records = Vec::new();
    let err = client
        .invoke(ListAccessGrants::default())
        .send(&mut records)
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::OperationCancelled, err.kind());
    assert_eq!(0, page.num_calls());
}

fn tag_resource_rule() -> Rule {
    mock!(aws_sdk_s3control::Client::tag_resource)
        .match_requests(|r| format!("{:?}", r.tags()).contains("\"env\""))
        .then_output(|| TagResourceOutput::builder().build())
}

fn tag_resource_op() -> TagResource {
    TagResource {
        resource_arn: format!("arn:aws:s3:us-east-1:{ACCOUNT_ID}:access-grants/default"),
        tags: vec![Tag::new("env", "prod")],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_declined_confirmation_sends_nothing() {
    let rule = tag_resource_rule();
    let client = client_with_rules(&[&rule], IterationMode::Auto);

    let prompts = Arc::new(AtomicUsize::new(0));
    let counter = prompts.clone();
    let mut records = Vec::new();
    let output = client
        .invoke(tag_resource_op())
        .confirm(move |operation: &str, target: &str| {
            assert_eq!("TagResource", operation);
            assert!(target.ends_with(":access-grants/default"));
            counter.fetch_add(1, Ordering::SeqCst);
            false
        })
        .send(&mut records)
        .await
        .unwrap();

    assert!(output.declined());
    assert_eq!(1, prompts.load(Ordering::SeqCst));
    assert_eq!(0, output.pages_fetched());
    assert_eq!(0, rule.num_calls());
}

#[tokio::test]
async fn test_invalid_input_rejected_before_confirmation() {
    let rule = tag_resource_rule();
    let s3control =
        mock_client_with_stubbed_http_client!(aws_sdk_s3control, RuleMode::Sequential, &[&rule]);
    let client = Client::new(Config::builder().client(s3control).build());

    let prompts = Arc::new(AtomicUsize::new(0));
    let counter = prompts.clone();
    let mut records = Vec::new();
    let err = client
        .invoke(tag_resource_op())
        .confirm(move |_: &str, _: &str| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        })
        .send(&mut records)
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::InputInvalid, err.kind());

    let client = client_with_rules(&[&rule], IterationMode::Auto);
    let counter = prompts.clone();
    let op = TagResource {
        tags: Vec::new(),
        ..tag_resource_op()
    };
    let err = client
        .invoke(op)
        .confirm(move |_: &str, _: &str| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        })
        .send(&mut records)
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::InputInvalid, err.kind());

    assert_eq!(0, prompts.load(Ordering::SeqCst));
    assert_eq!(0, rule.num_calls());
}

#[tokio::test]
async fn test_accepted_confirmation_sends_request() {
    let rule = tag_resource_rule();
    let client = client_with_rules(&[&rule], IterationMode::Auto);

    let mut records = Vec::new();
    let output = client
        .invoke(tag_resource_op())
        .confirm(|operation: &str, _target: &str| operation == "TagResource")
        .send(&mut records)
        .await
        .unwrap();

    assert!(!output.declined());
    assert_eq!(1, rule.num_calls());
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_force_skips_confirmation() {
    let rule = tag_resource_rule();
    let client = client_with_rules(&[&rule], IterationMode::Auto);

    let mut records = Vec::new();
    let output = client
        .invoke(tag_resource_op())
        .force(true)
        .confirm(|_: &str, _: &str| -> bool { panic!("confirmation must not be requested") })
        .send(&mut records)
        .await
        .unwrap();

    assert!(!output.declined());
    assert_eq!(1, rule.num_calls());
}

#[tokio::test]
async fn test_get_bucket_policy() {
    let rule = mock!(aws_sdk_s3control::Client::get_bucket_policy)
        .match_requests(|r| r.bucket() == Some("my-bucket") && r.account_id() == Some(ACCOUNT_ID))
        .then_output(|| {
            GetBucketPolicyOutput::builder()
                .policy(r#"{"Version":"2012-10-17"}"#)
                .build()
        });
    let client = client_with_rules(&[&rule], IterationMode::Auto);

    let op = GetBucketPolicy {
        bucket: "my-bucket".to_owned(),
        ..Default::default()
    };
    let mut records = Vec::new();
    client.invoke(op).send(&mut records).await.unwrap();

    assert_eq!(vec![json!(r#"{"Version":"2012-10-17"}"#)], records);
}

#[tokio::test]
async fn test_missing_bucket_policy_is_not_found() {
    let rule = mock!(aws_sdk_s3control::Client::get_bucket_policy).then_error(|| {
        GetBucketPolicyError::generic(ErrorMetadata::builder().code("NoSuchBucketPolicy").build())
    });
    let client = client_with_rules(&[&rule], IterationMode::Auto);

    let op = GetBucketPolicy {
        bucket: "my-bucket".to_owned(),
        ..Default::default()
    };
    let mut records = Vec::new();
    let err = client.invoke(op).send(&mut records).await.unwrap_err();

    assert_eq!(&ErrorKind::NotFound, err.kind());
    assert!(records.is_empty());
}
