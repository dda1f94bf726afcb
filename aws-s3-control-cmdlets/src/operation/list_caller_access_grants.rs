/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use async_trait::async_trait;
use aws_sdk_s3control::operation::list_caller_access_grants::ListCallerAccessGrantsOutput;
use aws_sdk_s3control::types::ListCallerAccessGrantsEntry;
use serde_json::{json, Value};

use crate::error::Error;
use crate::types::PagingInput;

use super::{Operation, OperationContext};

/// List the access grants that authorize the caller to access a grant scope.
#[derive(Debug, Clone, Default)]
pub struct ListCallerAccessGrants {
    /// The account that owns the S3 Access Grants instance.
    pub account_id: Option<String>,

    /// Only return grants whose scope covers this S3 path, e.g. `s3://bucket/prefix*`.
    pub grant_scope: Option<String>,

    /// Only return grants that the calling application is allowed to use.
    pub allowed_by_application: Option<bool>,

    /// Continuation and page size parameters
    pub paging: PagingInput,
}

#[async_trait]
impl Operation for ListCallerAccessGrants {
    type Output = ListCallerAccessGrantsOutput;

    const NAME: &'static str = "ListCallerAccessGrants";
    const DEFAULT_SELECT: Option<&'static str> = Some("CallerAccessGrantsList");
    const OUTPUT_FIELDS: &'static [&'static str] = &["CallerAccessGrantsList", "NextToken"];

    fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    fn parameters(&self) -> Value {
        json!({
            "AccountId": self.account_id,
            "GrantScope": self.grant_scope,
            "AllowedByApplication": self.allowed_by_application,
            "NextToken": self.paging.next_token,
            "MaxResults": self.paging.max_results,
        })
    }

    fn paging(&self) -> Option<&PagingInput> {
        Some(&self.paging)
    }

    async fn send(
        &self,
        ctx: &OperationContext,
        next_token: Option<String>,
    ) -> Result<Self::Output, Error> {
        let output = ctx
            .client()
            .list_caller_access_grants()
            .account_id(ctx.account_id(self.account_id.as_deref())?)
            .set_grant_scope(self.grant_scope.clone())
            .set_allowed_by_application(self.allowed_by_application)
            .set_max_results(self.paging.max_results)
            .set_next_token(next_token)
            .send()
            .await?;
        Ok(output)
    }

    fn to_record(output: &Self::Output) -> Value {
        let grants: Vec<Value> = output
            .caller_access_grants_list()
            .iter()
            .map(entry_record)
            .collect();
        json!({
            "CallerAccessGrantsList": grants,
            "NextToken": output.next_token(),
        })
    }

    fn next_token(output: &Self::Output) -> Option<&str> {
        output.next_token()
    }
}

fn entry_record(entry: &ListCallerAccessGrantsEntry) -> Value {
    json!({
        "Permission": entry.permission().map(|p| p.as_str()),
        "GrantScope": entry.grant_scope(),
        "ApplicationArn": entry.application_arn(),
    })
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3control::operation::list_caller_access_grants::ListCallerAccessGrantsOutput;
    use aws_sdk_s3control::types::{ListCallerAccessGrantsEntry, Permission};
    use serde_json::json;

    use super::ListCallerAccessGrants;
    use crate::operation::Operation;

    #[test]
    fn test_to_record() {
        let output = ListCallerAccessGrantsOutput::builder()
            .caller_access_grants_list(
                ListCallerAccessGrantsEntry::builder()
                    .permission(Permission::Readwrite)
                    .grant_scope("s3://bucket/data/*")
                    .build(),
            )
            .next_token("token1")
            .build();

        let record = ListCallerAccessGrants::to_record(&output);
        assert_eq!(
            json!({
                "CallerAccessGrantsList": [
                    {"Permission": "READWRITE", "GrantScope": "s3://bucket/data/*", "ApplicationArn": null}
                ],
                "NextToken": "token1",
            }),
            record
        );
        assert_eq!(Some("token1"), ListCallerAccessGrants::next_token(&output));
    }
}
