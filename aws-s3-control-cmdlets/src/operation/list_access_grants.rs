/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use async_trait::async_trait;
use aws_sdk_s3control::operation::list_access_grants::ListAccessGrantsOutput;
use aws_sdk_s3control::types::{GranteeType, ListAccessGrantEntry, Permission};
use serde_json::{json, Value};

use crate::error::Error;
use crate::types::PagingInput;

use super::{check_known, timestamp, Operation, OperationContext};

/// List the access grants in an S3 Access Grants instance.
#[derive(Debug, Clone, Default)]
pub struct ListAccessGrants {
    /// The account that owns the S3 Access Grants instance.
    pub account_id: Option<String>,

    /// Filter by grantee type: `IAM`, `DIRECTORY_USER` or `DIRECTORY_GROUP`.
    pub grantee_type: Option<String>,

    /// Filter by grantee identifier.
    pub grantee_identifier: Option<String>,

    /// Filter by permission: `READ`, `WRITE` or `READWRITE`.
    pub permission: Option<String>,

    /// Filter by the S3 path the grant applies to.
    pub grant_scope: Option<String>,

    /// Filter by the ARN of the application the grant is associated with.
    pub application_arn: Option<String>,

    /// Continuation and page size parameters
    pub paging: PagingInput,
}

#[async_trait]
impl Operation for ListAccessGrants {
    type Output = ListAccessGrantsOutput;

    const NAME: &'static str = "ListAccessGrants";
    const DEFAULT_SELECT: Option<&'static str> = Some("AccessGrantsList");
    const OUTPUT_FIELDS: &'static [&'static str] = &["AccessGrantsList", "NextToken"];

    fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    fn parameters(&self) -> Value {
        json!({
            "AccountId": self.account_id,
            "GranteeType": self.grantee_type,
            "GranteeIdentifier": self.grantee_identifier,
            "Permission": self.permission,
            "GrantScope": self.grant_scope,
            "ApplicationArn": self.application_arn,
            "NextToken": self.paging.next_token,
            "MaxResults": self.paging.max_results,
        })
    }

    fn validate(&self) -> Result<(), Error> {
        if let Some(grantee_type) = &self.grantee_type {
            check_known("GranteeType", grantee_type, GranteeType::values())?;
        }
        if let Some(permission) = &self.permission {
            check_known("Permission", permission, Permission::values())?;
        }
        Ok(())
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
            .list_access_grants()
            .account_id(ctx.account_id(self.account_id.as_deref())?)
            .set_grantee_type(self.grantee_type.as_deref().map(GranteeType::from))
            .set_grantee_identifier(self.grantee_identifier.clone())
            .set_permission(self.permission.as_deref().map(Permission::from))
            .set_grant_scope(self.grant_scope.clone())
            .set_application_arn(self.application_arn.clone())
            .set_max_results(self.paging.max_results)
            .set_next_token(next_token)
            .send()
            .await?;
        Ok(output)
    }

    fn to_record(output: &Self::Output) -> Value {
        let grants: Vec<Value> = output
            .access_grants_list()
            .iter()
            .map(entry_record)
            .collect();
        json!({
            "AccessGrantsList": grants,
            "NextToken": output.next_token(),
        })
    }

    fn next_token(output: &Self::Output) -> Option<&str> {
        output.next_token()
    }
}

fn entry_record(entry: &ListAccessGrantEntry) -> Value {
    let grantee = entry.grantee().map(|grantee| {
        json!({
            "GranteeType": grantee.grantee_type().map(|t| t.as_str()),
            "GranteeIdentifier": grantee.grantee_identifier(),
        })
    });
    json!({
        "CreatedAt": timestamp(entry.created_at()),
        "AccessGrantId": entry.access_grant_id(),
        "AccessGrantArn": entry.access_grant_arn(),
        "Grantee": grantee,
        "Permission": entry.permission().map(|p| p.as_str()),
        "AccessGrantsLocationId": entry.access_grants_location_id(),
        "S3SubPrefix": entry
            .access_grants_location_configuration()
            .and_then(|config| config.s3_sub_prefix()),
        "GrantScope": entry.grant_scope(),
        "ApplicationArn": entry.application_arn(),
    })
}
