/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use async_trait::async_trait;
use aws_sdk_s3control::operation::list_access_grants_locations::ListAccessGrantsLocationsOutput;
use aws_sdk_s3control::types::ListAccessGrantsLocationsEntry;
use serde_json::{json, Value};

use crate::error::Error;
use crate::types::PagingInput;

use super::{timestamp, Operation, OperationContext};

/// List the locations registered in an S3 Access Grants instance.
#[derive(Debug, Clone, Default)]
pub struct ListAccessGrantsLocations {
    /// The account that owns the S3 Access Grants instance.
    pub account_id: Option<String>,

    /// Only return the location registered for this S3 path.
    pub location_scope: Option<String>,

    /// Continuation and page size parameters
    pub paging: PagingInput,
}

#[async_trait]
impl Operation for ListAccessGrantsLocations {
    type Output = ListAccessGrantsLocationsOutput;

    const NAME: &'static str = "ListAccessGrantsLocations";
    const DEFAULT_SELECT: Option<&'static str> = Some("AccessGrantsLocationsList");
    const OUTPUT_FIELDS: &'static [&'static str] = &["AccessGrantsLocationsList", "NextToken"];

    fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    fn parameters(&self) -> Value {
        json!({
            "AccountId": self.account_id,
            "LocationScope": self.location_scope,
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
            .list_access_grants_locations()
            .account_id(ctx.account_id(self.account_id.as_deref())?)
            .set_location_scope(self.location_scope.clone())
            .set_max_results(self.paging.max_results)
            .set_next_token(next_token)
            .send()
            .await?;
        Ok(output)
    }

    fn to_record(output: &Self::Output) -> Value {
        let locations: Vec<Value> = output
            .access_grants_locations_list()
            .iter()
            .map(entry_record)
            .collect();
        json!({
            "AccessGrantsLocationsList": locations,
            "NextToken": output.next_token(),
        })
    }

    fn next_token(output: &Self::Output) -> Option<&str> {
        output.next_token()
    }
}

fn entry_record(entry: &ListAccessGrantsLocationsEntry) -> Value {
    json!({
        "CreatedAt": timestamp(entry.created_at()),
        "AccessGrantsLocationId": entry.access_grants_location_id(),
        "AccessGrantsLocationArn": entry.access_grants_location_arn(),
        "LocationScope": entry.location_scope(),
        "IAMRoleArn": entry.iam_role_arn(),
    })
}
