/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use async_trait::async_trait;
use aws_sdk_s3control::operation::list_access_points::ListAccessPointsOutput;
use aws_sdk_s3control::types::AccessPoint;
use serde_json::{json, Value};

use crate::error::Error;
use crate::types::PagingInput;

use super::{Operation, OperationContext};

/// List the access points owned by an account, optionally limited to a single bucket.
#[derive(Debug, Clone, Default)]
pub struct ListAccessPoints {
    /// The account that owns the access points.
    pub account_id: Option<String>,

    /// Only return access points attached to this bucket.
    pub bucket: Option<String>,

    /// Continuation and page size parameters
    pub paging: PagingInput,
}

#[async_trait]
impl Operation for ListAccessPoints {
    type Output = ListAccessPointsOutput;

    const NAME: &'static str = "ListAccessPoints";
    const DEFAULT_SELECT: Option<&'static str> = Some("AccessPointList");
    const OUTPUT_FIELDS: &'static [&'static str] = &["AccessPointList", "NextToken"];

    fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    fn parameters(&self) -> Value {
        json!({
            "AccountId": self.account_id,
            "Bucket": self.bucket,
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
            .list_access_points()
            .account_id(ctx.account_id(self.account_id.as_deref())?)
            .set_bucket(self.bucket.clone())
            .set_max_results(self.paging.max_results)
            .set_next_token(next_token)
            .send()
            .await?;
        Ok(output)
    }

    fn to_record(output: &Self::Output) -> Value {
        let access_points: Vec<Value> = output
            .access_point_list()
            .iter()
            .map(access_point_record)
            .collect();
        json!({
            "AccessPointList": access_points,
            "NextToken": output.next_token(),
        })
    }

    fn next_token(output: &Self::Output) -> Option<&str> {
        output.next_token()
    }
}

fn access_point_record(access_point: &AccessPoint) -> Value {
    json!({
        "Name": access_point.name(),
        "NetworkOrigin": access_point.network_origin().as_str(),
        "VpcId": access_point.vpc_configuration().map(|vpc| vpc.vpc_id()),
        "Bucket": access_point.bucket(),
        "AccessPointArn": access_point.access_point_arn(),
        "Alias": access_point.alias(),
        "BucketAccountId": access_point.bucket_account_id(),
    })
}
