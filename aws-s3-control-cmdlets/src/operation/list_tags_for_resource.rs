/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use async_trait::async_trait;
use aws_sdk_s3control::operation::list_tags_for_resource::ListTagsForResourceOutput;
use serde_json::{json, Value};

use crate::error::Error;

use super::{Operation, OperationContext};

/// List the tags attached to an S3 Control resource (access grants, instances, locations,
/// Storage Lens groups, ...).
#[derive(Debug, Clone, Default)]
pub struct ListTagsForResource {
    /// The account that owns the resource.
    pub account_id: Option<String>,

    /// The ARN of the resource.
    pub resource_arn: String,
}

#[async_trait]
impl Operation for ListTagsForResource {
    type Output = ListTagsForResourceOutput;

    const NAME: &'static str = "ListTagsForResource";
    const DEFAULT_SELECT: Option<&'static str> = Some("Tags");
    const OUTPUT_FIELDS: &'static [&'static str] = &["Tags"];

    fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    fn parameters(&self) -> Value {
        json!({
            "AccountId": self.account_id,
            "ResourceArn": self.resource_arn,
        })
    }

    async fn send(
        &self,
        ctx: &OperationContext,
        _next_token: Option<String>,
    ) -> Result<Self::Output, Error> {
        let output = ctx
            .client()
            .list_tags_for_resource()
            .account_id(ctx.account_id(self.account_id.as_deref())?)
            .resource_arn(&self.resource_arn)
            .send()
            .await?;
        Ok(output)
    }

    fn to_record(output: &Self::Output) -> Value {
        let tags: Vec<Value> = output
            .tags()
            .iter()
            .map(|tag| json!({"Key": tag.key(), "Value": tag.value()}))
            .collect();
        json!({ "Tags": tags })
    }
}
