/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use async_trait::async_trait;
use aws_sdk_s3control::operation::tag_resource::TagResourceOutput;
use serde_json::{json, Value};

use crate::error::{self, Error};
use crate::types::Tag;

use super::{Operation, OperationContext};

/// Add or replace tags on an S3 Control resource.
#[derive(Debug, Clone, Default)]
pub struct TagResource {
    /// The account that owns the resource.
    pub account_id: Option<String>,

    /// The ARN of the resource to tag.
    pub resource_arn: String,

    /// The tags to add. Existing tags with the same keys are overwritten.
    pub tags: Vec<Tag>,
}

#[async_trait]
impl Operation for TagResource {
    type Output = TagResourceOutput;

    const NAME: &'static str = "TagResource";
    const DEFAULT_SELECT: Option<&'static str> = None;
    const OUTPUT_FIELDS: &'static [&'static str] = &[];

    fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    fn parameters(&self) -> Value {
        let tags: Vec<Value> = self
            .tags
            .iter()
            .map(|tag| json!({"Key": tag.key(), "Value": tag.value()}))
            .collect();
        json!({
            "AccountId": self.account_id,
            "ResourceArn": self.resource_arn,
            "Tag": tags,
        })
    }

    fn validate(&self) -> Result<(), Error> {
        if self.tags.is_empty() {
            return Err(error::invalid_input("at least one tag is required"));
        }
        Ok(())
    }

    fn confirm_target(&self) -> Option<String> {
        Some(self.resource_arn.clone())
    }

    async fn send(
        &self,
        ctx: &OperationContext,
        _next_token: Option<String>,
    ) -> Result<Self::Output, Error> {
        let tags = self
            .tags
            .iter()
            .map(aws_sdk_s3control::types::Tag::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let output = ctx
            .client()
            .tag_resource()
            .account_id(ctx.account_id(self.account_id.as_deref())?)
            .resource_arn(&self.resource_arn)
            .set_tags(Some(tags))
            .send()
            .await?;
        Ok(output)
    }

    fn to_record(_output: &Self::Output) -> Value {
        json!({})
    }
}
