/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use async_trait::async_trait;
use aws_sdk_s3control::operation::untag_resource::UntagResourceOutput;
use serde_json::{json, Value};

use crate::error::{self, Error};

use super::{Operation, OperationContext};

/// Remove tags from an S3 Control resource.
#[derive(Debug, Clone, Default)]
pub struct UntagResource {
    /// The account that owns the resource.
    pub account_id: Option<String>,

    /// The ARN of the resource to untag.
    pub resource_arn: String,

    /// Keys of the tags to remove.
    pub tag_keys: Vec<String>,
}

#[async_trait]
impl Operation for UntagResource {
    type Output = UntagResourceOutput;

    const NAME: &'static str = "UntagResource";
    const DEFAULT_SELECT: Option<&'static str> = None;
    const OUTPUT_FIELDS: &'static [&'static str] = &[];

    fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    fn parameters(&self) -> Value {
        json!({
            "AccountId": self.account_id,
            "ResourceArn": self.resource_arn,
            "TagKey": self.tag_keys,
        })
    }

    fn validate(&self) -> Result<(), Error> {
        if self.tag_keys.iter().all(|key| key.is_empty()) {
            return Err(error::invalid_input("at least one tag key is required"));
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
        let output = ctx
            .client()
            .untag_resource()
            .account_id(ctx.account_id(self.account_id.as_deref())?)
            .resource_arn(&self.resource_arn)
            .set_tag_keys(Some(self.tag_keys.clone()))
            .send()
            .await?;
        Ok(output)
    }

    fn to_record(_output: &Self::Output) -> Value {
        json!({})
    }
}
