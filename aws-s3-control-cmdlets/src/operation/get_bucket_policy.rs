/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use async_trait::async_trait;
use aws_sdk_s3control::operation::get_bucket_policy::GetBucketPolicyOutput;
use serde_json::{json, Value};

use crate::error::Error;

use super::{Operation, OperationContext};

/// Get the bucket policy of an S3 on Outposts bucket.
#[derive(Debug, Clone, Default)]
pub struct GetBucketPolicy {
    /// The account that owns the bucket.
    pub account_id: Option<String>,

    /// The bucket name or ARN.
    pub bucket: String,
}

#[async_trait]
impl Operation for GetBucketPolicy {
    type Output = GetBucketPolicyOutput;

    const NAME: &'static str = "GetBucketPolicy";
    const DEFAULT_SELECT: Option<&'static str> = Some("Policy");
    const OUTPUT_FIELDS: &'static [&'static str] = &["Policy"];

    fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    fn parameters(&self) -> Value {
        json!({
            "AccountId": self.account_id,
            "Bucket": self.bucket,
        })
    }

    async fn send(
        &self,
        ctx: &OperationContext,
        _next_token: Option<String>,
    ) -> Result<Self::Output, Error> {
        let output = ctx
            .client()
            .get_bucket_policy()
            .account_id(ctx.account_id(self.account_id.as_deref())?)
            .bucket(&self.bucket)
            .send()
            .await?;
        Ok(output)
    }

    fn to_record(output: &Self::Output) -> Value {
        json!({ "Policy": output.policy() })
    }
}
