/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use async_trait::async_trait;
use aws_sdk_s3control::operation::delete_bucket_policy::DeleteBucketPolicyOutput;
use serde_json::{json, Value};

use crate::error::Error;

use super::{Operation, OperationContext};

/// Delete the bucket policy of an S3 on Outposts bucket.
#[derive(Debug, Clone, Default)]
pub struct DeleteBucketPolicy {
    /// The account that owns the bucket.
    pub account_id: Option<String>,

    /// The bucket name or ARN.
    pub bucket: String,
}

#[async_trait]
impl Operation for DeleteBucketPolicy {
    type Output = DeleteBucketPolicyOutput;

    const NAME: &'static str = "DeleteBucketPolicy";
    const DEFAULT_SELECT: Option<&'static str> = None;
    const OUTPUT_FIELDS: &'static [&'static str] = &[];

    fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    fn parameters(&self) -> Value {
        json!({
            "AccountId": self.account_id,
            "Bucket": self.bucket,
        })
    }

    fn confirm_target(&self) -> Option<String> {
        Some(self.bucket.clone())
    }

    async fn send(
        &self,
        ctx: &OperationContext,
        _next_token: Option<String>,
    ) -> Result<Self::Output, Error> {
        let output = ctx
            .client()
            .delete_bucket_policy()
            .account_id(ctx.account_id(self.account_id.as_deref())?)
            .bucket(&self.bucket)
            .send()
            .await?;
        Ok(output)
    }

    fn to_record(_output: &Self::Output) -> Value {
        json!({})
    }
}
