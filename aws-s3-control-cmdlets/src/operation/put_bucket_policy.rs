/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use async_trait::async_trait;
use aws_sdk_s3control::operation::put_bucket_policy::PutBucketPolicyOutput;
use serde_json::{json, Value};

use crate::error::{self, Error};

use super::{Operation, OperationContext};

/// Apply a bucket policy to an S3 on Outposts bucket.
#[derive(Debug, Clone, Default)]
pub struct PutBucketPolicy {
    /// The account that owns the bucket.
    pub account_id: Option<String>,

    /// The bucket name or ARN.
    pub bucket: String,

    /// The policy document (JSON).
    pub policy: String,

    /// Allow the new policy to remove the caller's own access to the bucket.
    pub confirm_remove_self_bucket_access: bool,
}

#[async_trait]
impl Operation for PutBucketPolicy {
    type Output = PutBucketPolicyOutput;

    const NAME: &'static str = "PutBucketPolicy";
    const DEFAULT_SELECT: Option<&'static str> = None;
    const OUTPUT_FIELDS: &'static [&'static str] = &[];

    fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    fn parameters(&self) -> Value {
        json!({
            "AccountId": self.account_id,
            "Bucket": self.bucket,
            "Policy": self.policy,
            "ConfirmRemoveSelfBucketAccess": self.confirm_remove_self_bucket_access,
        })
    }

    fn validate(&self) -> Result<(), Error> {
        if self.policy.trim().is_empty() {
            return Err(error::invalid_input("a policy document is required"));
        }
        Ok(())
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
            .put_bucket_policy()
            .account_id(ctx.account_id(self.account_id.as_deref())?)
            .bucket(&self.bucket)
            .policy(&self.policy)
            .confirm_remove_self_bucket_access(self.confirm_remove_self_bucket_access)
            .send()
            .await?;
        Ok(output)
    }

    fn to_record(_output: &Self::Output) -> Value {
        json!({})
    }
}
