/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use async_trait::async_trait;
use aws_sdk_s3control::operation::list_jobs::ListJobsOutput;
use aws_sdk_s3control::types::{JobListDescriptor, JobStatus};
use serde_json::{json, Value};

use crate::error::Error;
use crate::types::PagingInput;

use super::{check_known, timestamp, Operation, OperationContext};

/// List the S3 Batch Operations jobs of an account.
#[derive(Debug, Clone, Default)]
pub struct ListJobs {
    /// The account that owns the jobs.
    pub account_id: Option<String>,

    /// Only return jobs in one of these states, e.g. `Active`, `Complete`, `Failed`.
    pub job_statuses: Vec<String>,

    /// Continuation and page size parameters
    pub paging: PagingInput,
}

#[async_trait]
impl Operation for ListJobs {
    type Output = ListJobsOutput;

    const NAME: &'static str = "ListJobs";
    const DEFAULT_SELECT: Option<&'static str> = Some("Jobs");
    const OUTPUT_FIELDS: &'static [&'static str] = &["Jobs", "NextToken"];

    fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    fn parameters(&self) -> Value {
        json!({
            "AccountId": self.account_id,
            "JobStatuses": self.job_statuses,
            "NextToken": self.paging.next_token,
            "MaxResults": self.paging.max_results,
        })
    }

    fn validate(&self) -> Result<(), Error> {
        self.job_statuses
            .iter()
            .try_for_each(|status| check_known("JobStatus", status, JobStatus::values()))
    }

    fn paging(&self) -> Option<&PagingInput> {
        Some(&self.paging)
    }

    async fn send(
        &self,
        ctx: &OperationContext,
        next_token: Option<String>,
    ) -> Result<Self::Output, Error> {
        let job_statuses = (!self.job_statuses.is_empty()).then(|| {
            self.job_statuses
                .iter()
                .map(|status| JobStatus::from(status.as_str()))
                .collect()
        });

        let output = ctx
            .client()
            .list_jobs()
            .account_id(ctx.account_id(self.account_id.as_deref())?)
            .set_job_statuses(job_statuses)
            .set_max_results(self.paging.max_results)
            .set_next_token(next_token)
            .send()
            .await?;
        Ok(output)
    }

    fn to_record(output: &Self::Output) -> Value {
        let jobs: Vec<Value> = output.jobs().iter().map(job_record).collect();
        json!({
            "Jobs": jobs,
            "NextToken": output.next_token(),
        })
    }

    fn next_token(output: &Self::Output) -> Option<&str> {
        output.next_token()
    }
}

fn job_record(job: &JobListDescriptor) -> Value {
    json!({
        "JobId": job.job_id(),
        "Description": job.description(),
        "Operation": job.operation().map(|op| op.as_str()),
        "Status": job.status().map(|status| status.as_str()),
        "CreationTime": timestamp(job.creation_time()),
        "TerminationDate": timestamp(job.termination_date()),
    })
}
