/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::PathBuf;

use crate::error::{self, Error};
use crate::operation::delete_bucket_policy::DeleteBucketPolicy;
use crate::operation::get_bucket_policy::GetBucketPolicy;
use crate::operation::invoke::{InvokeFluentBuilder, InvokeOutput};
use crate::operation::list_access_grants::ListAccessGrants;
use crate::operation::list_access_grants_locations::ListAccessGrantsLocations;
use crate::operation::list_access_points::ListAccessPoints;
use crate::operation::list_caller_access_grants::ListCallerAccessGrants;
use crate::operation::list_jobs::ListJobs;
use crate::operation::list_tags_for_resource::ListTagsForResource;
use crate::operation::put_bucket_policy::PutBucketPolicy;
use crate::operation::tag_resource::TagResource;
use crate::operation::untag_resource::UntagResource;
use crate::operation::Operation;
use crate::pipeline::Pipeline;
use crate::types::{IterationMode, PagingInput, Select, Tag};
use crate::Client;

/// Command line arguments for the `s3control` binary
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "s3control")]
#[command(about = "Cmdlets for the Amazon S3 Control API. Records are written to stdout as JSON lines.")]
pub struct Cli {
    /// Options shared by every cmdlet
    #[command(flatten)]
    pub global: GlobalArgs,

    /// The cmdlet to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every cmdlet
#[derive(Debug, Clone, clap::Args)]
pub struct GlobalArgs {
    /// The account id owning the resources
    #[arg(long, global = true, env = "AWS_ACCOUNT_ID")]
    pub account_id: Option<String>,

    /// Region to send requests to (defaults to the environment or profile region)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Named profile from the shared config and credentials files
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Override the S3 Control endpoint
    #[arg(long, global = true)]
    pub endpoint_url: Option<String>,

    /// Pagination behavior: `auto` follows every NextToken, `legacy` returns one page per call
    #[arg(
        long,
        global = true,
        env = "S3CONTROL_ITERATION_MODE",
        default_value = "auto"
    )]
    pub iteration_mode: IterationMode,

    /// What to write to the pipeline: a response field name, `*` for the whole response, or
    /// `^ParameterName` for a parameter value
    #[arg(long, global = true)]
    pub select: Option<Select>,
}

/// Pagination options for list cmdlets
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PagingArgs {
    /// Continuation token from a previous call. Supplying it disables auto-iteration.
    #[arg(long)]
    pub next_token: Option<String>,

    /// Maximum number of results per page
    #[arg(long)]
    pub max_results: Option<i32>,

    /// Only request a single page
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    pub no_auto_iteration: bool,
}

impl PagingArgs {
    fn input(&self) -> PagingInput {
        PagingInput {
            next_token: self.next_token.clone(),
            max_results: self.max_results,
        }
    }
}

/// Confirmation options for mutating cmdlets
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ForceArgs {
    /// Do not ask for confirmation
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    pub force: bool,
}

/// Available cmdlets
#[derive(Debug, Clone, clap::Subcommand)]
pub enum Command {
    /// List the access grants that authorize the caller
    ListCallerAccessGrants {
        /// S3 path the grants must cover, e.g. s3://bucket/prefix*
        #[arg(long)]
        grant_scope: Option<String>,

        /// Only grants the calling application may use
        #[arg(long)]
        allowed_by_application: Option<bool>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List the access grants in an S3 Access Grants instance
    ListAccessGrants {
        /// Grantee type: IAM, DIRECTORY_USER or DIRECTORY_GROUP
        #[arg(long)]
        grantee_type: Option<String>,

        /// Grantee identifier
        #[arg(long)]
        grantee_identifier: Option<String>,

        /// Permission: READ, WRITE or READWRITE
        #[arg(long)]
        permission: Option<String>,

        /// S3 path the grant applies to
        #[arg(long)]
        grant_scope: Option<String>,

        /// Application ARN the grant is associated with
        #[arg(long)]
        application_arn: Option<String>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List the locations registered in an S3 Access Grants instance
    ListAccessGrantsLocations {
        /// S3 path of the location
        #[arg(long)]
        location_scope: Option<String>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List access points
    ListAccessPoints {
        /// Only access points attached to this bucket
        #[arg(long)]
        bucket: Option<String>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List S3 Batch Operations jobs
    ListJobs {
        /// Job status filter, may be repeated
        #[arg(long = "job-status")]
        job_statuses: Vec<String>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List the tags of a resource
    ListTagsForResource {
        /// Resource ARN
        #[arg(long, required = true)]
        resource_arn: String,
    },

    /// Add tags to a resource
    TagResource {
        /// Resource ARN
        #[arg(long, required = true)]
        resource_arn: String,

        /// Tag in Key=Value form, may be repeated
        #[arg(long = "tag", required = true)]
        tags: Vec<Tag>,

        #[command(flatten)]
        force: ForceArgs,
    },

    /// Remove tags from a resource
    UntagResource {
        /// Resource ARN
        #[arg(long, required = true)]
        resource_arn: String,

        /// Tag key to remove, may be repeated
        #[arg(long = "tag-key", required = true)]
        tag_keys: Vec<String>,

        #[command(flatten)]
        force: ForceArgs,
    },

    /// Get a bucket policy
    GetBucketPolicy {
        /// Bucket name or ARN
        #[arg(long, required = true)]
        bucket: String,
    },

    /// Replace a bucket policy
    PutBucketPolicy {
        /// Bucket name or ARN
        #[arg(long, required = true)]
        bucket: String,

        /// Policy document
        #[arg(long, conflicts_with = "policy_file", required_unless_present = "policy_file")]
        policy: Option<String>,

        /// Read the policy document from a file
        #[arg(long)]
        policy_file: Option<PathBuf>,

        /// Allow the policy to lock the caller out of the bucket
        #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
        confirm_remove_self_bucket_access: bool,

        #[command(flatten)]
        force: ForceArgs,
    },

    /// Delete a bucket policy
    DeleteBucketPolicy {
        /// Bucket name or ARN
        #[arg(long, required = true)]
        bucket: String,

        #[command(flatten)]
        force: ForceArgs,
    },
}

/// Run the cmdlet named on the command line, writing records to `pipeline`.
pub async fn run(
    cli: Cli,
    client: &Client,
    pipeline: &mut dyn Pipeline,
) -> Result<InvokeOutput, Error> {
    let select = cli.global.select.unwrap_or_default();
    let invocation = Invocation {
        select,
        pipeline,
    };

    match cli.command {
        Command::ListCallerAccessGrants {
            grant_scope,
            allowed_by_application,
            paging,
        } => {
            let op = ListCallerAccessGrants {
                account_id: None,
                grant_scope,
                allowed_by_application,
                paging: paging.input(),
            };
            let builder = client.invoke(op).no_auto_iteration(paging.no_auto_iteration);
            invocation.send(builder).await
        }
        Command::ListAccessGrants {
            grantee_type,
            grantee_identifier,
            permission,
            grant_scope,
            application_arn,
            paging,
        } => {
            let op = ListAccessGrants {
                account_id: None,
                grantee_type,
                grantee_identifier,
                permission,
                grant_scope,
                application_arn,
                paging: paging.input(),
            };
            let builder = client.invoke(op).no_auto_iteration(paging.no_auto_iteration);
            invocation.send(builder).await
        }
        Command::ListAccessGrantsLocations {
            location_scope,
            paging,
        } => {
            let op = ListAccessGrantsLocations {
                account_id: None,
                location_scope,
                paging: paging.input(),
            };
            let builder = client.invoke(op).no_auto_iteration(paging.no_auto_iteration);
            invocation.send(builder).await
        }
        Command::ListAccessPoints { bucket, paging } => {
            let op = ListAccessPoints {
                account_id: None,
                bucket,
                paging: paging.input(),
            };
            let builder = client.invoke(op).no_auto_iteration(paging.no_auto_iteration);
            invocation.send(builder).await
        }
        Command::ListJobs {
            job_statuses,
            paging,
        } => {
            let op = ListJobs {
                account_id: None,
                job_statuses,
                paging: paging.input(),
            };
            let builder = client.invoke(op).no_auto_iteration(paging.no_auto_iteration);
            invocation.send(builder).await
        }
        Command::ListTagsForResource { resource_arn } => {
            let op = ListTagsForResource {
                account_id: None,
                resource_arn,
            };
            invocation.send(client.invoke(op)).await
        }
        Command::TagResource {
            resource_arn,
            tags,
            force,
        } => {
            let op = TagResource {
                account_id: None,
                resource_arn,
                tags,
            };
            invocation.send(client.invoke(op).force(force.force)).await
        }
        Command::UntagResource {
            resource_arn,
            tag_keys,
            force,
        } => {
            let op = UntagResource {
                account_id: None,
                resource_arn,
                tag_keys,
            };
            invocation.send(client.invoke(op).force(force.force)).await
        }
        Command::GetBucketPolicy { bucket } => {
            let op = GetBucketPolicy {
                account_id: None,
                bucket,
            };
            invocation.send(client.invoke(op)).await
        }
        Command::PutBucketPolicy {
            bucket,
            policy,
            policy_file,
            confirm_remove_self_bucket_access,
            force,
        } => {
            let policy = match (policy, policy_file) {
                (Some(policy), _) => policy,
                (None, Some(path)) => tokio::fs::read_to_string(&path).await.map_err(|err| {
                    error::invalid_input(format!(
                        "unable to read policy file {}: {err}",
                        path.display()
                    ))
                })?,
                (None, None) => return Err(error::invalid_input("a policy document is required")),
            };
            let op = PutBucketPolicy {
                account_id: None,
                bucket,
                policy,
                confirm_remove_self_bucket_access,
            };
            invocation.send(client.invoke(op).force(force.force)).await
        }
        Command::DeleteBucketPolicy { bucket, force } => {
            let op = DeleteBucketPolicy {
                account_id: None,
                bucket,
            };
            invocation.send(client.invoke(op).force(force.force)).await
        }
    }
}

/// Options applied to every cmdlet run from the command line
struct Invocation<'a> {
    select: Select,
    pipeline: &'a mut dyn Pipeline,
}

impl Invocation<'_> {
    async fn send<O: Operation>(self, builder: InvokeFluentBuilder<O>) -> Result<InvokeOutput, Error> {
        builder.select(self.select).send(self.pipeline).await
    }
}
