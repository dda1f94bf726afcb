/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Command line cmdlets for the Amazon S3 Control API.
//!
//! Every cmdlet wraps exactly one S3 Control operation: bound parameters are copied into the
//! SDK request, the request is sent, and the response is projected onto a pipeline of JSON
//! records. List operations are paginated automatically unless the caller takes control of
//! the continuation token.
//!
//! # Examples
//!
//! List every access grant that authorizes the caller, across all pages:
//!
//! ```no_run
//! # async fn example() -> Result<(), aws_s3_control_cmdlets::error::Error> {
//! use aws_s3_control_cmdlets::operation::list_caller_access_grants::ListCallerAccessGrants;
//! use aws_s3_control_cmdlets::pipeline::JsonLines;
//!
//! let config = aws_s3_control_cmdlets::from_env()
//!     .account_id(Some("111122223333".to_owned()))
//!     .load()
//!     .await;
//! let client = aws_s3_control_cmdlets::Client::new(config);
//!
//! let mut stdout = JsonLines::new(std::io::stdout());
//! client
//!     .invoke(ListCallerAccessGrants::default())
//!     .send(&mut stdout)
//!     .await?;
//! # Ok(())
//! # }
//! ```

/// Error types emitted by `aws-s3-control-cmdlets`
pub mod error;

/// Common types used by `aws-s3-control-cmdlets`
pub mod types;

/// Cmdlet client
pub mod client;

/// Cmdlet configuration
pub mod config;

/// S3 Control operations
pub mod operation;

/// Pipeline output sinks
pub mod pipeline;

/// Confirmation of mutating operations
pub mod confirm;

/// Command line interface
pub mod cli;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
