/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::IterationMode;

pub(crate) mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    account_id: Option<String>,
    iteration_mode: IterationMode,
    client: aws_sdk_s3control::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The account id used when an operation does not name one explicitly.
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    /// Returns the iteration mode used by paginated operations.
    pub fn iteration_mode(&self) -> IterationMode {
        self.iteration_mode
    }

    /// The region the S3 Control client sends requests to, if known.
    pub fn region(&self) -> Option<&str> {
        self.client.config().region().map(|region| region.as_ref())
    }

    /// The Amazon S3 Control client instance that will be used to send requests.
    pub fn client(&self) -> &aws_sdk_s3control::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    account_id: Option<String>,
    iteration_mode: IterationMode,
    client: Option<aws_sdk_s3control::Client>,
}

impl Builder {
    /// Set the default account id to use for operations that do not set one.
    pub fn account_id(self, account_id: impl Into<String>) -> Self {
        self.set_account_id(Some(account_id.into()))
    }

    /// Set the default account id to use for operations that do not set one.
    pub fn set_account_id(mut self, account_id: Option<String>) -> Self {
        self.account_id = account_id.filter(|id| !id.is_empty());
        self
    }

    /// Set the iteration mode for paginated operations.
    ///
    /// Default is [IterationMode::Auto].
    pub fn iteration_mode(mut self, mode: IterationMode) -> Self {
        self.iteration_mode = mode;
        self
    }

    /// Set an explicit S3 Control client to use.
    pub fn client(mut self, client: aws_sdk_s3control::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    pub fn build(self) -> Config {
        Config {
            account_id: self.account_id,
            iteration_mode: self.iteration_mode,
            client: self.client.expect("client set"),
        }
    }
}
