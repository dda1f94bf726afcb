/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_types::region::Region;

use crate::config::Builder;
use crate::types::IterationMode;
use crate::Config;

/// Load cmdlet [`Config`] from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    region: Option<String>,
    profile: Option<String>,
    endpoint_url: Option<String>,
}

impl ConfigLoader {
    /// Set the default account id to use for operations that do not set one.
    pub fn account_id(mut self, account_id: Option<String>) -> Self {
        self.builder = self.builder.set_account_id(account_id);
        self
    }

    /// Set the iteration mode for paginated operations.
    ///
    /// Default is [IterationMode::Auto].
    pub fn iteration_mode(mut self, mode: IterationMode) -> Self {
        self.builder = self.builder.iteration_mode(mode);
        self
    }

    /// Override the region resolved from the environment.
    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    /// Use the named profile from the shared config and credentials files.
    pub fn profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile;
        self
    }

    /// Send requests to the given endpoint instead of the resolved S3 Control endpoint.
    pub fn endpoint_url(mut self, endpoint_url: Option<String>) -> Self {
        self.endpoint_url = endpoint_url;
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default values for each field will be provided.
    pub async fn load(self) -> Config {
        let mut loader = aws_config::from_env();
        if let Some(region) = self.region {
            loader = loader.region(Region::new(region));
        }
        if let Some(profile) = self.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint_url) = self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let shared_config = loader.load().await;
        tracing::debug!(region = ?shared_config.region(), "loaded shared config");

        let client = aws_sdk_s3control::Client::new(&shared_config);
        self.builder.client(client).build()
    }
}
