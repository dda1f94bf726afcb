/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::process::ExitCode;

use aws_s3_control_cmdlets::cli::{self, Cli};
use aws_s3_control_cmdlets::pipeline::JsonLines;
use aws_s3_control_cmdlets::Client;
use aws_sdk_s3control::error::DisplayErrorContext;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn,aws_s3_control_cmdlets=info";

#[tokio::main]
async fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let config = aws_s3_control_cmdlets::from_env()
        .account_id(args.global.account_id.clone())
        .iteration_mode(args.global.iteration_mode)
        .region(args.global.region.clone())
        .profile(args.global.profile.clone())
        .endpoint_url(args.global.endpoint_url.clone())
        .load()
        .await;
    let client = Client::new(config);

    let interrupt = client.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted, no further requests will be sent");
            interrupt.stop_processing();
        }
    });

    let mut stdout = JsonLines::new(std::io::stdout().lock());
    match cli::run(args, &client, &mut stdout).await {
        Ok(output) => {
            tracing::debug!(
                pages = output.pages_fetched(),
                records = output.records_written(),
                declined = output.declined(),
                "cmdlet complete"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{}", DisplayErrorContext(&err));
            ExitCode::FAILURE
        }
    }
}
