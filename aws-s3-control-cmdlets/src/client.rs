/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use tokio::sync::watch;

use crate::operation::invoke::InvokeFluentBuilder;
use crate::operation::Operation;
use crate::Config;

/// Cmdlet client for the Amazon S3 Control API.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations: config and the stop-processing signal.
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
    cancel_tx: watch::Sender<bool>,
}

impl Handle {
    /// A receiver observing the stop-processing signal.
    pub(crate) fn cancel_rx(&self) -> watch::Receiver<bool> {
        self.cancel_tx.subscribe()
    }
}

impl Client {
    /// Creates a new client from a cmdlet config.
    pub fn new(config: Config) -> Client {
        let (cancel_tx, _) = watch::channel(false);
        let handle = Arc::new(Handle { config, cancel_tx });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Invoke a single operation.
    ///
    /// Constructs a fluent builder carrying the common cmdlet parameters
    /// (`select`, `force`, `no_auto_iteration`) for the given operation input.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_s3_control_cmdlets::operation::list_caller_access_grants::ListCallerAccessGrants;
    ///
    /// async fn list_grants(
    ///     client: &aws_s3_control_cmdlets::Client,
    /// ) -> Result<(), aws_s3_control_cmdlets::error::Error> {
    ///     let input = ListCallerAccessGrants {
    ///         grant_scope: Some("s3://my-bucket/prefix*".to_owned()),
    ///         ..Default::default()
    ///     };
    ///
    ///     let mut records = Vec::new();
    ///     let summary = client.invoke(input).send(&mut records).await?;
    ///     println!("{} grants over {} pages", records.len(), summary.pages_fetched());
    ///     Ok(())
    /// }
    /// ```
    pub fn invoke<O: Operation>(&self, operation: O) -> InvokeFluentBuilder<O> {
        InvokeFluentBuilder::new(self.handle.clone(), operation)
    }

    /// Request that in-flight and future invocations on this client stop processing.
    ///
    /// Any invocation checks the signal before each remote call and abandons an outstanding
    /// call, returning an [`OperationCancelled`](crate::error::ErrorKind::OperationCancelled)
    /// error. Records already written to the pipeline are kept.
    pub fn stop_processing(&self) {
        self.handle.cancel_tx.send_replace(true);
    }

    /// Whether [`stop_processing`](Self::stop_processing) has been requested.
    pub fn is_stopping(&self) -> bool {
        *self.handle.cancel_tx.borrow()
    }
}
