/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::confirm::{Confirm, Prompt};
use crate::error::{self, Error};
use crate::pipeline::{write_enumerated, Pipeline};
use crate::types::Select;

use super::paginator::Paginator;
use super::{Operation, OperationContext};

/// Fluent builder for a single cmdlet invocation
pub struct InvokeFluentBuilder<O> {
    handle: Arc<crate::client::Handle>,
    operation: O,
    select: Select,
    force: bool,
    no_auto_iteration: bool,
    confirm: Option<Box<dyn Confirm>>,
}

impl<O: fmt::Debug> fmt::Debug for InvokeFluentBuilder<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("InvokeFluentBuilder");
        formatter.field("operation", &self.operation);
        formatter.field("select", &self.select);
        formatter.field("force", &self.force);
        formatter.field("no_auto_iteration", &self.no_auto_iteration);
        formatter.field("confirm", &self.confirm.is_some());
        formatter.finish()
    }
}

impl<O: Operation> InvokeFluentBuilder<O> {
    pub(crate) fn new(handle: Arc<crate::client::Handle>, operation: O) -> Self {
        Self {
            handle,
            operation,
            select: Select::Default,
            force: false,
            no_auto_iteration: false,
            confirm: None,
        }
    }

    /// Select what is written to the pipeline.
    ///
    /// Default is [Select::Default], the operation's primary output field.
    pub fn select(mut self, select: Select) -> Self {
        self.select = select;
        self
    }

    /// Skip the confirmation normally requested before a mutating operation.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Request a single page only, even when the service reports more results.
    pub fn no_auto_iteration(mut self, no_auto_iteration: bool) -> Self {
        self.no_auto_iteration = no_auto_iteration;
        self
    }

    /// Set the handler consulted before a mutating operation.
    ///
    /// Default is an interactive [`Prompt`] on the terminal.
    pub fn confirm(mut self, confirm: impl Confirm + 'static) -> Self {
        self.confirm = Some(Box::new(confirm));
        self
    }

    /// The operation input
    pub fn get_operation(&self) -> &O {
        &self.operation
    }

    /// Perform the invocation, writing records to `pipeline` as responses arrive.
    ///
    /// On error, records already written for earlier pages are not retracted.
    pub async fn send(self, pipeline: &mut dyn Pipeline) -> Result<InvokeOutput, Error> {
        let projection = Projection::resolve(&self.select, &self.operation)?;
        let context = OperationContext::new(self.handle);
        context.account_id(self.operation.account_id())?;
        self.operation.validate()?;
        let mut output = InvokeOutput::default();

        if let Some(target) = self.operation.confirm_target() {
            if !self.force {
                let mut confirm = self
                    .confirm
                    .unwrap_or_else(|| Box::new(Prompt) as Box<dyn Confirm>);
                if !confirm.confirm(O::NAME, &target)? {
                    tracing::info!("{} on target {target} was declined", O::NAME);
                    output.declined = true;
                    return Ok(output);
                }
            }
        }

        let mut paginator = Paginator::new(context, &self.operation, self.no_auto_iteration);
        let mut last_record = None;

        while let Some(page) = paginator.next_page().await {
            let page = page?;
            output.pages_fetched += 1;
            match &projection {
                Projection::Field(field) => {
                    let record = O::to_record(&page);
                    output.records_written +=
                        write_enumerated(pipeline, record.get(field.as_str()))?;
                }
                Projection::Response => last_record = Some(O::to_record(&page)),
                Projection::Parameter(_) | Projection::Nothing => {}
            }
        }

        match projection {
            Projection::Response => {
                output.records_written += write_enumerated(pipeline, last_record.as_ref())?;
            }
            Projection::Parameter(value) => {
                output.records_written += write_enumerated(pipeline, Some(&value))?;
            }
            Projection::Field(_) | Projection::Nothing => {}
        }

        output.next_token = paginator.remaining_token().map(str::to_owned);
        tracing::debug!(
            "{} complete: {} page(s), {} record(s)",
            O::NAME,
            output.pages_fetched,
            output.records_written
        );
        Ok(output)
    }
}

/// A [`Select`] resolved against a specific operation.
#[derive(Debug, PartialEq)]
enum Projection {
    Nothing,
    Response,
    Field(String),
    Parameter(Value),
}

impl Projection {
    /// Validate the select expression before any request is sent.
    fn resolve<O: Operation>(select: &Select, operation: &O) -> Result<Projection, Error> {
        match select {
            Select::Default => Ok(O::DEFAULT_SELECT
                .map(|field| Projection::Field(field.to_owned()))
                .unwrap_or(Projection::Nothing)),
            Select::Response => Ok(Projection::Response),
            Select::Field(field) if O::OUTPUT_FIELDS.contains(&field.as_str()) => {
                Ok(Projection::Field(field.clone()))
            }
            Select::Field(field) => Err(error::invalid_input(format!(
                "'{field}' is not a field of the {} response, expected one of {:?}",
                O::NAME,
                O::OUTPUT_FIELDS
            ))),
            Select::Parameter(name) => match operation.parameters().get(name.as_str()) {
                Some(value) => Ok(Projection::Parameter(value.clone())),
                None => Err(error::invalid_input(format!(
                    "'{name}' is not a parameter of {}",
                    O::NAME
                ))),
            },
        }
    }
}

/// Summary of a completed invocation
#[non_exhaustive]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InvokeOutput {
    pages_fetched: u64,
    records_written: u64,
    declined: bool,
    next_token: Option<String>,
}

impl InvokeOutput {
    /// The number of requests sent to the service
    pub fn pages_fetched(&self) -> u64 {
        self.pages_fetched
    }

    /// The number of records written to the pipeline
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Whether the operation was declined at the confirmation prompt (nothing was sent)
    pub fn declined(&self) -> bool {
        self.declined
    }

    /// Continuation token the service returned that was not followed because the caller
    /// controls pagination.
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Projection;
    use crate::operation::get_bucket_policy::GetBucketPolicy;
    use crate::operation::tag_resource::TagResource;
    use crate::types::Select;

    #[test]
    fn test_resolve_default() {
        let op = GetBucketPolicy::default();
        assert_eq!(
            Projection::Field("Policy".to_owned()),
            Projection::resolve(&Select::Default, &op).unwrap()
        );

        let op = TagResource::default();
        assert_eq!(
            Projection::Nothing,
            Projection::resolve(&Select::Default, &op).unwrap()
        );
    }

    #[test]
    fn test_resolve_parameter() {
        let op = GetBucketPolicy {
            bucket: "my-bucket".to_owned(),
            ..Default::default()
        };
        let select = Select::Parameter("Bucket".to_owned());
        assert_eq!(
            Projection::Parameter(json!("my-bucket")),
            Projection::resolve(&select, &op).unwrap()
        );

        let select = Select::Parameter("Nope".to_owned());
        assert!(Projection::resolve(&select, &op).is_err());
    }

    #[test]
    fn test_resolve_unknown_field() {
        let op = GetBucketPolicy::default();
        let select = Select::Field("Polcy".to_owned());
        let err = Projection::resolve(&select, &op).unwrap_err();
        assert_eq!(&crate::error::ErrorKind::InputInvalid, err.kind());
    }
}
