/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};
use crate::types::IterationMode;

use super::{Operation, OperationContext};

/// Drives an [`Operation`] one response page at a time, feeding back the continuation token
/// until the service stops returning one or the caller opted out of auto-iteration.
///
/// Non-paginated operations go through the same driver and simply complete after one call.
#[derive(Debug)]
pub(crate) struct Paginator<'a, O> {
    context: OperationContext,
    operation: &'a O,
    auto_iterate: bool,
    state: Option<State>,
}

#[derive(Debug, PartialEq)]
enum State {
    Paginating {
        // token to send with the next request
        next_token: Option<String>,
    },
    // the service has more results but the caller is controlling pagination
    Stopped {
        next_token: String,
    },
    Done,
}

impl State {
    fn next_state(self, output_token: Option<&str>, auto_iterate: bool) -> State {
        let output_token = output_token.filter(|token| !token.is_empty());
        match (self, output_token) {
            (State::Paginating { .. }, Some(token)) if auto_iterate => State::Paginating {
                next_token: Some(token.to_owned()),
            },
            (State::Paginating { .. }, Some(token)) => State::Stopped {
                next_token: token.to_owned(),
            },
            (State::Paginating { .. }, None) => State::Done,
            (prev_state, _) => prev_state,
        }
    }
}

impl<'a, O: Operation> Paginator<'a, O> {
    pub(crate) fn new(context: OperationContext, operation: &'a O, no_auto_iteration: bool) -> Self {
        let paging = operation.paging();
        let user_controlled = paging.map(|p| p.user_controlled()).unwrap_or(false);
        let auto_iterate = context.iteration_mode() == IterationMode::Auto
            && !no_auto_iteration
            && !user_controlled;

        let next_token = paging.and_then(|p| p.starting_token());
        Self {
            context,
            operation,
            auto_iterate,
            state: Some(State::Paginating { next_token }),
        }
    }

    fn state(&self) -> &State {
        self.state.as_ref().expect("valid state")
    }

    /// The continuation token left unconsumed when pagination stopped under caller control.
    pub(crate) fn remaining_token(&self) -> Option<&str> {
        match self.state() {
            State::Stopped { next_token } => Some(next_token),
            _ => None,
        }
    }

    /// Fetch the next page, returning `None` once pagination is complete.
    ///
    /// After an error no further requests are made.
    pub(crate) async fn next_page(&mut self) -> Option<Result<O::Output, Error>> {
        let next_token = match self.state() {
            State::Paginating { next_token } => next_token.clone(),
            State::Stopped { .. } | State::Done => return None,
        };

        let mut cancel_rx = self.context.cancel_rx();
        if *cancel_rx.borrow_and_update() {
            tracing::warn!("stop processing requested, not sending {}", O::NAME);
            self.state.replace(State::Done);
            return Some(Err(error::operation_cancelled()));
        }

        tracing::debug!(operation = O::NAME, next_token = ?next_token, "sending request");
        let result = tokio::select! {
            _ = cancel_rx.wait_for(|stop| *stop) => {
                tracing::warn!("stop processing requested, abandoning in-flight {}", O::NAME);
                Err(error::operation_cancelled())
            }
            result = self.operation.send(&self.context, next_token) => result,
        };

        match result {
            Ok(output) => {
                let prev_state = self.state.take().expect("state set");
                let next_state = prev_state.next_state(O::next_token(&output), self.auto_iterate);
                if let State::Stopped { next_token } = &next_state {
                    tracing::info!(
                        "more results are available for {}, resume with next token {next_token}",
                        O::NAME
                    );
                }
                self.state.replace(next_state);
                Some(Ok(output))
            }
            Err(err) => {
                self.state.replace(State::Done);
                Some(Err(error::describe_name_resolution(
                    err,
                    self.context.region(),
                )))
            }
        }
    }
}
