/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::io::{self, BufRead, Write};

use crate::error::Error;

/// Decides whether a mutating operation should proceed.
pub trait Confirm: Send {
    /// Return `true` to perform `operation` against `target`.
    fn confirm(&mut self, operation: &str, target: &str) -> Result<bool, Error>;
}

impl<F> Confirm for F
where
    F: FnMut(&str, &str) -> bool + Send,
{
    fn confirm(&mut self, operation: &str, target: &str) -> Result<bool, Error> {
        Ok(self(operation, target))
    }
}

/// Interactive confirmation on the terminal.
///
/// The question is written to stderr so that stdout only carries pipeline records.
#[derive(Debug, Default)]
pub struct Prompt;

impl Confirm for Prompt {
    fn confirm(&mut self, operation: &str, target: &str) -> Result<bool, Error> {
        let mut stderr = io::stderr().lock();
        write!(
            stderr,
            "Are you sure you want to perform this action?\n\
             Performing the operation \"{operation}\" on target \"{target}\".\n\
             [Y] Yes  [N] No (default is \"N\"): "
        )?;
        stderr.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_yes(&answer))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
