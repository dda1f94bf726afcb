/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;
use std::str::FromStr;

use crate::error::{self, Error};

/// Controls what part of a response (or which bound parameter) is written to the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Select {
    /// The operation's default output field.
    #[default]
    Default,

    /// The entire response record (`*`).
    ///
    /// For paginated operations only the final page's response is written.
    Response,

    /// The value of a bound cmdlet parameter (`^ParameterName`).
    Parameter(String),

    /// A single top-level field of the response, e.g. `NextToken`.
    Field(String),
}

impl FromStr for Select {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Err(error::invalid_input("select expression must not be empty")),
            "*" => Ok(Select::Response),
            _ => match s.strip_prefix('^') {
                Some("") => Err(error::invalid_input(
                    "select expression '^' must name a parameter",
                )),
                Some(name) => Ok(Select::Parameter(name.to_owned())),
                None => Ok(Select::Field(s.to_owned())),
            },
        }
    }
}

/// Global iteration behavior for paginated operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IterationMode {
    /// Automatically request every page of a listing.
    #[default]
    Auto,

    /// Legacy behavior: a single page is returned per invocation and the caller
    /// drives pagination with the returned `NextToken`.
    Legacy,
}

impl FromStr for IterationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(IterationMode::Auto),
            "legacy" => Ok(IterationMode::Legacy),
            other => Err(error::invalid_input(format!(
                "unknown iteration mode '{other}', expected 'auto' or 'legacy'"
            ))),
        }
    }
}

/// Continuation and page size parameters common to every list operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagingInput {
    /// Continuation token to start from.
    ///
    /// Supplying any value (even an empty one) means the caller controls pagination and only
    /// a single page is requested.
    pub next_token: Option<String>,

    /// Page size hint sent to the service.
    pub max_results: Option<i32>,
}

impl PagingInput {
    /// The token to send on the first request, if any.
    pub(crate) fn starting_token(&self) -> Option<String> {
        self.next_token.clone().filter(|token| !token.is_empty())
    }

    /// Whether the caller took manual control of pagination by supplying a token.
    pub(crate) fn user_controlled(&self) -> bool {
        self.next_token.is_some()
    }
}

/// A key/value resource tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    key: String,
    value: String,
}

impl Tag {
    /// Create a new tag
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The tag key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The tag value
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl FromStr for Tag {
    type Err = Error;

    /// Parse a tag from `Key=Value`. The value may be empty, the key may not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| error::invalid_input(format!("tag '{s}' must be in Key=Value form")))?;
        if key.is_empty() {
            return Err(error::invalid_input(format!("tag '{s}' has an empty key")));
        }
        Ok(Tag::new(key, value))
    }
}

impl TryFrom<&Tag> for aws_sdk_s3control::types::Tag {
    type Error = Error;

    fn try_from(value: &Tag) -> Result<Self, Self::Error> {
        let tag = aws_sdk_s3control::types::Tag::builder()
            .key(value.key())
            .value(value.value())
            .build()?;
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::{IterationMode, PagingInput, Select, Tag};
    use crate::error::ErrorKind;

    #[test]
    fn test_select_parse() {
        assert_eq!(Select::Response, "*".parse().unwrap());
        assert_eq!(
            Select::Parameter("Bucket".to_owned()),
            "^Bucket".parse().unwrap()
        );
        assert_eq!(
            Select::Field("NextToken".to_owned()),
            " NextToken ".parse().unwrap()
        );
        let err = "^".parse::<Select>().unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
        assert!("".parse::<Select>().is_err());
    }

    #[test]
    fn test_tag_parse() {
        let tag: Tag = "env=prod".parse().unwrap();
        assert_eq!("env", tag.key());
        assert_eq!("prod", tag.value());

        let tag: Tag = "expr=a=b".parse().unwrap();
        assert_eq!("a=b", tag.value());

        let tag: Tag = "empty=".parse().unwrap();
        assert_eq!("", tag.value());

        assert!("novalue".parse::<Tag>().is_err());
        assert!("=value".parse::<Tag>().is_err());
    }

    #[test]
    fn test_iteration_mode_parse() {
        assert_eq!(IterationMode::Legacy, "LEGACY".parse().unwrap());
        assert_eq!(IterationMode::Auto, "auto".parse().unwrap());
        assert!("sometimes".parse::<IterationMode>().is_err());
    }

    #[test]
    fn test_empty_starting_token_is_user_controlled() {
        let paging = PagingInput {
            next_token: Some(String::new()),
            max_results: None,
        };
        assert!(paging.user_controlled());
        assert_eq!(None, paging.starting_token());

        let paging = PagingInput::default();
        assert!(!paging.user_controlled());
    }
}
