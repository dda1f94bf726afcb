/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::io::Write;

use serde_json::Value;

use crate::error::Error;

/// Destination for the records produced by an invocation.
///
/// Records are written incrementally as each response page arrives.
pub trait Pipeline {
    /// Write a single record.
    fn write(&mut self, record: Value) -> Result<(), Error>;
}

impl Pipeline for Vec<Value> {
    fn write(&mut self, record: Value) -> Result<(), Error> {
        self.push(record);
        Ok(())
    }
}

/// Writes every record as a single line of JSON.
#[derive(Debug)]
pub struct JsonLines<W> {
    writer: W,
}

impl<W: Write> JsonLines<W> {
    /// Create a new JSON lines pipeline over `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the pipeline returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Pipeline for JsonLines<W> {
    fn write(&mut self, record: Value) -> Result<(), Error> {
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Write `value` to the pipeline, enumerating arrays into one record per element.
///
/// Returns the number of records written. `null` writes nothing.
pub(crate) fn write_enumerated(
    pipeline: &mut dyn Pipeline,
    value: Option<&Value>,
) -> Result<u64, Error> {
    match value {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Array(items)) => {
            for item in items {
                pipeline.write(item.clone())?;
            }
            Ok(items.len() as u64)
        }
        Some(value) => {
            pipeline.write(value.clone())?;
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::{write_enumerated, JsonLines, Pipeline};

    #[test]
    fn test_enumerates_arrays() {
        let mut records: Vec<Value> = Vec::new();
        let value = json!([{"a": 1}, {"a": 2}]);
        let written = write_enumerated(&mut records, Some(&value)).unwrap();
        assert_eq!(2, written);
        assert_eq!(vec![json!({"a": 1}), json!({"a": 2})], records);
    }

    #[test]
    fn test_null_writes_nothing() {
        let mut records: Vec<Value> = Vec::new();
        assert_eq!(0, write_enumerated(&mut records, Some(&Value::Null)).unwrap());
        assert_eq!(0, write_enumerated(&mut records, None).unwrap());
        assert!(records.is_empty());
    }

    #[test]
    fn test_scalar_written_once() {
        let mut records: Vec<Value> = Vec::new();
        let value = json!("policy-document");
        assert_eq!(1, write_enumerated(&mut records, Some(&value)).unwrap());
        assert_eq!(vec![value], records);
    }

    #[test]
    fn test_json_lines() {
        let mut pipeline = JsonLines::new(Vec::new());
        pipeline.write(json!({"Key": "env"})).unwrap();
        pipeline.write(json!("x")).unwrap();
        let out = String::from_utf8(pipeline.into_inner()).unwrap();
        assert_eq!("{\"Key\":\"env\"}\n\"x\"\n", out);
    }
}
