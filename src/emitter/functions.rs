//! The impls and functions.
//!
use std::io::Write;
use log::*;
use serde_json::Value;
use crate::error::CollectError;
use crate::emitter::{MetricGroup, MetricLine};

impl MetricLine {
    pub fn render(&self, prefix: &str) -> String {
        format!("{}.{} {} {}", prefix, self.name, self.value, self.timestamp)
    }
}

impl MetricGroup {
    /// Look up every field of the group in `document`, in order.
    ///
    /// Fails on the first field that is missing; nothing is returned for the group then.
    pub fn emit(
        &self,
        document: &Value,
        timestamp: i64,
    ) -> Result<Vec<MetricLine>, CollectError>
    {
        let source = match self.sub_object {
            Some(sub_object) => {
                let object = document.get(sub_object)
                    .ok_or_else(|| CollectError::MissingField(sub_object.to_string()))?;
                if !object.is_object() {
                    return Err(CollectError::UnsupportedValue { field: sub_object.to_string(), kind: value_kind(object) });
                }
                object
            },
            None => document,
        };

        let mut lines = Vec::with_capacity(self.fields.len());
        for field in self.fields {
            let name = match self.sub_object {
                Some(sub_object) => format!("{}.{}", sub_object, field),
                None => field.to_string(),
            };
            let value = source.get(field)
                .ok_or_else(|| CollectError::MissingField(name.clone()))?;
            let value = render_value(&name, value)?;
            lines.push(MetricLine { name, value, timestamp });
        }
        debug!("{:?}: {} metrics", self.sub_object, lines.len());
        Ok(lines)
    }
}

/// Numbers keep their JSON representation, strings are printed without quotes.
pub fn render_value(
    field: &str,
    value: &Value,
) -> Result<String, CollectError>
{
    match value {
        Value::Number(number) => Ok(number.to_string()),
        Value::String(string) => Ok(string.clone()),
        other => Err(CollectError::UnsupportedValue { field: field.to_string(), kind: value_kind(other) }),
    }
}

pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn write_lines<W: Write>(
    out: &mut W,
    prefix: &str,
    lines: &[MetricLine],
) -> Result<(), CollectError>
{
    for line in lines {
        writeln!(out, "{}", line.render(prefix))?;
    }
    out.flush()?;
    Ok(())
}
