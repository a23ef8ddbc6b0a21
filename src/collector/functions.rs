//! The impls and functions.
//!
use std::{io::Write, time::Instant};
use log::*;
use serde_json::Value;
use crate::error::CollectError;
use crate::emitter::{self, MetricLine};
use crate::fetcher::Fetch;
use crate::collector::{NODES_PATH, NODE_FIELD, NODE_METRICS, OVERVIEW_MESSAGE_STATS, OVERVIEW_OBJECT_TOTALS, OVERVIEW_PATH};

/// Perform a collection run, writing the metric lines to `out`.
///
/// `timestamp` is used for every line.
pub fn collect<F: Fetch, W: Write>(
    fetcher: &F,
    prefix: &str,
    timestamp: i64,
    out: &mut W,
) -> Result<(), CollectError>
{
    info!("begin collect");
    let timer = Instant::now();

    let overview = fetcher.fetch(OVERVIEW_PATH)?;
    let lines = overview_lines(&overview, timestamp)?;
    emitter::write_lines(out, prefix, &lines)?;

    let nodename = node_name(&overview)?;
    let node = fetcher.fetch(&format!("{}{}", NODES_PATH, nodename))?;
    let lines = NODE_METRICS.emit(&node, timestamp)?;
    emitter::write_lines(out, prefix, &lines)?;

    info!("end collect: {:?}", timer.elapsed());
    Ok(())
}

pub fn overview_lines(
    overview: &Value,
    timestamp: i64,
) -> Result<Vec<MetricLine>, CollectError>
{
    let mut lines = OVERVIEW_OBJECT_TOTALS.emit(overview, timestamp)?;
    lines.extend(OVERVIEW_MESSAGE_STATS.emit(overview, timestamp)?);
    Ok(lines)
}

pub fn node_name(overview: &Value) -> Result<&str, CollectError> {
    let node = overview.get(NODE_FIELD)
        .ok_or_else(|| CollectError::MissingField(NODE_FIELD.to_string()))?;
    node.as_str()
        .ok_or_else(|| CollectError::UnsupportedValue { field: NODE_FIELD.to_string(), kind: emitter::value_kind(node) })
}
