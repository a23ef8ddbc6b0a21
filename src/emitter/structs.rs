/// A single metric, without the prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricLine {
    pub name: String,
    /// The value as it appeared in the JSON document.
    pub value: String,
    /// Seconds since the epoch.
    pub timestamp: i64,
}

/// An ordered list of fields to read from one document.
///
/// If `sub_object` is set, the fields are read from that object inside the document,
/// and the metric names are `<sub_object>.<field>`.
/// Otherwise the fields are read at the top level and named `<field>`.
#[derive(Debug, Clone, Copy)]
pub struct MetricGroup {
    pub sub_object: Option<&'static str>,
    pub fields: &'static [&'static str],
}
