use crate::emitter::MetricGroup;

pub const OVERVIEW_PATH: &str = "/overview";
pub const NODES_PATH: &str = "/nodes/";
/// The field in the overview that names the node that answered.
pub const NODE_FIELD: &str = "node";

pub const OVERVIEW_OBJECT_TOTALS: MetricGroup = MetricGroup {
    sub_object: Some("object_totals"),
    fields: &["consumers", "queues", "exchanges", "connections", "channels"],
};

pub const OVERVIEW_MESSAGE_STATS: MetricGroup = MetricGroup {
    sub_object: Some("message_stats"),
    fields: &["publish"],
};

pub const NODE_METRICS: MetricGroup = MetricGroup {
    sub_object: None,
    fields: &[
        "fd_used", "fd_total",
        "sockets_used", "sockets_total",
        "mem_used", "mem_limit",
        "disk_free", "disk_free_limit",
        "proc_used", "proc_total",
        "run_queue", "processors",
    ],
};
