use shared::metrics_defs::{MetricDef, MetricType};

pub const REQUESTS_TOTAL: MetricDef = MetricDef {
    name: "hynek_poi_requests_total",
    metric_type: MetricType::Counter,
    description: "HTTP requests served, labeled by path and status.",
};

pub const REQUEST_DURATION_SECONDS: MetricDef = MetricDef {
    name: "hynek_poi_request_duration_seconds",
    metric_type: MetricType::Histogram,
    description: "HTTP request latency, labeled by path.",
};
