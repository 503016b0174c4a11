use shared::metrics_defs::{MetricDef, MetricType};

pub const CACHE_HITS_TOTAL: MetricDef = MetricDef {
    name: "hynek_poi_cache_hits_total",
    metric_type: MetricType::Counter,
    description: "Cache lookups satisfied by the layered cache.",
};

pub const CACHE_MISSES_TOTAL: MetricDef = MetricDef {
    name: "hynek_poi_cache_misses_total",
    metric_type: MetricType::Counter,
    description: "Cache lookups that fell through to the provider fan-out.",
};

pub const PROVIDER_DURATION_SECONDS: MetricDef = MetricDef {
    name: "hynek_poi_provider_duration_seconds",
    metric_type: MetricType::Histogram,
    description: "Per-provider search latency, labeled by provider name.",
};

pub const PROVIDER_ERRORS_TOTAL: MetricDef = MetricDef {
    name: "hynek_poi_provider_errors_total",
    metric_type: MetricType::Counter,
    description: "Per-provider search failures, labeled by provider and error kind.",
};
