use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, register_counter, register_histogram};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("gateway_requests_total", "Total number of requests").unwrap();
    pub static ref AUTH_FAILURES: Counter =
        register_counter!("gateway_auth_failures_total", "Total failed authentications").unwrap();
    pub static ref RATE_LIMITED: Counter =
        register_counter!("gateway_rate_limited_total", "Total rate-limited requests").unwrap();
    pub static ref UPSTREAM_ERRORS: Counter =
        register_counter!("gateway_upstream_errors_total", "Total upstream call failures").unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "gateway_upstream_latency_seconds",
        "Upstream call latency in seconds"
    )
    .unwrap();
}
