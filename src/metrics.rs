//! Prometheus registry: the request counter plus default process metrics.

use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
const HTTP_REQUESTS_HELP: &str = "Total HTTP requests";
const HTTP_REQUESTS_LABELS: [&str; 3] = ["method", "route", "status"];

/// Process-lifetime metrics state, shared by every worker through `web::Data`.
pub struct Metrics {
    registry: Registry,
    http_requests: IntCounterVec,
}

impl Metrics {
    /// Build a private registry with `http_requests_total` and, on Linux,
    /// the process collector (CPU, memory, file descriptors).
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let http_requests = IntCounterVec::new(
            Opts::new(HTTP_REQUESTS_TOTAL, HTTP_REQUESTS_HELP),
            &HTTP_REQUESTS_LABELS,
        )?;
        registry.register(Box::new(http_requests.clone()))?;

        #[cfg(target_os = "linux")]
        registry.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;

        Ok(Self {
            registry,
            http_requests,
        })
    }

    /// Bump the counter for one label combination, creating it on first use.
    pub fn increment(&self, method: &str, route: &str, status: u16) {
        let status = status.to_string();
        self.http_requests
            .with_label_values(&[method, route, status.as_str()])
            .inc();
    }

    /// Snapshot every registered family in the text exposition format.
    ///
    /// The encoder skips families without samples, so the counter's
    /// `# HELP`/`# TYPE` header is written by hand until the first increment.
    pub fn render(&self) -> prometheus::Result<String> {
        let families = self.registry.gather();
        let mut out = TextEncoder::new().encode_to_string(&families)?;

        let declared = format!("# TYPE {HTTP_REQUESTS_TOTAL} counter");
        if !out.lines().any(|l| l == declared) {
            out.push_str(&format!(
                "# HELP {HTTP_REQUESTS_TOTAL} {HTTP_REQUESTS_HELP}\n{declared}\n"
            ));
        }
        Ok(out)
    }

    /// Value for the `Content-Type` header of a scrape response.
    pub fn content_type(&self) -> String {
        format!("{}; charset=utf-8", TextEncoder::new().format_type())
    }
}
