//! Fournil Observability
//!
//! - Console and JSON-file logging via `tracing-subscriber`
//! - HTTP request/response logging middleware
//! - Prometheus metrics for sessions and guard decisions
//!
//! Observability can be switched off at runtime with
//! `OBSERVABILITY_ENABLED=false`; logging to the console stays on.
//!
//! # Examples
//!
//! ```no_run
//! use fournil_observability::{init_metrics, init_tracing};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     let _handle = init_metrics();
//!     // ... application code ...
//! }
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{init_tracing, is_observability_enabled, logging_middleware};
pub use metrics::{
    init_metrics, metrics_app, metrics_middleware, track_guard_decision, track_login,
    track_logout,
};
pub use metrics_exporter_prometheus::PrometheusHandle;
