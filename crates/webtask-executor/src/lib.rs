//! Sequential plan step dispatcher
//!
//! Takes an ordered [`Plan`](webtask_core::Plan) and drives a
//! [`BrowserDriver`](webtask_browser::BrowserDriver) through it step by
//! step, accumulating logs and screenshot data URIs into an
//! [`ExecutionResult`](webtask_core::ExecutionResult).

mod executor;

pub use executor::{ExecutorConfig, PlanExecutor};
