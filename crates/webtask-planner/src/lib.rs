//! # webtask-planner
//!
//! Turns a natural-language [`TaskDefinition`](webtask_core::TaskDefinition)
//! into an executable [`Plan`](webtask_core::Plan).
//!
//! Two paths produce a plan:
//! - an LLM is prompted with [`planning_prompt`] and its reply is decoded
//!   with [`parse_plan_response`], or
//! - [`heuristic_plan`] builds a deterministic fallback from keywords in the
//!   instructions when no LLM is available.

mod generate;
mod prompt;

pub use generate::{heuristic_plan, parse_plan_response};
pub use prompt::{interpolate_params, planning_prompt};
